//! Per-body reaction configuration and its normalization.

use crate::types::{Phase, ReactionContext};

/// Reaction callback. Invoked synchronously during event dispatch; a
/// long-running handler delays the host's next physics step.
pub type Handler = Box<dyn FnMut(&ReactionContext)>;

/// Record form of a reaction: the handler plus room for future metadata.
pub struct Reaction {
    pub handler: Handler,
}

/// One phase slot of a body's configuration: either the bare-handler
/// shorthand or the full record form. Normalization rewrites shorthand
/// into [`ReactionSpec::Reaction`].
pub enum ReactionSpec {
    Handler(Handler),
    Reaction(Reaction),
}

impl ReactionSpec {
    /// Shorthand constructor: wrap a bare callback.
    pub fn handler(f: impl FnMut(&ReactionContext) + 'static) -> Self {
        ReactionSpec::Handler(Box::new(f))
    }

    /// True once in record form.
    pub fn is_record(&self) -> bool {
        matches!(self, ReactionSpec::Reaction(_))
    }

    /// Rewrite shorthand into the record form; records pass through
    /// untouched (existing fields win).
    fn into_record(self) -> Self {
        match self {
            ReactionSpec::Handler(handler) => ReactionSpec::Reaction(Reaction { handler }),
            record => record,
        }
    }

    fn handler_mut(&mut self) -> &mut Handler {
        match self {
            ReactionSpec::Handler(h) => h,
            ReactionSpec::Reaction(r) => &mut r.handler,
        }
    }
}

impl From<Reaction> for ReactionSpec {
    fn from(r: Reaction) -> Self {
        ReactionSpec::Reaction(r)
    }
}

/// A body's declarative collision configuration: one optional reaction per
/// lifecycle phase. Absence of a slot means the body does not participate
/// in that phase.
#[derive(Default)]
pub struct ReactionConfig {
    pub start: Option<ReactionSpec>,
    pub active: Option<ReactionSpec>,
    pub end: Option<ReactionSpec>,
}

impl ReactionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder shorthand: react to first contact.
    pub fn on_start(mut self, f: impl FnMut(&ReactionContext) + 'static) -> Self {
        self.start = Some(ReactionSpec::handler(f));
        self
    }

    /// Builder shorthand: react to persisting contact.
    pub fn on_active(mut self, f: impl FnMut(&ReactionContext) + 'static) -> Self {
        self.active = Some(ReactionSpec::handler(f));
        self
    }

    /// Builder shorthand: react to separation.
    pub fn on_end(mut self, f: impl FnMut(&ReactionContext) + 'static) -> Self {
        self.end = Some(ReactionSpec::handler(f));
        self
    }

    /// Set one phase slot explicitly.
    pub fn set(&mut self, phase: Phase, spec: ReactionSpec) {
        *self.slot_mut(phase) = Some(spec);
    }

    /// Rewrite every present shorthand slot into the record form. Idempotent:
    /// normalizing an already-normalized config is a no-op.
    pub fn normalize(&mut self) {
        for phase in [Phase::Start, Phase::Active, Phase::End] {
            let slot = self.slot_mut(phase);
            if let Some(spec) = slot.take() {
                *slot = Some(spec.into_record());
            }
        }
    }

    /// Whether this config reacts to `phase`.
    pub fn has(&self, phase: Phase) -> bool {
        self.slot(phase).is_some()
    }

    pub(crate) fn handler_mut(&mut self, phase: Phase) -> Option<&mut Handler> {
        self.slot_mut(phase).as_mut().map(ReactionSpec::handler_mut)
    }

    fn slot(&self, phase: Phase) -> &Option<ReactionSpec> {
        match phase {
            Phase::Start => &self.start,
            Phase::Active => &self.active,
            Phase::End => &self.end,
        }
    }

    fn slot_mut(&mut self, phase: Phase) -> &mut Option<ReactionSpec> {
        match phase {
            Phase::Start => &mut self.start,
            Phase::Active => &mut self.active,
            Phase::End => &mut self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BodyState, Phase};
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ctx(phase: Phase) -> ReactionContext {
        let body = BodyState {
            key: 1,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
        };
        ReactionContext {
            body,
            other: body,
            phase,
            timestamp: 0.0,
            intensity: None,
        }
    }

    #[test]
    fn test_shorthand_is_rewritten_to_record() {
        let mut cfg = ReactionConfig::new().on_start(|_| {});
        assert!(!cfg.start.as_ref().unwrap().is_record());
        cfg.normalize();
        assert!(cfg.start.as_ref().unwrap().is_record());
        assert!(cfg.active.is_none());
        assert!(cfg.end.is_none());
    }

    #[test]
    fn test_normalize_is_idempotent_and_keeps_handler() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut cfg = ReactionConfig::new().on_end(move |_| h.set(h.get() + 1));
        cfg.normalize();
        cfg.normalize();
        assert!(cfg.end.as_ref().unwrap().is_record());
        assert!(cfg.start.is_none());
        let c = ctx(Phase::End);
        (cfg.handler_mut(Phase::End).unwrap())(&c);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_record_form_passes_through_untouched() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut cfg = ReactionConfig::new();
        cfg.set(
            Phase::Active,
            Reaction {
                handler: Box::new(move |_| h.set(h.get() + 1)),
            }
            .into(),
        );
        cfg.normalize();
        let c = ctx(Phase::Active);
        (cfg.handler_mut(Phase::Active).unwrap())(&c);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_has_per_phase() {
        let cfg = ReactionConfig::new().on_start(|_| {});
        assert!(cfg.has(Phase::Start));
        assert!(!cfg.has(Phase::Active));
        assert!(!cfg.has(Phase::End));
    }
}
