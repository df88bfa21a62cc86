use glam::Vec2;

use std::collections::HashMap;

use crate::api::CollisionReactorApi;
use crate::intensity;
use crate::reaction::ReactionConfig;
use crate::types::*;

/// Collision reaction core: a side table keyed by [`BodyKey`] holding each
/// body's normalized reactions and its per-step velocity snapshot.
///
/// Single-threaded by contract: everything runs synchronously inside the
/// host's step loop, and handlers are invoked inline during dispatch.
pub struct CollisionReactor {
    pub cfg: ReactorConfig,

    // Side table: reactions + last snapshot per registered body
    bodies: HashMap<BodyKey, BodyEntry>,

    // Per-step dispatch counters
    stats: DispatchStats,
}

#[derive(Default)]
struct BodyEntry {
    reactions: ReactionConfig,
    last_velocity: Option<Vec2>,
}

impl CollisionReactorApi for CollisionReactor {
    fn new(cfg: ReactorConfig) -> Self {
        Self {
            cfg,
            bodies: HashMap::new(),
            stats: DispatchStats::default(),
        }
    }

    fn on_body_created(&mut self, key: BodyKey, mut config: ReactionConfig) {
        config.normalize();
        self.bodies.entry(key).or_default().reactions = config;
    }

    fn on_body_removed(&mut self, key: BodyKey) {
        self.bodies.remove(&key);
    }

    fn before_update(&mut self, bodies: &[BodyState]) {
        self.stats = DispatchStats::default();
        for body in bodies {
            // Upsert so bodies the host never registered still get a
            // snapshot; they just have no reactions to invoke.
            let entry = self.bodies.entry(body.key).or_default();
            entry.last_velocity = Some(body.velocity);
        }
    }

    fn collision_start(&mut self, event: &PairEvent) {
        self.dispatch(Phase::Start, event);
    }

    fn collision_active(&mut self, event: &PairEvent) {
        self.dispatch(Phase::Active, event);
    }

    fn collision_end(&mut self, event: &PairEvent) {
        self.dispatch(Phase::End, event);
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn has_reaction(&self, key: BodyKey, phase: Phase) -> bool {
        self.bodies
            .get(&key)
            .is_some_and(|e| e.reactions.has(phase))
    }

    fn last_velocity(&self, key: BodyKey) -> Option<Vec2> {
        self.bodies.get(&key).and_then(|e| e.last_velocity)
    }

    fn stats(&self) -> DispatchStats {
        self.stats
    }
}

impl CollisionReactor {
    fn dispatch(&mut self, phase: Phase, event: &PairEvent) {
        for pair in &event.pairs {
            self.stats.pairs_seen += 1;
            let (a, b) = (pair.a, pair.b);

            if !self.has_reaction(a.key, phase) && !self.has_reaction(b.key, phase) {
                self.stats.pairs_skipped += 1;
                continue;
            }

            // Intensity is only meaningful at the instant contact begins;
            // both sides see the same value.
            let intensity = (phase == Phase::Start).then(|| {
                let va = self.snapshot_or_zero(a.key);
                let vb = self.snapshot_or_zero(b.key);
                let raw = intensity::collision_momentum(va, a.mass, vb, b.mass);
                intensity::intensity(raw, self.cfg.momentum_upper_threshold)
            });

            // Both invocations are unconditional and independent; one
            // side's absence never suppresses the other's.
            self.invoke(phase, a, b, event.timestamp, intensity);
            self.invoke(phase, b, a, event.timestamp, intensity);
        }
    }

    fn invoke(
        &mut self,
        phase: Phase,
        body: BodyState,
        other: BodyState,
        timestamp: f64,
        intensity: Option<f32>,
    ) {
        let Some(entry) = self.bodies.get_mut(&body.key) else {
            return;
        };
        let Some(handler) = entry.reactions.handler_mut(phase) else {
            return;
        };
        let ctx = ReactionContext {
            body,
            other,
            phase,
            timestamp,
            intensity,
        };
        handler(&ctx);
        self.stats.handlers_invoked += 1;
    }

    /// Snapshot for a body, or zero for bodies created mid-step that have
    /// not been through a `before_update` yet.
    fn snapshot_or_zero(&self, key: BodyKey) -> Vec2 {
        self.bodies
            .get(&key)
            .and_then(|e| e.last_velocity)
            .unwrap_or(Vec2::ZERO)
    }
}
