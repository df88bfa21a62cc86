use glam::Vec2;

/// User-defined stable body identifier carried through events and the
/// reaction side table (e.g., pack your entity id).
pub type BodyKey = u64;

/// Collision lifecycle phase as reported by the host engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First contact between the pair this step.
    Start,
    /// Contact persisting from a previous step.
    Active,
    /// The pair separated this step.
    End,
}

/// Value view of a host-owned body at the moment an event is delivered.
///
/// `mass` may be `f32::INFINITY` for a static/immovable body; infinite mass
/// contributes zero momentum.
#[derive(Copy, Clone, Debug)]
pub struct BodyState {
    pub key: BodyKey,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}

impl BodyState {
    /// True for immovable anchors (infinite mass).
    pub fn is_static(&self) -> bool {
        self.mass == f32::INFINITY
    }
}

/// Two bodies the engine detected as touching this step. Transient; never
/// persisted by the core.
#[derive(Copy, Clone, Debug)]
pub struct CollisionPair {
    pub a: BodyState,
    pub b: BodyState,
}

/// One collision notification's worth of pairs, in the engine's delivery
/// order (opaque but stable per call).
#[derive(Clone, Debug, Default)]
pub struct PairEvent {
    pub pairs: Vec<CollisionPair>,
    /// Host simulation timestamp, echoed into handler contexts.
    pub timestamp: f64,
}

/// Host engine notifications the core consumes. Hosts with a generic event
/// bus forward these through [`CollisionReactorApi::handle`].
///
/// [`CollisionReactorApi::handle`]: crate::api::CollisionReactorApi::handle
#[derive(Clone, Debug)]
pub enum EngineEvent {
    /// Fired at the start of every step, strictly before any collision
    /// notification for that step.
    BeforeUpdate { bodies: Vec<BodyState> },
    CollisionStart(PairEvent),
    CollisionActive(PairEvent),
    CollisionEnd(PairEvent),
}

/// Input delivered to a reaction handler. All fields are plain values; a
/// handler cannot reach back into the registry that invoked it.
#[derive(Copy, Clone, Debug)]
pub struct ReactionContext {
    /// The body whose reaction is being invoked.
    pub body: BodyState,
    /// The other side of the pair.
    pub other: BodyState,
    pub phase: Phase,
    pub timestamp: f64,
    /// Normalized impact intensity in [0, 1]. `Some` only for
    /// [`Phase::Start`]; momentum-at-impact is only meaningful at the
    /// instant contact begins.
    pub intensity: Option<f32>,
}

/// Reactor-level configuration.
#[derive(Clone, Debug)]
pub struct ReactorConfig {
    /// Upper bound used to normalize raw collision momentum into intensity.
    /// Defaults to unbounded (`f32::INFINITY`), which makes intensity
    /// identically 0: the feature is opt-in and inert until a finite
    /// positive threshold is supplied.
    pub momentum_upper_threshold: f32,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            momentum_upper_threshold: f32::INFINITY,
        }
    }
}

/// Per-step dispatch statistics, reset on each `before_update`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DispatchStats {
    /// Pairs delivered across the step's collision notifications.
    pub pairs_seen: usize,
    /// Pairs where neither side had a reaction for the phase.
    pub pairs_skipped: usize,
    /// Handler invocations performed.
    pub handlers_invoked: usize,
}
