use glam::Vec2;

use crate::reaction::ReactionConfig;
use crate::types::*;

/// Public API contract for the collision reaction core.
///
/// The core owns no physics: the host engine detects and resolves
/// collisions, and forwards its lifecycle notifications here. All methods
/// are synchronous and infallible; missing configuration and absent
/// handlers are "nothing to do" states, never errors.
pub trait CollisionReactorApi {
    /// Construct a new reactor with the given configuration.
    fn new(cfg: ReactorConfig) -> Self
    where
        Self: Sized;

    // --- Body lifecycle ----------------------------------------------------

    /// Register a body's reaction configuration. The host calls this
    /// immediately after constructing the body. The config is normalized
    /// (bare-handler shorthand rewritten to the record form) before storage.
    /// Re-registering a key replaces its reactions but keeps any velocity
    /// snapshot already taken this step.
    fn on_body_created(&mut self, key: BodyKey, config: ReactionConfig);

    /// Drop all core-owned state for a body the host has destroyed.
    fn on_body_removed(&mut self, key: BodyKey);

    // --- Step lifecycle ----------------------------------------------------

    /// Snapshot every listed body's velocity for this step, overwriting any
    /// prior snapshot. The host must call this strictly before the step's
    /// collision notifications; intensity for `collisionStart` is computed
    /// from these pre-resolution velocities.
    fn before_update(&mut self, bodies: &[BodyState]);

    /// Route a `collisionStart` notification: invoke each side's `start`
    /// reaction with an intensity computed from the pair's snapshots.
    fn collision_start(&mut self, event: &PairEvent);

    /// Route a `collisionActive` notification (no intensity).
    fn collision_active(&mut self, event: &PairEvent);

    /// Route a `collisionEnd` notification (no intensity).
    fn collision_end(&mut self, event: &PairEvent);

    /// Forward a host engine notification to the matching step method.
    fn handle(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::BeforeUpdate { bodies } => self.before_update(&bodies),
            EngineEvent::CollisionStart(e) => self.collision_start(&e),
            EngineEvent::CollisionActive(e) => self.collision_active(&e),
            EngineEvent::CollisionEnd(e) => self.collision_end(&e),
        }
    }

    // --- Introspection -----------------------------------------------------

    /// Number of bodies with a side-table entry.
    fn body_count(&self) -> usize;

    /// Whether `key` has a reaction registered for `phase`.
    fn has_reaction(&self, key: BodyKey, phase: Phase) -> bool;

    /// The velocity snapshot taken for `key` this step, if any.
    fn last_velocity(&self, key: BodyKey) -> Option<Vec2>;

    /// Dispatch statistics for the current step.
    fn stats(&self) -> DispatchStats;
}
