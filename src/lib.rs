//! thud: collision reaction layer for an external 2D physics engine
//! (per-body handlers + normalized impact intensity, no detection/resolution)

pub mod types;
pub mod api;
pub mod intensity;
pub mod reaction;
pub mod reactor;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::reaction::{Handler, Reaction, ReactionConfig, ReactionSpec};
pub use crate::reactor::CollisionReactor;
