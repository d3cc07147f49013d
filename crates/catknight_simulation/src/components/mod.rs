//! Shared ECS components
//!
//! Organized by domain:
//! - actor: health pool
//! - movement: kinematic body, velocity, facing, move input, hurtbox
//! - animation: parameters the host animator reads every tick

pub mod actor;
pub mod animation;
pub mod movement;

pub use actor::*;
pub use animation::*;
pub use movement::*;
