//! Animator-facing state.
//!
//! The simulation never plays animations. It writes parameters here and
//! sends `AnimationRequest` triggers; the host animator reads both.

use bevy::prelude::*;

/// Continuous animator parameters (blend trees, sprite flip).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationParams {
    /// Movement input magnitude (0 = idle pose)
    pub speed: f32,
    /// Sprite mirrored (facing left)
    pub flip_x: bool,
}
