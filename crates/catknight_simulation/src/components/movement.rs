//! Movement components: kinematic body, velocity, facing, input.

use bevy::prelude::*;

/// Linear velocity (units/sec), integrated by `physics::integrate_velocity`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Gravity multiplier (0 = floating).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GravityScale(pub f32);

impl Default for GravityScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Body resting on the arena ground line.
///
/// `grounded` is refreshed by `physics::ground_detection` every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    /// Distance from the transform origin to the feet
    pub half_height: f32,
    pub grounded: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            half_height: 0.5,
            grounded: false,
        }
    }
}

/// Horizontal facing. Attacks are resolved on this side.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub right: bool,
}

impl Default for Facing {
    fn default() -> Self {
        Self { right: true }
    }
}

impl Facing {
    /// +1.0 facing right, -1.0 facing left
    pub fn sign(&self) -> f32 {
        if self.right {
            1.0
        } else {
            -1.0
        }
    }

    /// Follow the sign of horizontal input; zero input keeps the last facing.
    pub fn update_from_axis(&mut self, x: f32) {
        if x > 0.0 {
            self.right = true;
        } else if x < 0.0 {
            self.right = false;
        }
    }
}

/// Normalized movement input from the input source.
///
/// `x`: -1.0 (left) → +1.0 (right); `y`: -1.0 (down) → +1.0 (up)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveInput {
    pub axis: Vec2,
}

/// Damage-receiving box, centred on the transform.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Hurtbox {
    pub half_extents: Vec2,
}

impl Default for Hurtbox {
    fn default() -> Self {
        Self {
            half_extents: Vec2::splat(0.5),
        }
    }
}
