//! Enemy components.

use bevy::prelude::*;

use super::definition::{EnemyDefinition, EnemyKind};
use crate::components::{AnimationParams, GravityScale, Health, Hurtbox, KinematicBody, Velocity};

/// Enemy marker + kind tag.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(Health, Hurtbox, Transform, AnimationParams)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Gravity multiplier for grounded enemies (heavier fall, snappier hops)
pub const GROUNDED_GRAVITY_SCALE: f32 = 3.0;

/// Seconds between hops of a grounded enemy
pub const BOUNCE_COOLDOWN: f32 = 0.5;

/// Per-enemy movement behavior, selected by `EnemyKind`.
///
/// `direction` is +1.0 (moving right) or -1.0 (moving left).
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum EnemyBehavior {
    /// Constant horizontal drift + sine bob around `base_y`
    Flying {
        direction: f32,
        speed: f32,
        base_y: f32,
        bob_height: f32,
        bob_speed: f32,
        /// Bob phase offset (randomized at spawn so flocks don't sync)
        phase: f32,
        age: f32,
    },
    /// Walks along the ground, hopping on a cooldown
    Grounded {
        direction: f32,
        speed: f32,
        bounce_velocity: f32,
        since_bounce: f32,
    },
}

impl EnemyBehavior {
    pub fn direction(&self) -> f32 {
        match self {
            EnemyBehavior::Flying { direction, .. } | EnemyBehavior::Grounded { direction, .. } => {
                *direction
            }
        }
    }

    pub fn reverse(&mut self) {
        match self {
            EnemyBehavior::Flying { direction, .. } | EnemyBehavior::Grounded { direction, .. } => {
                *direction = -*direction;
            }
        }
    }
}

/// Hop speed reaching `height` under `gravity` (v = sqrt(2gh)).
pub fn bounce_velocity_for(height: f32, gravity: f32) -> f32 {
    (2.0 * gravity.max(0.0) * height.max(0.0)).sqrt()
}

/// Spawn an enemy entity of `kind` at `position`.
pub fn spawn_enemy(
    commands: &mut Commands,
    kind: EnemyKind,
    definition: &EnemyDefinition,
    position: Vec2,
    behavior: EnemyBehavior,
) -> Entity {
    let mut entity = commands.spawn((
        Enemy { kind },
        Health::new(definition.max_health),
        Hurtbox {
            half_extents: definition.half_extents(),
        },
        Transform::from_translation(position.extend(0.0)),
        AnimationParams {
            speed: 1.0,
            flip_x: behavior.direction() < 0.0,
        },
    ));

    if matches!(behavior, EnemyBehavior::Grounded { .. }) {
        entity.insert((
            Velocity::default(),
            GravityScale(GROUNDED_GRAVITY_SCALE),
            KinematicBody {
                half_height: definition.half_height,
                grounded: false,
            },
        ));
    }

    entity.insert(behavior);
    entity.id()
}
