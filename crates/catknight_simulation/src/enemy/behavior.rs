//! Enemy movement behaviors.

use bevy::prelude::*;

use super::components::{Enemy, EnemyBehavior, BOUNCE_COOLDOWN};
use crate::combat::Dead;
use crate::components::{AnimationParams, KinematicBody, Velocity};
use crate::config::GameConfig;

/// Max upward speed at which a grounded enemy may start a new hop
const BOUNCE_VERTICAL_TOLERANCE: f32 = 0.1;

/// System: drive every live enemy by its behavior variant.
///
/// - Flying: moves the transform directly (no gravity, no body)
/// - Grounded: writes horizontal velocity, hops when allowed;
///   physics integrates afterwards
/// - Both turn around at the arena walls
pub fn update_enemy_behaviors(
    mut enemies: Query<
        (
            &mut EnemyBehavior,
            &mut Transform,
            &mut AnimationParams,
            Option<&mut Velocity>,
            Option<&KinematicBody>,
        ),
        (With<Enemy>, Without<Dead>),
    >,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let wall = config.arena.half_width;

    for (mut behavior, mut transform, mut params, velocity, body) in enemies.iter_mut() {
        let x = transform.translation.x;
        let dir = behavior.direction();
        if (x >= wall && dir > 0.0) || (x <= -wall && dir < 0.0) {
            behavior.reverse();
        }

        match &mut *behavior {
            EnemyBehavior::Flying {
                direction,
                speed,
                base_y,
                bob_height,
                bob_speed,
                phase,
                age,
            } => {
                *age += delta;
                transform.translation.x += *speed * *direction * delta;
                transform.translation.y = *base_y + ((*age + *phase) * *bob_speed).sin() * *bob_height;
            }
            EnemyBehavior::Grounded {
                direction,
                speed,
                bounce_velocity,
                since_bounce,
            } => {
                *since_bounce += delta;

                if let Some(mut velocity) = velocity {
                    velocity.0.x = *speed * *direction;

                    let grounded = body.is_some_and(|b| b.grounded);
                    if grounded
                        && velocity.0.y <= BOUNCE_VERTICAL_TOLERANCE
                        && *since_bounce >= BOUNCE_COOLDOWN
                    {
                        velocity.0.y = *bounce_velocity;
                        *since_bounce = 0.0;
                    }
                }
            }
        }

        params.flip_x = behavior.direction() < 0.0;
    }
}
