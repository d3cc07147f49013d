//! Minimal kinematic integration for the arena.
//!
//! Not a physics engine: one flat ground line, gravity, velocity
//! integration. Collisions beyond "feet touch the ground" belong to the host.
//!
//! Order per tick: gravity → integrate → ground snap.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{GravityScale, KinematicBody, Velocity};
use crate::config::GameConfig;
use crate::GameSet;

/// Arena geometry and gravity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Gravity acceleration (units/sec², positive = down)
    pub gravity: f32,
    /// World Y of the ground line
    pub ground_level: f32,
    /// Walls at x = ±half_width
    pub half_width: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            ground_level: -3.0,
            half_width: 12.0,
        }
    }
}

/// System: accelerate airborne bodies downward.
pub fn apply_gravity(
    mut query: Query<(&GravityScale, &KinematicBody, &mut Velocity)>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (scale, body, mut velocity) in query.iter_mut() {
        if !body.grounded {
            velocity.0.y -= config.arena.gravity * scale.0 * delta;
        }
    }
}

/// System: position += velocity * dt.
pub fn integrate_velocity(mut query: Query<(&Velocity, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.0.extend(0.0) * delta;
    }
}

/// System: snap bodies onto the ground line and refresh `grounded`.
pub fn ground_detection(
    mut query: Query<(&mut Transform, &mut KinematicBody, &mut Velocity)>,
    config: Res<GameConfig>,
) {
    let ground = config.arena.ground_level;

    for (mut transform, mut body, mut velocity) in query.iter_mut() {
        let feet = transform.translation.y - body.half_height;
        if feet <= ground {
            transform.translation.y = ground + body.half_height;
            if velocity.0.y < 0.0 {
                velocity.0.y = 0.0;
            }
            body.grounded = true;
        } else {
            body.grounded = false;
        }
    }
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();

        app.add_systems(
            FixedUpdate,
            (apply_gravity, integrate_velocity, ground_detection)
                .chain()
                .in_set(GameSet::Physics),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_headless_app, step_fixed};

    fn physics_app() -> App {
        let mut app = create_headless_app(0);
        app.add_plugins(PhysicsPlugin);
        app
    }

    #[test]
    fn test_body_falls_and_lands() {
        let mut app = physics_app();
        let body = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 2.0, 0.0),
                Velocity::default(),
                GravityScale(1.0),
                KinematicBody::default(),
            ))
            .id();

        step_fixed(&mut app, 0.1);
        let y = app.world().get::<Transform>(body).map(|t| t.translation.y);
        assert!(y.is_some_and(|y| y < 2.0), "body should fall, y = {:?}", y);

        for _ in 0..100 {
            step_fixed(&mut app, 0.05);
        }

        let world = app.world();
        let transform = world.get::<Transform>(body).copied().unwrap_or_default();
        let kinematic = world.get::<KinematicBody>(body).copied().unwrap_or_default();
        // ground -3.0 + half_height 0.5
        assert_eq!(transform.translation.y, -2.5);
        assert!(kinematic.grounded);
        assert_eq!(world.get::<Velocity>(body).map(|v| v.0.y), Some(0.0));
    }

    #[test]
    fn test_zero_gravity_scale_floats() {
        let mut app = physics_app();
        let body = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 2.0, 0.0),
                Velocity::default(),
                GravityScale(0.0),
                KinematicBody::default(),
            ))
            .id();

        for _ in 0..10 {
            step_fixed(&mut app, 0.1);
        }

        assert_eq!(app.world().get::<Transform>(body).map(|t| t.translation.y), Some(2.0));
    }
}
