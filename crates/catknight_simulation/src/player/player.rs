//! Player marker, motor parameters and spawn helper.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::action_state::{AttackConfig, PlayerActionState};
use crate::components::{
    AnimationParams, Facing, GravityScale, Hurtbox, KinematicBody, MoveInput, Velocity,
};

/// Marker for the player-controlled entity.
///
/// Input systems filter on `With<Player>`; enemy logic never touches it.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    PlayerActionState,
    MoveInput,
    Velocity,
    Facing,
    AnimationParams,
    KinematicBody,
    GravityScale,
    Hurtbox,
    Transform
)]
pub struct Player;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed at full input (units/sec)
    pub move_speed: f32,
    /// Initial upward speed of a jump (units/sec)
    pub jump_velocity: f32,
    /// Top-down variant: vertical input drives velocity.y and gravity is off
    pub vertical_control: bool,
    pub half_height: f32,
    /// Spawn point
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_velocity: 8.0,
            vertical_control: false,
            half_height: 0.5,
            spawn_x: 0.0,
            spawn_y: -2.5,
        }
    }
}

/// Per-player motor parameters (copied from config at spawn).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMotor {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub vertical_control: bool,
    pub freeze_gravity_during_attack: bool,
}

impl PlayerMotor {
    pub fn new(player: &PlayerConfig, attack: &AttackConfig) -> Self {
        Self {
            move_speed: player.move_speed,
            jump_velocity: player.jump_velocity,
            vertical_control: player.vertical_control,
            // Nothing to freeze when gravity is already off
            freeze_gravity_during_attack: attack.freeze_gravity_during_attack
                && !player.vertical_control,
        }
    }
}

/// Gravity scale stashed while an attack freezes the player mid-air.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FrozenGravity(pub f32);

/// Spawn the player with its full component set.
pub fn spawn_player(commands: &mut Commands, player: &PlayerConfig, attack: &AttackConfig) -> Entity {
    let gravity = if player.vertical_control { 0.0 } else { 1.0 };

    let entity = commands
        .spawn((
            Player,
            PlayerActionState::new(attack),
            PlayerMotor::new(player, attack),
            Transform::from_xyz(player.spawn_x, player.spawn_y, 0.0),
            GravityScale(gravity),
            KinematicBody {
                half_height: player.half_height,
                grounded: false,
            },
        ))
        .id();

    crate::logger::log_info(&format!("Player spawned: {:?}", entity));
    entity
}
