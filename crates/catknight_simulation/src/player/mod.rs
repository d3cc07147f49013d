//! Player domain: attack/movement state machine, charge gesture, motor.
//!
//! ECS responsibility:
//! - attack gating (`PlayerActionState`), cooldown and fallback timers
//! - movement gating and jump
//!
//! Host responsibility:
//! - attack/jump clips (`AnimationRequest` in, `AnimationEvent` out)
//! - reading `Velocity`/`AnimationParams` for presentation

use bevy::prelude::*;

pub mod action_state;
pub mod charge;
pub mod events;
pub mod player;
pub mod systems;


pub use action_state::{ActionPhase, AttackConfig, AttackKind, CooldownPhase, PlayerActionState, TickOutcome};
pub use charge::{ChargeConfig, ChargeGesture, ChargeProgress};
pub use events::*;
pub use player::{spawn_player, FrozenGravity, Player, PlayerConfig, PlayerMotor};

use crate::GameSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackRequest>()
            .add_event::<AttackStarted>()
            .add_event::<AttackEnded>()
            .add_event::<AnimationEvent>()
            .add_event::<AnimationRequest>()
            .add_event::<JumpIntent>()
            .add_event::<JumpApplied>();

        app.add_systems(
            FixedUpdate,
            (
                systems::complete_attacks_from_animation,
                systems::tick_action_states,
                systems::restore_gravity_after_attack,
                systems::start_requested_attacks,
                systems::apply_movement_gating,
                systems::apply_jump_intents,
            )
                .chain()
                .in_set(GameSet::Player),
        );
    }
}
