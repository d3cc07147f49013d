//! Player systems: attack lifecycle, movement gating, jump.
//!
//! Order inside `GameSet::Player` (chained):
//! 1. complete_attacks_from_animation: host completion signal
//! 2. tick_action_states: cooldown + fallback timers
//! 3. restore_gravity_after_attack: undo the mid-air freeze
//! 4. start_requested_attacks: `AttackRequest` → `AttackStarted`
//! 5. apply_movement_gating: `MoveInput` → `Velocity` (outside attacks only)
//! 6. apply_jump_intents

use bevy::prelude::*;

use super::action_state::PlayerActionState;
use super::events::{
    AnimationEvent, AnimationRequest, AnimationTrigger, AttackEnded, AttackRequest, AttackStarted,
    JumpApplied, JumpIntent,
};
use super::player::{FrozenGravity, PlayerMotor};
use crate::components::{AnimationParams, Facing, GravityScale, KinematicBody, MoveInput, Velocity};

/// System: close attacks on the host's completion signal.
pub fn complete_attacks_from_animation(
    mut animation_events: EventReader<AnimationEvent>,
    mut states: Query<&mut PlayerActionState>,
    mut ended_events: EventWriter<AttackEnded>,
) {
    for event in animation_events.read() {
        let AnimationEvent::AttackFinished { entity } = *event;

        let Ok(mut state) = states.get_mut(entity) else {
            crate::logger::log_warning(&format!(
                "AttackFinished for {:?} without PlayerActionState, ignored",
                entity
            ));
            continue;
        };

        // Duplicate or late signals are no-ops
        if state.complete_attack() {
            ended_events.write(AttackEnded { entity, forced: false });
            crate::logger::log(&format!("Attack completed (entity: {:?})", entity));
        }
    }
}

/// System: advance cooldown and fallback timers.
pub fn tick_action_states(
    mut states: Query<(Entity, &mut PlayerActionState)>,
    time: Res<Time<Fixed>>,
    mut ended_events: EventWriter<AttackEnded>,
) {
    let delta = time.delta_secs();

    for (entity, mut state) in states.iter_mut() {
        let outcome = state.tick(delta);

        if outcome.forced_completion {
            ended_events.write(AttackEnded { entity, forced: true });
        }
        if outcome.became_ready {
            crate::logger::log(&format!("Attack cooldown elapsed, can attack again (entity: {:?})", entity));
        }
    }
}

/// System: start attacks requested by the input layer.
///
/// On success:
/// - `AttackStarted` (hit-detection request) + `AnimationRequest::Attack`
/// - horizontal velocity zeroed
/// - gravity frozen (platformer variant), original scale stashed in `FrozenGravity`
pub fn start_requested_attacks(
    mut requests: EventReader<AttackRequest>,
    mut players: Query<(
        &mut PlayerActionState,
        &PlayerMotor,
        &mut Velocity,
        Option<&mut GravityScale>,
        Option<&FrozenGravity>,
    )>,
    mut commands: Commands,
    mut started_events: EventWriter<AttackStarted>,
    mut animation_requests: EventWriter<AnimationRequest>,
) {
    for request in requests.read() {
        let Ok((mut state, motor, mut velocity, gravity, frozen)) = players.get_mut(request.entity) else {
            continue;
        };

        if !state.request_attack(request.kind) {
            crate::logger::log(&format!(
                "Attack rejected (entity: {:?}, attacking: {}, can_attack: {})",
                request.entity,
                state.is_attacking(),
                state.can_attack()
            ));
            continue;
        }

        velocity.0.x = 0.0;

        if motor.freeze_gravity_during_attack {
            if let Some(mut gravity) = gravity {
                // Already frozen (stale stash) → keep the original value
                if frozen.is_none() {
                    commands.entity(request.entity).insert(FrozenGravity(gravity.0));
                }
                gravity.0 = 0.0;
                velocity.0.y = 0.0;
            }
        } else if motor.vertical_control {
            velocity.0.y = 0.0;
        }

        started_events.write(AttackStarted {
            entity: request.entity,
            kind: request.kind,
        });
        animation_requests.write(AnimationRequest {
            entity: request.entity,
            trigger: AnimationTrigger::Attack,
        });

        crate::logger::log(&format!(
            "Attack started (entity: {:?}, kind: {:?})",
            request.entity, request.kind
        ));
    }
}

/// System: restore stashed gravity once the attack window closes
/// (normal completion or forced reset).
pub fn restore_gravity_after_attack(
    mut ended_events: EventReader<AttackEnded>,
    mut players: Query<(&mut GravityScale, &FrozenGravity)>,
    mut commands: Commands,
) {
    for event in ended_events.read() {
        let Ok((mut gravity, frozen)) = players.get_mut(event.entity) else {
            continue;
        };

        gravity.0 = frozen.0;
        commands.entity(event.entity).remove::<FrozenGravity>();
    }
}

/// System: movement gating.
///
/// Outside an attack: velocity follows input, facing and animator params
/// update. Inside: horizontal (and top-down vertical) velocity pinned to 0.
pub fn apply_movement_gating(
    mut players: Query<(
        &PlayerActionState,
        &PlayerMotor,
        &MoveInput,
        &mut Velocity,
        &mut Facing,
        &mut AnimationParams,
    )>,
) {
    for (state, motor, input, mut velocity, mut facing, mut params) in players.iter_mut() {
        if !state.allows_movement() {
            velocity.0.x = 0.0;
            if motor.vertical_control {
                velocity.0.y = 0.0;
            }
            continue;
        }

        velocity.0.x = input.axis.x * motor.move_speed;
        if motor.vertical_control {
            velocity.0.y = input.axis.y * motor.move_speed;
        }

        facing.update_from_axis(input.axis.x);
        params.speed = input.axis.length();
        params.flip_x = !facing.right;
    }
}

/// System: apply jump intents (grounded + not attacking only).
pub fn apply_jump_intents(
    mut intents: EventReader<JumpIntent>,
    mut players: Query<(&PlayerActionState, &PlayerMotor, &KinematicBody, &mut Velocity)>,
    mut applied_events: EventWriter<JumpApplied>,
    mut animation_requests: EventWriter<AnimationRequest>,
) {
    for intent in intents.read() {
        let Ok((state, motor, body, mut velocity)) = players.get_mut(intent.entity) else {
            continue;
        };

        if state.is_attacking() || !body.grounded || motor.vertical_control {
            continue;
        }

        velocity.0.y = motor.jump_velocity;
        applied_events.write(JumpApplied { entity: intent.entity });
        animation_requests.write(AnimationRequest {
            entity: intent.entity,
            trigger: AnimationTrigger::Jump,
        });
    }
}
