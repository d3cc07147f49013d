//! Input systems: pointer events → player intents.
//!
//! Order inside `GameSet::Input` (chained):
//! 1. advance_charge: the hold covers time up to this tick
//! 2. process_pointer_events: recognizers → `MoveInput`, `AttackRequest`, `JumpIntent`
//! 3. publish_charge_progress: charge bar readout for the host

use bevy::prelude::*;

use super::events::PointerEvent;
use super::joystick::Joystick;
use super::swipe::SwipeDetector;
use crate::components::MoveInput;
use crate::player::{AttackRequest, ChargeGesture, ChargeProgress, JumpIntent, Player};

pub fn advance_charge(mut gesture: ResMut<ChargeGesture>, time: Res<Time<Fixed>>) {
    gesture.advance(time.delta_secs());
}

/// System: feed pointer events through the recognizers.
///
/// Recognizers keep state even without a player entity; intents are only
/// emitted when one exists.
pub fn process_pointer_events(
    mut events: EventReader<PointerEvent>,
    mut joystick: ResMut<Joystick>,
    mut swipe: ResMut<SwipeDetector>,
    mut gesture: ResMut<ChargeGesture>,
    mut players: Query<(Entity, &mut MoveInput), With<Player>>,
    time: Res<Time<Fixed>>,
    mut attack_requests: EventWriter<AttackRequest>,
    mut jump_intents: EventWriter<JumpIntent>,
) {
    let now = time.elapsed_secs();
    let mut player = players.single_mut().ok();

    for event in events.read() {
        match *event {
            PointerEvent::JoystickDown { pos } => joystick.pointer_down(pos),
            // A stray drag must not clobber axis input from another source
            PointerEvent::JoystickDrag { pos } if joystick.is_dragging() => {
                let value = joystick.drag(pos);
                if let Some((_, input)) = player.as_mut() {
                    input.axis = Vec2::new(value, 0.0);
                }
            }
            PointerEvent::JoystickDrag { .. } => {}
            PointerEvent::JoystickUp => {
                joystick.pointer_up();
                if let Some((_, input)) = player.as_mut() {
                    input.axis = Vec2::ZERO;
                }
            }
            PointerEvent::DirectAxis { axis } => {
                if let Some((_, input)) = player.as_mut() {
                    input.axis = axis.clamp_length_max(1.0);
                }
            }
            PointerEvent::AttackDown => gesture.press(),
            PointerEvent::AttackUp => {
                let Some(kind) = gesture.release() else {
                    continue;
                };
                if let Some((entity, _)) = player.as_ref() {
                    attack_requests.write(AttackRequest { entity: *entity, kind });
                }
            }
            PointerEvent::TouchBegan { pos } => swipe.begin(pos, now),
            PointerEvent::TouchEnded { pos } => {
                if swipe.end(pos, now) {
                    if let Some((entity, _)) = player.as_ref() {
                        jump_intents.write(JumpIntent { entity: *entity });
                    }
                }
            }
        }
    }
}

pub fn publish_charge_progress(gesture: Res<ChargeGesture>, mut progress: ResMut<ChargeProgress>) {
    let next = ChargeProgress {
        visible: gesture.is_charging(),
        ratio: gesture.ratio(),
    };
    // Avoid spurious change detection for the host UI
    if *progress != next {
        *progress = next;
    }
}
