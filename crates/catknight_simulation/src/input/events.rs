//! Raw pointer input from the host UI layer.

use bevy::prelude::*;

/// Pointer/touch event forwarded by the host.
///
/// Positions are in UI units (the same space as `JoystickConfig::horizontal_limit`
/// and `SwipeConfig::min_swipe_distance`).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger down on the joystick area
    JoystickDown { pos: Vec2 },
    JoystickDrag { pos: Vec2 },
    JoystickUp,
    /// Already-normalized axis (keyboard, gamepad, top-down stick)
    DirectAxis { axis: Vec2 },
    /// Attack button pressed (charge starts)
    AttackDown,
    /// Attack button released (attack kind decided)
    AttackUp,
    /// Free touch on the play area (swipe recognition)
    TouchBegan { pos: Vec2 },
    TouchEnded { pos: Vec2 },
}
