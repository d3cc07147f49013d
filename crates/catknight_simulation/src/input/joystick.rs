//! Horizontal virtual joystick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    /// Knob travel (UI units) for a full-scale value
    pub horizontal_limit: f32,
    pub value_multiplier: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            horizontal_limit: 50.0,
            value_multiplier: 1.0,
        }
    }
}

/// Joystick recognizer: drag distance from the press point → axis value.
///
/// The press itself never moves the knob; only drags produce a value.
#[derive(Resource, Clone, Debug, Default)]
pub struct Joystick {
    config: JoystickConfig,
    origin: Option<Vec2>,
    value: f32,
}

impl Joystick {
    pub fn new(config: JoystickConfig) -> Self {
        Self {
            config,
            origin: None,
            value: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.origin = Some(pos);
    }

    /// Returns the new value. Drags without a press are ignored.
    pub fn drag(&mut self, pos: Vec2) -> f32 {
        let Some(origin) = self.origin else {
            return self.value;
        };

        let limit = self.config.horizontal_limit;
        if limit <= 0.0 {
            self.value = 0.0;
            return self.value;
        }

        let clamped = (pos.x - origin.x).clamp(-limit, limit);
        self.value = clamped / limit * self.config.value_multiplier;
        self.value
    }

    pub fn pointer_up(&mut self) {
        self.origin = None;
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_produces_no_value() {
        let mut joystick = Joystick::new(JoystickConfig::default());
        joystick.pointer_down(Vec2::new(200.0, 100.0));
        assert_eq!(joystick.value(), 0.0);
        assert!(joystick.is_dragging());
    }

    #[test]
    fn test_drag_is_relative_and_clamped() {
        let mut joystick = Joystick::new(JoystickConfig::default());
        joystick.pointer_down(Vec2::new(200.0, 100.0));

        assert_eq!(joystick.drag(Vec2::new(225.0, 180.0)), 0.5);
        assert_eq!(joystick.drag(Vec2::new(100.0, 100.0)), -1.0);
        assert_eq!(joystick.drag(Vec2::new(400.0, 0.0)), 1.0);
    }

    #[test]
    fn test_multiplier_scales_value() {
        let mut joystick = Joystick::new(JoystickConfig {
            horizontal_limit: 40.0,
            value_multiplier: 2.0,
        });
        joystick.pointer_down(Vec2::ZERO);
        assert_eq!(joystick.drag(Vec2::new(10.0, 0.0)), 0.5);
    }

    #[test]
    fn test_release_resets() {
        let mut joystick = Joystick::new(JoystickConfig::default());
        joystick.pointer_down(Vec2::ZERO);
        joystick.drag(Vec2::new(30.0, 0.0));
        joystick.pointer_up();

        assert_eq!(joystick.value(), 0.0);
        // Drag after release is ignored
        assert_eq!(joystick.drag(Vec2::new(30.0, 0.0)), 0.0);
    }
}
