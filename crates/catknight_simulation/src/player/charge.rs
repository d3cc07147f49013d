//! Press-and-hold charge gesture for the attack button.
//!
//! Hold time decides the attack kind before it reaches `PlayerActionState`:
//! release after `min_power_hold` → `Power`, earlier → `Normal`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::action_state::AttackKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeConfig {
    /// Hold time for a full charge bar (ratio = 1.0)
    pub time_to_full_charge: f32,
    /// Minimum hold time for a power attack
    pub min_power_hold: f32,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            time_to_full_charge: 1.0,
            min_power_hold: 0.3,
        }
    }
}

/// Charge state of the attack button.
///
/// Lives as a resource: there is a single attack button per session.
#[derive(Resource, Clone, Debug)]
pub struct ChargeGesture {
    config: ChargeConfig,
    charging: bool,
    held: f32,
}

impl Default for ChargeGesture {
    fn default() -> Self {
        Self::new(ChargeConfig::default())
    }
}

impl ChargeGesture {
    pub fn new(config: ChargeConfig) -> Self {
        Self {
            config,
            charging: false,
            held: 0.0,
        }
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn held(&self) -> f32 {
        self.held
    }

    /// Charge progress in [0, 1].
    pub fn ratio(&self) -> f32 {
        if self.config.time_to_full_charge <= 0.0 {
            return if self.charging { 1.0 } else { 0.0 };
        }
        (self.held / self.config.time_to_full_charge).clamp(0.0, 1.0)
    }

    /// Button pressed: start a fresh charge (a second press restarts it).
    pub fn press(&mut self) {
        self.charging = true;
        self.held = 0.0;
    }

    pub fn advance(&mut self, delta: f32) {
        if self.charging {
            self.held += delta.max(0.0);
        }
    }

    /// Button released: maps the hold to an attack kind and resets.
    ///
    /// Returns `None` for a release without a matching press.
    pub fn release(&mut self) -> Option<AttackKind> {
        if !self.charging {
            return None;
        }

        let kind = self.kind_for_hold(self.held);
        self.charging = false;
        self.held = 0.0;
        Some(kind)
    }

    pub fn kind_for_hold(&self, held: f32) -> AttackKind {
        if held >= self.config.min_power_hold {
            AttackKind::Power
        } else {
            AttackKind::Normal
        }
    }
}

/// Charge bar readout for the host UI (updated every tick).
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ChargeProgress {
    pub visible: bool,
    pub ratio: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hold_is_normal() {
        let mut gesture = ChargeGesture::default();
        gesture.press();
        gesture.advance(0.25);
        assert_eq!(gesture.release(), Some(AttackKind::Normal));
        assert!(!gesture.is_charging());
        assert_eq!(gesture.held(), 0.0);
    }

    #[test]
    fn test_threshold_hold_is_power() {
        let gesture = ChargeGesture::new(ChargeConfig {
            time_to_full_charge: 1.0,
            min_power_hold: 0.25,
        });
        assert_eq!(gesture.kind_for_hold(0.24), AttackKind::Normal);
        assert_eq!(gesture.kind_for_hold(0.25), AttackKind::Power);
        assert_eq!(gesture.kind_for_hold(3.0), AttackKind::Power);
    }

    #[test]
    fn test_ratio_is_linear_then_clamped() {
        let mut gesture = ChargeGesture::default();
        gesture.press();
        assert_eq!(gesture.ratio(), 0.0);

        gesture.advance(0.5);
        assert_eq!(gesture.ratio(), 0.5);

        gesture.advance(0.5);
        assert_eq!(gesture.ratio(), 1.0);

        gesture.advance(2.0);
        assert_eq!(gesture.ratio(), 1.0);
        assert_eq!(gesture.release(), Some(AttackKind::Power));
        assert_eq!(gesture.ratio(), 0.0);
    }

    #[test]
    fn test_release_without_press() {
        let mut gesture = ChargeGesture::default();
        assert_eq!(gesture.release(), None);
    }

    #[test]
    fn test_advance_ignored_when_not_charging() {
        let mut gesture = ChargeGesture::default();
        gesture.advance(5.0);
        assert_eq!(gesture.held(), 0.0);
    }
}
