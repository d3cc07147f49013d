//! Player attack/movement state machine.
//!
//! Two orthogonal axes:
//! - action: `Idle` ↔ `Attacking` (blocks movement and new attacks)
//! - cooldown: `OnCooldown` → `Ready` (gates new attacks)
//!
//! Completion normally arrives from the host's animation (`complete_attack`).
//! Every attack also arms a single-shot fallback timer; if the animation
//! never reports back, `tick` forces the attack closed when it elapses.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::TIMER_EPSILON;

/// Which damage/behavior profile the current attack uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AttackKind {
    #[default]
    Normal,
    /// Charged attack (hold ≥ `ChargeConfig::min_power_hold`)
    Power,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum ActionPhase {
    Idle,
    Attacking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum CooldownPhase {
    OnCooldown,
    Ready,
}

/// Attack timing parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Seconds from attack start until a new attack is accepted
    pub cooldown: f32,
    /// Seconds until a missing completion signal is forced
    pub safety_timeout: f32,
    /// Zero gravity while the attack window is open (platformer variant)
    pub freeze_gravity_during_attack: bool,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            cooldown: 0.5,
            safety_timeout: 1.0,
            freeze_gravity_during_attack: true,
        }
    }
}

/// What a single `tick` changed (consumed by the system layer to emit events).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Cooldown reached zero on this tick
    pub became_ready: bool,
    /// Fallback timer fired and closed a stuck attack
    pub forced_completion: bool,
}

/// Attack/movement gating state of the player.
///
/// Invariants:
/// - `cooldown_remaining >= 0`; `can_attack` turns true the tick it hits 0
/// - a new attack starts only from `Idle + Ready`
/// - while attacking, a fallback completion is always pending until
///   `complete_attack` cancels it or it fires
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct PlayerActionState {
    is_attacking: bool,
    can_attack: bool,
    cooldown_remaining: f32,
    attack_kind: AttackKind,
    /// Seconds until forced completion (`None` = nothing scheduled)
    fallback_remaining: Option<f32>,
    cooldown: f32,
    safety_timeout: f32,
}

impl Default for PlayerActionState {
    fn default() -> Self {
        Self::new(&AttackConfig::default())
    }
}

impl PlayerActionState {
    pub fn new(config: &AttackConfig) -> Self {
        Self {
            is_attacking: false,
            can_attack: true,
            cooldown_remaining: 0.0,
            attack_kind: AttackKind::Normal,
            fallback_remaining: None,
            cooldown: config.cooldown.max(0.0),
            safety_timeout: config.safety_timeout.max(0.0),
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn attack_kind(&self) -> AttackKind {
        self.attack_kind
    }

    pub fn fallback_remaining(&self) -> Option<f32> {
        self.fallback_remaining
    }

    pub fn phase(&self) -> ActionPhase {
        if self.is_attacking {
            ActionPhase::Attacking
        } else {
            ActionPhase::Idle
        }
    }

    pub fn cooldown_phase(&self) -> CooldownPhase {
        if self.can_attack {
            CooldownPhase::Ready
        } else {
            CooldownPhase::OnCooldown
        }
    }

    /// Movement input is honored only outside the attack window.
    pub fn allows_movement(&self) -> bool {
        !self.is_attacking
    }

    /// Advance cooldown and fallback timers by `delta` seconds.
    ///
    /// The cooldown keeps running while the attack window is open, so it is
    /// measured from attack start, not from completion.
    pub fn tick(&mut self, delta: f32) -> TickOutcome {
        let delta = delta.max(0.0);
        let mut outcome = TickOutcome::default();

        if !self.can_attack {
            self.cooldown_remaining = (self.cooldown_remaining - delta).max(0.0);
            if self.cooldown_remaining <= TIMER_EPSILON {
                self.cooldown_remaining = 0.0;
                self.can_attack = true;
                outcome.became_ready = true;
            }
        }

        if let Some(remaining) = self.fallback_remaining {
            let remaining = remaining - delta;
            if remaining <= TIMER_EPSILON {
                self.fallback_remaining = None;
                outcome.forced_completion = self.force_complete_attack();
            } else {
                self.fallback_remaining = Some(remaining);
            }
        }

        outcome
    }

    /// Try to start an attack of `kind`. Returns `false` (state untouched)
    /// unless the machine is in `Idle + Ready`.
    pub fn request_attack(&mut self, kind: AttackKind) -> bool {
        if !self.can_attack || self.is_attacking {
            return false;
        }

        self.is_attacking = true;
        self.can_attack = false;
        self.cooldown_remaining = self.cooldown;
        self.attack_kind = kind;
        // Re-arming replaces whatever was pending
        self.fallback_remaining = Some(self.safety_timeout);

        true
    }

    /// Normal completion (animation reached its end marker).
    ///
    /// Cooldown is not touched. No-op when not attacking.
    pub fn complete_attack(&mut self) -> bool {
        if !self.is_attacking {
            return false;
        }

        self.is_attacking = false;
        self.fallback_remaining = None;
        true
    }

    /// Fallback completion: closes the window and clears the cooldown.
    ///
    /// No-op when the attack already completed normally.
    pub fn force_complete_attack(&mut self) -> bool {
        if !self.is_attacking {
            return false;
        }

        self.is_attacking = false;
        self.can_attack = true;
        self.cooldown_remaining = 0.0;
        self.fallback_remaining = None;

        crate::logger::log_warning("PlayerActionState: force resetting attack state due to timeout");
        true
    }
}
