//! Player events (simulation ↔ host).

use bevy::prelude::*;

use super::action_state::AttackKind;

/// Input layer asks the player to attack (kind already decided by the charge gesture).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRequest {
    pub entity: Entity,
    pub kind: AttackKind,
}

/// An attack window opened.
///
/// Doubles as the hit-detection request for `combat::resolve_melee_hits`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStarted {
    pub entity: Entity,
    pub kind: AttackKind,
}

/// An attack window closed.
///
/// `forced` = the fallback timer closed it (completion signal never came).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEnded {
    pub entity: Entity,
    pub forced: bool,
}

/// Events from the host animation player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Attack clip reached its completion marker
    AttackFinished { entity: Entity },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Attack,
    Jump,
}

/// Trigger request for the host animation player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    pub entity: Entity,
    pub trigger: AnimationTrigger,
}

/// Jump intent (upward swipe, jump key).
///
/// Ignored while airborne or attacking.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// A jump impulse was applied.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpApplied {
    pub entity: Entity,
}
