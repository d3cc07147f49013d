//! Melee hit detection.
//!
//! Fire-and-forget: `AttackStarted` → box query in front of the attacker →
//! one `MeleeHit` per overlapped live enemy. No hit result flows back to
//! the attack state machine.

use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::Dead;
use crate::components::{Facing, Health, Hurtbox};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::player::{AttackKind, AttackStarted};

/// Damage/reach of one attack kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    pub damage: u32,
    /// Box width, starting at the attacker's centre
    pub range: f32,
    /// Box height, centred on the attacker
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackProfiles {
    pub normal: AttackProfile,
    pub power: AttackProfile,
}

impl Default for AttackProfiles {
    fn default() -> Self {
        Self {
            normal: AttackProfile {
                damage: 100,
                range: 1.5,
                height: 1.5,
            },
            power: AttackProfile {
                damage: 200,
                range: 2.0,
                height: 1.5,
            },
        }
    }
}

impl AttackProfiles {
    pub fn get(&self, kind: AttackKind) -> &AttackProfile {
        match kind {
            AttackKind::Normal => &self.normal,
            AttackKind::Power => &self.power,
        }
    }
}

/// Attack box for an attacker at `origin` facing `facing`.
///
/// Centre is shifted half the range toward the facing side.
pub fn attack_box(origin: Vec2, facing: Facing, profile: &AttackProfile) -> Aabb2d {
    let center = origin + Vec2::new(facing.sign() * profile.range / 2.0, 0.0);
    Aabb2d::new(center, Vec2::new(profile.range / 2.0, profile.height / 2.0))
}

/// Event: a melee swing overlapped a target (damage not yet applied).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeHit {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub kind: AttackKind,
}

/// System: resolve hit detection for attacks that started this tick.
pub fn resolve_melee_hits(
    mut started_events: EventReader<AttackStarted>,
    attackers: Query<(&Transform, &Facing)>,
    targets: Query<(Entity, &Transform, &Hurtbox, &Health), (With<Enemy>, Without<Dead>)>,
    config: Res<GameConfig>,
    mut hit_events: EventWriter<MeleeHit>,
) {
    for event in started_events.read() {
        let Ok((transform, facing)) = attackers.get(event.entity) else {
            crate::logger::log_warning(&format!(
                "AttackStarted for {:?} without Transform/Facing, no hit detection",
                event.entity
            ));
            continue;
        };

        let profile = config.attacks.get(event.kind);
        let swing = attack_box(transform.translation.truncate(), *facing, profile);

        let mut hits = 0;
        for (target, target_transform, hurtbox, health) in targets.iter() {
            if !health.is_alive() {
                continue;
            }

            let target_box = Aabb2d::new(target_transform.translation.truncate(), hurtbox.half_extents);
            if swing.intersects(&target_box) {
                hit_events.write(MeleeHit {
                    attacker: event.entity,
                    target,
                    damage: profile.damage,
                    kind: event.kind,
                });
                hits += 1;
            }
        }

        crate::logger::log(&format!(
            "Hit detection (attacker: {:?}, kind: {:?}): {} target(s) in range",
            event.entity, event.kind, hits
        ));
    }
}
