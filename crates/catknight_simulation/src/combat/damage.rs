//! Damage application and death handling.

use bevy::prelude::*;

use super::attack::MeleeHit;
use crate::components::{Health, Velocity};
use crate::enemy::{Enemy, EnemyKind};
use crate::player::AttackKind;
use crate::TIMER_EPSILON;

/// Hit flash duration (seconds)
pub const HIT_FLASH_DURATION: f32 = 0.1;

/// Seconds a dead enemy stays in the world before despawn
pub const CORPSE_LINGER: f32 = 0.5;

/// Event: damage was applied.
///
/// Consumers: audio (hit sound), host (damage numbers, health bars).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    /// HP actually removed (≤ requested damage)
    pub damage: u32,
    pub kind: AttackKind,
    pub target_died: bool,
}

/// Event: an enemy reached 0 HP (fired exactly once per enemy).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDied {
    pub entity: Entity,
    pub kind: EnemyKind,
    pub killer: Option<Entity>,
}

/// Marker: entity is dead (no more damage, no more movement).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

/// Hit flash timer (host tints the sprite while present).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HitFlash {
    pub remaining: f32,
}

/// Despawn after `remaining` seconds.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DespawnAfter {
    pub remaining: f32,
}

/// System: apply melee hits to enemy health.
///
/// - dead targets are skipped (health already 0)
/// - every landed hit restarts the `HitFlash`
/// - lethal hit → `EnemyDied`, `Dead`, `DespawnAfter`, velocity zeroed
pub fn apply_melee_hits(
    mut hit_events: EventReader<MeleeHit>,
    mut targets: Query<(&mut Health, &Enemy, Option<&mut Velocity>)>,
    mut commands: Commands,
    mut damage_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EnemyDied>,
) {
    for hit in hit_events.read() {
        if hit.attacker == hit.target {
            continue;
        }

        let Ok((mut health, enemy, velocity)) = targets.get_mut(hit.target) else {
            continue;
        };

        if !health.is_alive() {
            continue;
        }

        let applied = health.take_damage(hit.damage);
        let died = !health.is_alive();

        damage_events.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            damage: applied,
            kind: hit.kind,
            target_died: died,
        });

        commands.entity(hit.target).insert(HitFlash {
            remaining: HIT_FLASH_DURATION,
        });

        crate::logger::log(&format!(
            "Enemy hit (attacker: {:?}, target: {:?}, damage: {}, HP: {}/{})",
            hit.attacker, hit.target, applied, health.current, health.max
        ));

        if died {
            if let Some(mut velocity) = velocity {
                velocity.0 = Vec2::ZERO;
            }

            commands.entity(hit.target).insert((
                Dead,
                DespawnAfter {
                    remaining: CORPSE_LINGER,
                },
            ));

            died_events.write(EnemyDied {
                entity: hit.target,
                kind: enemy.kind,
                killer: Some(hit.attacker),
            });

            crate::logger::log_info(&format!("{:?} enemy died (entity: {:?})", enemy.kind, hit.target));
        }
    }
}

/// System: count down hit flashes.
pub fn tick_hit_flash(
    mut query: Query<(Entity, &mut HitFlash)>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();

    for (entity, mut flash) in query.iter_mut() {
        flash.remaining -= delta;
        if flash.remaining <= TIMER_EPSILON {
            commands.entity(entity).remove::<HitFlash>();
        }
    }
}

/// System: despawn entities whose `DespawnAfter` elapsed.
pub fn despawn_after_timeout(
    mut query: Query<(Entity, &mut DespawnAfter)>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();

    for (entity, mut despawn) in query.iter_mut() {
        despawn.remaining -= delta;
        if despawn.remaining <= TIMER_EPSILON {
            crate::logger::log(&format!("Despawning entity {:?} (timeout)", entity));
            commands.entity(entity).despawn();
        }
    }
}
