//! Combat module
//!
//! ECS responsibility:
//! - hit detection for player attacks (box in front of the attacker)
//! - damage application, deaths, kill count
//!
//! Host responsibility:
//! - swing animation, hit flash tint, corpse visuals
//!
//! Pipeline: `AttackStarted` → `MeleeHit` → `DamageDealt` / `EnemyDied`

use bevy::prelude::*;

pub mod attack;
pub mod damage;
pub mod kills;

#[cfg(test)]
mod damage_tests;

pub use attack::{attack_box, AttackProfile, AttackProfiles, MeleeHit};
pub use damage::{DamageDealt, Dead, DespawnAfter, EnemyDied, HitFlash, CORPSE_LINGER, HIT_FLASH_DURATION};
pub use kills::KillCounter;

use crate::config::GameConfig;
use crate::GameSet;

/// Combat Plugin
///
/// Order (chained, `GameSet::Combat`):
/// 1. resolve_melee_hits: AttackStarted → MeleeHit
/// 2. apply_melee_hits: MeleeHit → Health, DamageDealt, EnemyDied
/// 3. count_kills
/// 4. tick_hit_flash
/// 5. despawn_after_timeout
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<KillCounter>()
            .add_event::<MeleeHit>()
            .add_event::<DamageDealt>()
            .add_event::<EnemyDied>();

        app.add_systems(
            FixedUpdate,
            (
                attack::resolve_melee_hits,
                damage::apply_melee_hits,
                kills::count_kills,
                damage::tick_hit_flash,
                damage::despawn_after_timeout,
            )
                .chain()
                .in_set(GameSet::Combat),
        );
    }
}
