//! Enemies: definitions, behaviors, wave spawner.

use bevy::prelude::*;

pub mod behavior;
pub mod components;
pub mod definition;
pub mod spawner;

#[cfg(test)]
mod spawner_tests;

pub use behavior::update_enemy_behaviors;
pub use components::{bounce_velocity_for, spawn_enemy, Enemy, EnemyBehavior};
pub use definition::{EnemyDefinition, EnemyDefinitions, EnemyKind};
pub use spawner::{
    run_wave_spawner, AllWavesCompleted, EnemySpawned, SpawnerConfig, SpawnerPhase, SpawnerStep,
    WaveConfig, WaveSpawner, WaveStarted,
};

use crate::GameSet;
use crate::config::GameConfig;

/// Enemy plugin.
///
/// Spawner runs before behaviors so a fresh enemy moves on its first tick.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();

        if !app.world().contains_resource::<WaveSpawner>() {
            let waves = app.world().resource::<GameConfig>().spawner.waves.clone();
            app.insert_resource(WaveSpawner::new(waves));
        }

        app.register_type::<Enemy>()
            .register_type::<EnemyBehavior>()
            .add_event::<WaveStarted>()
            .add_event::<EnemySpawned>()
            .add_event::<AllWavesCompleted>()
            .add_systems(
                FixedUpdate,
                (run_wave_spawner, update_enemy_behaviors)
                    .chain()
                    .in_set(GameSet::Enemies),
            );
    }
}
