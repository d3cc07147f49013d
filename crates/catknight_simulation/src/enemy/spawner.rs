//! Wave spawner.
//!
//! Per wave: every light enemy, then every heavy enemy, each spawn followed
//! by `time_between_spawns`; after the last spawn wait, `time_between_waves`.
//! The first spawn of a wave happens the tick the wave starts.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::components::{bounce_velocity_for, spawn_enemy, EnemyBehavior, GROUNDED_GRAVITY_SCALE};
use super::definition::EnemyKind;
use crate::config::GameConfig;
use crate::{DeterministicRng, TIMER_EPSILON};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub light_count: u32,
    pub heavy_count: u32,
    pub time_between_spawns: f32,
    /// Rest after the wave's last spawn wait
    pub time_between_waves: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            light_count: 3,
            heavy_count: 2,
            time_between_spawns: 1.5,
            time_between_waves: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub waves: Vec<WaveConfig>,
    /// |x| of both spawn points
    pub spawn_distance: f32,
    pub flying_height: f32,
    /// Light spawn height = flying_height ± this
    pub flying_height_variation: f32,
    /// Light bob amplitude (heavy hop height is twice this)
    pub bob_height: f32,
    pub bob_speed: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            waves: vec![WaveConfig::default(); 3],
            spawn_distance: 12.0,
            flying_height: 2.0,
            flying_height_variation: 1.0,
            bob_height: 0.5,
            bob_speed: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpawnerPhase {
    NotStarted,
    Spawning {
        wave: usize,
        light_left: u32,
        heavy_left: u32,
        /// Seconds until the next spawn (or until the wave's spawns are done)
        next_in: f32,
    },
    Resting {
        wave: usize,
        remaining: f32,
    },
    Finished,
}

/// One thing the spawner decided during `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnerStep {
    WaveStarted(usize),
    Spawn { wave: usize, kind: EnemyKind },
    AllWavesCompleted,
}

/// Wave schedule as an explicit timer state machine.
#[derive(Resource, Clone, Debug)]
pub struct WaveSpawner {
    waves: Vec<WaveConfig>,
    phase: SpawnerPhase,
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self::new(SpawnerConfig::default().waves)
    }
}

impl WaveSpawner {
    pub fn new(waves: Vec<WaveConfig>) -> Self {
        Self {
            waves,
            phase: SpawnerPhase::NotStarted,
        }
    }

    pub fn phase(&self) -> &SpawnerPhase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SpawnerPhase::Finished
    }

    /// Index of the wave in progress (`None` before start and after the end).
    pub fn current_wave(&self) -> Option<usize> {
        match self.phase {
            SpawnerPhase::Spawning { wave, .. } | SpawnerPhase::Resting { wave, .. } => Some(wave),
            SpawnerPhase::NotStarted | SpawnerPhase::Finished => None,
        }
    }

    /// Advance the schedule by `delta` seconds; returns every step that
    /// became due, in order. Several steps may fall inside one call.
    pub fn advance(&mut self, delta: f32) -> Vec<SpawnerStep> {
        let mut budget = delta.max(0.0);
        let mut steps = Vec::new();

        loop {
            match self.phase.clone() {
                SpawnerPhase::NotStarted => {
                    if self.waves.is_empty() {
                        crate::logger::log_error("WaveSpawner: no waves configured");
                        self.phase = SpawnerPhase::Finished;
                        break;
                    }
                    self.start_wave(0, &mut steps);
                }
                SpawnerPhase::Spawning {
                    wave,
                    light_left,
                    heavy_left,
                    next_in,
                } => {
                    if next_in > budget + TIMER_EPSILON {
                        self.phase = SpawnerPhase::Spawning {
                            wave,
                            light_left,
                            heavy_left,
                            next_in: next_in - budget,
                        };
                        break;
                    }
                    budget = (budget - next_in).max(0.0);

                    let spawn_wait = self.waves[wave].time_between_spawns;
                    if light_left > 0 {
                        steps.push(SpawnerStep::Spawn {
                            wave,
                            kind: EnemyKind::Light,
                        });
                        self.phase = SpawnerPhase::Spawning {
                            wave,
                            light_left: light_left - 1,
                            heavy_left,
                            next_in: spawn_wait,
                        };
                    } else if heavy_left > 0 {
                        steps.push(SpawnerStep::Spawn {
                            wave,
                            kind: EnemyKind::Heavy,
                        });
                        self.phase = SpawnerPhase::Spawning {
                            wave,
                            light_left,
                            heavy_left: heavy_left - 1,
                            next_in: spawn_wait,
                        };
                    } else {
                        self.phase = SpawnerPhase::Resting {
                            wave,
                            remaining: self.waves[wave].time_between_waves,
                        };
                    }
                }
                SpawnerPhase::Resting { wave, remaining } => {
                    if remaining > budget + TIMER_EPSILON {
                        self.phase = SpawnerPhase::Resting {
                            wave,
                            remaining: remaining - budget,
                        };
                        break;
                    }
                    budget = (budget - remaining).max(0.0);

                    if wave + 1 < self.waves.len() {
                        self.start_wave(wave + 1, &mut steps);
                    } else {
                        self.phase = SpawnerPhase::Finished;
                        steps.push(SpawnerStep::AllWavesCompleted);
                    }
                }
                SpawnerPhase::Finished => break,
            }
        }

        steps
    }

    fn start_wave(&mut self, wave: usize, steps: &mut Vec<SpawnerStep>) {
        let config = &self.waves[wave];
        self.phase = SpawnerPhase::Spawning {
            wave,
            light_left: config.light_count,
            heavy_left: config.heavy_count,
            next_in: 0.0,
        };
        steps.push(SpawnerStep::WaveStarted(wave));
    }
}

/// Event: a wave began (0-based index).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveStarted {
    pub wave: usize,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySpawned {
    pub entity: Entity,
    pub kind: EnemyKind,
}

/// Event: the last wave's rest elapsed. Fired once.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllWavesCompleted;

/// System: advance the wave schedule and spawn what became due.
///
/// Every random choice (side, flight height, bob phase) draws from
/// `DeterministicRng` in spawn order.
pub fn run_wave_spawner(
    mut spawner: ResMut<WaveSpawner>,
    mut rng: ResMut<DeterministicRng>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut wave_events: EventWriter<WaveStarted>,
    mut spawned_events: EventWriter<EnemySpawned>,
    mut completed_events: EventWriter<AllWavesCompleted>,
) {
    if spawner.is_finished() {
        return;
    }

    let spawn = &config.spawner;
    let gravity = config.arena.gravity * GROUNDED_GRAVITY_SCALE;

    for step in spawner.advance(time.delta_secs()) {
        match step {
            SpawnerStep::WaveStarted(wave) => {
                crate::logger::log_info(&format!("Wave {} started", wave + 1));
                wave_events.write(WaveStarted { wave });
            }
            SpawnerStep::Spawn { kind, .. } => {
                let on_right = rng.rng.gen_bool(0.5);
                let x = if on_right { spawn.spawn_distance } else { -spawn.spawn_distance };
                // Always head toward the centre
                let direction = if on_right { -1.0 } else { 1.0 };
                let definition = config.enemies.get(kind);

                let (position, behavior) = match kind {
                    EnemyKind::Light => {
                        let variation = spawn.flying_height_variation.abs();
                        let offset = if variation > 0.0 {
                            rng.rng.gen_range(-variation..=variation)
                        } else {
                            0.0
                        };
                        let y = spawn.flying_height + offset;
                        let phase = rng.rng.gen_range(0.0..TAU);
                        (
                            Vec2::new(x, y),
                            EnemyBehavior::Flying {
                                direction,
                                speed: definition.speed,
                                base_y: y,
                                bob_height: spawn.bob_height,
                                bob_speed: spawn.bob_speed,
                                phase,
                                age: 0.0,
                            },
                        )
                    }
                    EnemyKind::Heavy => (
                        Vec2::new(x, config.arena.ground_level + 1.0),
                        EnemyBehavior::Grounded {
                            direction,
                            speed: definition.speed,
                            bounce_velocity: bounce_velocity_for(spawn.bob_height * 2.0, gravity),
                            since_bounce: 0.0,
                        },
                    ),
                };

                let entity = spawn_enemy(&mut commands, kind, definition, position, behavior);
                crate::logger::log(&format!(
                    "Spawned {:?} enemy {:?} at ({:.1}, {:.1})",
                    kind, entity, position.x, position.y
                ));
                spawned_events.write(EnemySpawned { entity, kind });
            }
            SpawnerStep::AllWavesCompleted => {
                crate::logger::log_info("All waves completed");
                completed_events.write(AllWavesCompleted);
            }
        }
    }
}
