//! Game configuration (RON).
//!
//! Every tunable lives in its owning module; `GameConfig` only aggregates
//! them so one file can describe a whole session:
//!
//! ```ron
//! (
//!     attack: (cooldown: 0.4, safety_timeout: 1.0),
//!     spawner: (waves: [(light_count: 2, heavy_count: 1)]),
//! )
//! ```
//!
//! Missing fields fall back to defaults (`#[serde(default)]` everywhere).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::audio::AudioConfig;
use crate::combat::AttackProfiles;
use crate::enemy::{EnemyDefinitions, SpawnerConfig};
use crate::input::{JoystickConfig, SwipeConfig};
use crate::physics::ArenaConfig;
use crate::player::{AttackConfig, ChargeConfig, PlayerConfig};


#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub attack: AttackConfig,
    pub charge: ChargeConfig,
    pub attacks: AttackProfiles,
    pub enemies: EnemyDefinitions,
    pub spawner: SpawnerConfig,
    pub arena: ArenaConfig,
    pub joystick: JoystickConfig,
    pub swipe: SwipeConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    /// Parse + validate.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_ron_str(&text)?;
        crate::logger::log_info(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("attack.cooldown", self.attack.cooldown)?;
        non_negative("attack.safety_timeout", self.attack.safety_timeout)?;
        non_negative("charge.min_power_hold", self.charge.min_power_hold)?;
        positive("charge.time_to_full_charge", self.charge.time_to_full_charge)?;
        if self.charge.min_power_hold > self.charge.time_to_full_charge {
            return Err(ConfigError::Invalid {
                field: "charge.min_power_hold",
                reason: format!(
                    "{} exceeds time_to_full_charge {}",
                    self.charge.min_power_hold, self.charge.time_to_full_charge
                ),
            });
        }

        non_negative("player.move_speed", self.player.move_speed)?;
        positive("joystick.horizontal_limit", self.joystick.horizontal_limit)?;
        non_negative("swipe.max_swipe_time", self.swipe.max_swipe_time)?;
        non_negative("audio.footstep_interval", self.audio.footstep_interval)?;

        for (field, definition) in [
            ("enemies.light.max_health", &self.enemies.light),
            ("enemies.heavy.max_health", &self.enemies.heavy),
        ] {
            if definition.max_health == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be > 0".to_string(),
                });
            }
        }

        for wave in &self.spawner.waves {
            non_negative("spawner.waves[].time_between_spawns", wave.time_between_spawns)?;
            non_negative("spawner.waves[].time_between_waves", wave.time_between_waves)?;
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be >= 0, got {}", value),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be > 0, got {}", value),
        })
    }
}
