//! Data-driven enemy definitions.
//!
//! Enemy kinds differ only by data plus one behavior tag; there is no
//! per-kind type. Adding a kind = one more `EnemyKind` variant + definition.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Closed set of enemy kinds (also the behavior tag).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Flying, sine-wave bob, low HP
    Light,
    /// Grounded, bouncing, high HP
    Heavy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub max_health: u32,
    /// Horizontal speed (units/sec)
    pub speed: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl EnemyDefinition {
    pub fn light() -> Self {
        Self {
            max_health: 100,
            speed: 3.0,
            half_width: 0.5,
            half_height: 0.5,
        }
    }

    pub fn heavy() -> Self {
        Self {
            max_health: 200,
            speed: 1.5,
            half_width: 0.5,
            half_height: 0.5,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyDefinitions {
    pub light: EnemyDefinition,
    pub heavy: EnemyDefinition,
}

impl Default for EnemyDefinitions {
    fn default() -> Self {
        Self {
            light: EnemyDefinition::light(),
            heavy: EnemyDefinition::heavy(),
        }
    }
}

impl EnemyDefinitions {
    pub fn get(&self, kind: EnemyKind) -> &EnemyDefinition {
        match kind {
            EnemyKind::Light => &self.light,
            EnemyKind::Heavy => &self.heavy,
        }
    }
}
