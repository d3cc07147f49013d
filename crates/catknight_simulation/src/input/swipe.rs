//! Upward swipe recognizer (jump gesture).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub min_swipe_distance: f32,
    /// Seconds
    pub max_swipe_time: f32,
    /// |dy| / distance, 1.0 = perfectly vertical
    pub min_vertical_ratio: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
            max_swipe_time: 0.5,
            min_vertical_ratio: 0.7,
        }
    }
}

#[derive(Resource, Clone, Debug, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    /// (start position, start time)
    start: Option<(Vec2, f32)>,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, start: None }
    }

    pub fn begin(&mut self, pos: Vec2, time: f32) {
        self.start = Some((pos, time));
    }

    /// `true` when the touch that just ended was a fast, long, mostly
    /// vertical upward swipe.
    pub fn end(&mut self, pos: Vec2, time: f32) -> bool {
        let Some((start_pos, start_time)) = self.start.take() else {
            return false;
        };

        if time - start_time > self.config.max_swipe_time {
            return false;
        }

        let delta = pos - start_pos;
        let distance = delta.length();
        if distance < self.config.min_swipe_distance || distance <= 0.0 {
            return false;
        }

        delta.y.abs() / distance >= self.config.min_vertical_ratio && delta.y > 0.0
    }
}
