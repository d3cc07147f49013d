//! Audio feedback.
//!
//! The simulation decides *when* a cue plays; the host's `AudioBackend`
//! decides *how*. `AudioService` is an ordinary resource, so tests and
//! hosts swap the backend with `insert_resource`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod backend;
pub mod systems;

pub use backend::{AudioBackend, AudioCall, AudioService, RecordingBackend, SilentBackend, SoundCue};
pub use systems::FootstepState;

use crate::config::GameConfig;
use crate::GameSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Size of the enemy hit clip set
    pub enemy_hit_variants: u32,
    pub footstep_variants: u32,
    /// Minimum seconds between footsteps
    pub footstep_interval: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enemy_hit_variants: 3,
            footstep_variants: 4,
            footstep_interval: 0.35,
        }
    }
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<AudioService>()
            .init_resource::<FootstepState>()
            .add_systems(
                FixedUpdate,
                (
                    systems::play_attack_sounds,
                    systems::play_hit_sounds,
                    systems::play_jump_sounds,
                    systems::play_footsteps,
                )
                    .chain()
                    .in_set(GameSet::Feedback),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{KinematicBody, Velocity};
    use crate::player::{AttackKind, AttackRequest};
    use crate::{create_headless_app, spawn_player, step_fixed, SimulationPlugin};

    const DT: f32 = 1.0 / 60.0;

    fn audio_app() -> (App, RecordingBackend, Entity) {
        let mut config = GameConfig::default();
        config.spawner.waves.clear();

        let mut app = create_headless_app(3);
        app.add_plugins(SimulationPlugin::with_config(config.clone()));

        let backend = RecordingBackend::new();
        app.insert_resource(AudioService::new(backend.clone()));

        let player = {
            let mut commands = app.world_mut().commands();
            spawn_player(&mut commands, &config.player, &config.attack)
        };
        app.world_mut().flush();

        (app, backend, player)
    }

    #[test]
    fn test_attack_cue_variant_follows_kind() {
        let (mut app, backend, player) = audio_app();

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Power,
        });
        step_fixed(&mut app, DT);

        assert!(backend.calls().contains(&AudioCall::Play {
            cue: SoundCue::PlayerAttack { power: true },
            variant: 1,
        }));
    }

    #[test]
    fn test_footsteps_throttled_and_stopped() {
        let (mut app, backend, player) = audio_app();

        // Let the player land
        for _ in 0..10 {
            step_fixed(&mut app, DT);
        }
        assert!(app.world().get::<KinematicBody>(player).is_some_and(|b| b.grounded));

        // Walk for 1s: interval 0.35 → steps at t≈0, 0.35, 0.70
        for _ in 0..60 {
            app.world_mut().entity_mut(player).insert(crate::MoveInput {
                axis: Vec2::new(1.0, 0.0),
            });
            step_fixed(&mut app, DT);
        }
        let steps = backend
            .played()
            .into_iter()
            .filter(|cue| *cue == SoundCue::Footstep)
            .count();
        assert_eq!(steps, 3);

        app.world_mut().entity_mut(player).insert(crate::MoveInput::default());
        step_fixed(&mut app, DT);
        step_fixed(&mut app, DT);

        assert_eq!(app.world().get::<Velocity>(player).map(|v| v.0.x), Some(0.0));
        let stops = backend
            .calls()
            .into_iter()
            .filter(|call| *call == AudioCall::StopFootsteps)
            .count();
        assert_eq!(stops, 1);
    }
}
