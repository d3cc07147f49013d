//! Gameplay events → sound cues.

use bevy::prelude::*;
use rand::Rng;

use super::backend::{AudioService, SoundCue};
use crate::combat::DamageDealt;
use crate::components::{KinematicBody, Velocity};
use crate::config::GameConfig;
use crate::player::{AttackKind, AttackStarted, JumpApplied, Player};
use crate::{DeterministicRng, TIMER_EPSILON};

/// Horizontal speed below which the player counts as standing
const WALK_SPEED_EPSILON: f32 = 0.01;

/// Footstep cadence state of the player.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FootstepState {
    pub walking: bool,
    /// Seconds until the next step may play
    pub until_next: f32,
}

fn pick_variant(rng: &mut DeterministicRng, variants: u32) -> Option<usize> {
    match variants {
        0 => None,
        1 => Some(0),
        n => Some(rng.rng.gen_range(0..n) as usize),
    }
}

pub fn play_hit_sounds(
    mut damage_events: EventReader<DamageDealt>,
    mut audio: ResMut<AudioService>,
    mut rng: ResMut<DeterministicRng>,
    config: Res<GameConfig>,
) {
    for _ in damage_events.read() {
        if let Some(variant) = pick_variant(&mut rng, config.audio.enemy_hit_variants) {
            audio.play(SoundCue::EnemyHit, variant);
        }
    }
}

/// Normal attack → clip 0, power attack → clip 1.
pub fn play_attack_sounds(mut started_events: EventReader<AttackStarted>, mut audio: ResMut<AudioService>) {
    for event in started_events.read() {
        let power = event.kind == AttackKind::Power;
        audio.play(SoundCue::PlayerAttack { power }, usize::from(power));
    }
}

pub fn play_jump_sounds(mut jump_events: EventReader<JumpApplied>, mut audio: ResMut<AudioService>) {
    for _ in jump_events.read() {
        audio.play(SoundCue::PlayerJump, 0);
    }
}

/// System: footsteps while walking on the ground, at most one per
/// `footstep_interval`; stopping cuts the loop.
pub fn play_footsteps(
    players: Query<(&Velocity, &KinematicBody), With<Player>>,
    mut state: ResMut<FootstepState>,
    mut audio: ResMut<AudioService>,
    mut rng: ResMut<DeterministicRng>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    let walking = players
        .iter()
        .any(|(velocity, body)| body.grounded && velocity.0.x.abs() > WALK_SPEED_EPSILON);

    if !walking {
        if state.walking {
            audio.stop_footsteps();
        }
        *state = FootstepState::default();
        return;
    }

    state.walking = true;
    state.until_next -= time.delta_secs();
    if state.until_next <= TIMER_EPSILON {
        if let Some(variant) = pick_variant(&mut rng, config.audio.footstep_variants) {
            audio.play(SoundCue::Footstep, variant);
        }
        state.until_next = config.audio.footstep_interval;
    }
}
