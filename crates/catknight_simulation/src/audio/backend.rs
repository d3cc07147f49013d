//! Audio backends: the host's mixer sits behind `AudioBackend`.

use bevy::prelude::*;
use std::sync::{Arc, Mutex};

/// Sound cue requested by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    EnemyHit,
    PlayerAttack { power: bool },
    PlayerJump,
    Footstep,
}

/// Host-side sound output.
///
/// `variant` selects a clip inside the cue's clip set; backends clamp it
/// to what they actually have.
pub trait AudioBackend: Send + Sync + 'static {
    fn play(&mut self, cue: SoundCue, variant: usize);

    /// Cut the footstep loop immediately.
    fn stop_footsteps(&mut self);
}

/// Backend that drops everything (headless sessions).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play(&mut self, _cue: SoundCue, _variant: usize) {}

    fn stop_footsteps(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play { cue: SoundCue, variant: usize },
    StopFootsteps,
}

/// Backend that records calls into a shared log (tests, replays).
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<AudioCall>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn played(&self) -> Vec<SoundCue> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AudioCall::Play { cue, .. } => Some(cue),
                AudioCall::StopFootsteps => None,
            })
            .collect()
    }

    fn push(&self, call: AudioCall) {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).push(call);
    }
}

impl AudioBackend for RecordingBackend {
    fn play(&mut self, cue: SoundCue, variant: usize) {
        self.push(AudioCall::Play { cue, variant });
    }

    fn stop_footsteps(&mut self) {
        self.push(AudioCall::StopFootsteps);
    }
}

/// Injected audio service (one per app, replaceable by the host).
#[derive(Resource)]
pub struct AudioService {
    backend: Box<dyn AudioBackend>,
}

impl Default for AudioService {
    fn default() -> Self {
        Self::new(SilentBackend)
    }
}

impl AudioService {
    pub fn new(backend: impl AudioBackend) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn play(&mut self, cue: SoundCue, variant: usize) {
        self.backend.play(cue, variant);
    }

    pub fn stop_footsteps(&mut self) {
        self.backend.stop_footsteps();
    }
}
