//! CatKnight Simulation Core
//!
//! Headless ECS simulation of a 2D action-platformer on Bevy 0.16.
//!
//! Split of responsibilities:
//! - ECS = game state and rules (attack gating, cooldowns, enemies, waves)
//! - Host engine = rendering, animation playback, UI widgets, audio mixing
//!
//! Host → ECS: `PointerEvent`, `AnimationEvent`
//! ECS → host: `AnimationRequest`, `AttackStarted`/`AttackEnded`,
//! `DamageDealt`, `EnemyDied`, `EnemySpawned`, `AudioService` cues

use bevy::ecs::event::event_update_system;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

pub mod audio;
pub mod combat;
pub mod components;
pub mod config;
pub mod enemy;
pub mod input;
pub mod logger;
pub mod physics;
pub mod player;

pub use audio::{AudioBackend, AudioPlugin, AudioService, SoundCue};
pub use combat::{CombatPlugin, DamageDealt, Dead, EnemyDied, KillCounter};
pub use components::*;
pub use config::{ConfigError, GameConfig};
pub use enemy::{Enemy, EnemyKind, EnemyPlugin, WaveSpawner};
pub use input::{InputPlugin, PointerEvent};
pub use physics::PhysicsPlugin;
pub use player::{
    spawn_player, AttackKind, AttackStarted, AnimationEvent, Player, PlayerActionState, PlayerPlugin,
};

/// Tick phases inside `FixedUpdate`, in execution order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Pointer events → move input, charge gesture, attack/jump requests
    Input,
    /// Attack state machine, movement gating
    Player,
    /// Hit detection, damage, deaths, kill count
    Combat,
    /// Wave spawner, enemy behaviors
    Enemies,
    /// Gravity, integration, ground
    Physics,
    /// Audio cues
    Feedback,
}

/// Top-level simulation plugin (all subsystems + shared resources).
#[derive(Default)]
pub struct SimulationPlugin {
    /// `None` → `GameConfig::default()`
    pub config: Option<GameConfig>,
}

impl SimulationPlugin {
    pub fn with_config(config: GameConfig) -> Self {
        Self { config: Some(config) }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_default();

        app
            // 60Hz simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(config)
            .configure_sets(
                FixedUpdate,
                (
                    GameSet::Input,
                    GameSet::Player,
                    GameSet::Combat,
                    GameSet::Enemies,
                    GameSet::Physics,
                    GameSet::Feedback,
                )
                    .chain(),
            )
            .add_plugins((
                InputPlugin,
                PlayerPlugin,
                CombatPlugin,
                EnemyPlugin,
                PhysicsPlugin,
                AudioPlugin,
            ));

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Slack for f32 countdowns.
///
/// A 60 Hz delta (0.016666668) summed in f32 overshoots whole seconds by a
/// few ulps; without slack a 1.0 s timer would fire one tick late.
pub const TIMER_EPSILON: f32 = 1e-4;

/// Seeded RNG resource. Every random gameplay choice draws from it.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal headless App (no rendering, no window).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Run exactly one `FixedUpdate` pass with the given delta, then swap
/// the event buffers.
///
/// Decouples tests and the headless runner from wall-clock time. An event
/// stays readable for the step it was sent in and the next one, as with
/// `App::update`.
pub fn step_fixed(app: &mut App, delta_secs: f32) {
    let world = app.world_mut();
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(delta_secs.max(0.0)));
    world.run_schedule(FixedUpdate);

    // `First` never runs here, so its event update would not either
    if let Err(err) = world.run_system_once(event_update_system) {
        logger::log_error(&format!("Event update failed: {}", err));
    }
}

/// Every `E` seen by the fixed schedule, in send order.
///
/// Event buffers are cleared every step; a log keeps the whole history
/// for tests and replays. Install with `record_events`.
#[derive(Resource, Debug, Clone)]
pub struct EventLog<E: Event> {
    events: Vec<E>,
}

impl<E: Event> Default for EventLog<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Event> EventLog<E> {
    pub fn events(&self) -> &[E] {
        &self.events
    }
}

fn append_to_log<E: Event + Clone>(mut reader: EventReader<E>, mut log: ResMut<EventLog<E>>) {
    log.events.extend(reader.read().cloned());
}

/// Start logging every `E` into `EventLog<E>` (after all gameplay sets).
pub fn record_events<E: Event + Clone>(app: &mut App) {
    app.add_event::<E>()
        .init_resource::<EventLog<E>>()
        .add_systems(FixedUpdate, append_to_log::<E>.after(GameSet::Feedback));
}

/// Byte snapshot of every `T` in the world, sorted by entity index.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
