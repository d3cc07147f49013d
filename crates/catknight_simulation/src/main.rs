//! Headless CatKnight session.
//!
//! Runs the full simulation with a scripted bot in place of the touch UI
//! and the host animator, then prints the result.
//!
//! Usage: `catknight_simulation [config.ron] [seed]`

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use catknight_simulation::combat::Dead;
use catknight_simulation::enemy::{AllWavesCompleted, Enemy};
use catknight_simulation::logger;
use catknight_simulation::player::{AnimationEvent, AttackStarted};
use catknight_simulation::{
    create_headless_app, spawn_player, step_fixed, GameConfig, KillCounter, PointerEvent,
    SimulationPlugin, WaveSpawner,
};

const TICK: f32 = 1.0 / 60.0;
const MAX_TICKS: u32 = 60 * 180;

/// Length of the attack clip the bot pretends to play
const ATTACK_CLIP: f32 = 0.3;

/// Stand-in for the host: pointer input + attack clip playback.
struct Bot {
    player: Entity,
    started_cursor: EventCursor<AttackStarted>,
    completed_cursor: EventCursor<AllWavesCompleted>,
    /// Seconds left on the attack clip in flight
    clip_remaining: Option<f32>,
    holding_attack: bool,
}

impl Bot {
    fn new(player: Entity) -> Self {
        Self {
            player,
            started_cursor: EventCursor::default(),
            completed_cursor: EventCursor::default(),
            clip_remaining: None,
            holding_attack: false,
        }
    }

    /// Decide this tick's input. Returns `true` once every wave is done.
    fn drive(&mut self, app: &mut App) -> bool {
        let world = app.world_mut();

        let started = world.resource::<Events<AttackStarted>>();
        let ours = self
            .started_cursor
            .read(started)
            .filter(|e| e.entity == self.player)
            .count();
        if ours > 0 {
            self.clip_remaining = Some(ATTACK_CLIP);
        }
        let completed = world.resource::<Events<AllWavesCompleted>>();
        let all_done = self.completed_cursor.read(completed).count() > 0;

        if let Some(remaining) = self.clip_remaining.as_mut() {
            *remaining -= TICK;
            if *remaining <= 0.0 {
                self.clip_remaining = None;
                world.send_event(AnimationEvent::AttackFinished { entity: self.player });
            }
        }

        let Some(player_pos) = world.get::<Transform>(self.player).map(|t| t.translation.truncate()) else {
            return true;
        };

        let mut enemies = world.query_filtered::<&Transform, (With<Enemy>, Without<Dead>)>();
        let target = enemies
            .iter(world)
            .map(|t| t.translation.truncate())
            .min_by(|a, b| {
                (a.x - player_pos.x)
                    .abs()
                    .total_cmp(&(b.x - player_pos.x).abs())
            });

        let mut events = Vec::new();
        match target {
            Some(target) => {
                let dx = target.x - player_pos.x;
                let dy = target.y - player_pos.y;

                if self.holding_attack {
                    events.push(PointerEvent::AttackUp);
                    self.holding_attack = false;
                } else if dx.abs() < 1.2 && dy.abs() < 1.0 {
                    events.push(PointerEvent::AttackDown);
                    self.holding_attack = true;
                } else if dx.abs() < 1.0 && dy > 1.5 {
                    events.push(PointerEvent::TouchBegan { pos: Vec2::new(0.0, 0.0) });
                    events.push(PointerEvent::TouchEnded { pos: Vec2::new(0.0, 120.0) });
                }

                let axis = if dx.abs() > 0.8 { dx.signum() } else { 0.0 };
                events.push(PointerEvent::DirectAxis {
                    axis: Vec2::new(axis, 0.0),
                });
            }
            None => events.push(PointerEvent::DirectAxis { axis: Vec2::ZERO }),
        }

        for event in events {
            world.send_event(event);
        }

        all_done
    }
}

fn main() {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                logger::init_logger();
                logger::log_error(&format!("{}", err));
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("Starting CatKnight headless session (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::with_config(config.clone()));

    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, &config.player, &config.attack)
    };
    app.world_mut().flush();

    let mut bot = Bot::new(player);
    let mut ticks = 0;
    while ticks < MAX_TICKS {
        let done = bot.drive(&mut app);
        step_fixed(&mut app, TICK);
        ticks += 1;

        if ticks % 600 == 0 {
            let kills = app.world().resource::<KillCounter>();
            let wave = app.world().resource::<WaveSpawner>().current_wave();
            match wave {
                Some(index) => println!("Tick {}: wave {}, {}", ticks, index + 1, kills.label()),
                None => println!("Tick {}: {}", ticks, kills.label()),
            }
        }
        if done {
            break;
        }
    }

    let kills = app.world().resource::<KillCounter>();
    println!(
        "Session over after {:.1}s: {}",
        ticks as f32 * TICK,
        kills.label()
    );
}
