//! Tests for the wave schedule and spawn placement.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::enemy::*;
    use crate::{create_headless_app, step_fixed, GameConfig, SimulationPlugin};

    fn wave(light: u32, heavy: u32, spawns: f32, rest: f32) -> WaveConfig {
        WaveConfig {
            light_count: light,
            heavy_count: heavy,
            time_between_spawns: spawns,
            time_between_waves: rest,
        }
    }

    fn spawned_kinds(steps: &[SpawnerStep]) -> Vec<EnemyKind> {
        steps
            .iter()
            .filter_map(|step| match step {
                SpawnerStep::Spawn { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_spawn_on_wave_start() {
        let mut spawner = WaveSpawner::new(vec![wave(2, 1, 1.0, 3.0)]);
        let steps = spawner.advance(0.0);

        assert_eq!(
            steps,
            vec![
                SpawnerStep::WaveStarted(0),
                SpawnerStep::Spawn {
                    wave: 0,
                    kind: EnemyKind::Light
                },
            ]
        );
        assert_eq!(spawner.current_wave(), Some(0));
    }

    #[test]
    fn test_light_before_heavy_with_spacing() {
        let mut spawner = WaveSpawner::new(vec![wave(2, 2, 1.0, 3.0)]);
        spawner.advance(0.0);

        assert!(spawned_kinds(&spawner.advance(0.5)).is_empty());
        assert_eq!(spawned_kinds(&spawner.advance(0.5)), vec![EnemyKind::Light]);
        assert_eq!(spawned_kinds(&spawner.advance(1.0)), vec![EnemyKind::Heavy]);
        assert_eq!(spawned_kinds(&spawner.advance(1.0)), vec![EnemyKind::Heavy]);
        assert!(spawned_kinds(&spawner.advance(1.0)).is_empty());
        assert!(matches!(spawner.phase(), SpawnerPhase::Resting { wave: 0, .. }));
    }

    #[test]
    fn test_full_schedule_counts_and_single_completion() {
        let waves = vec![wave(3, 2, 1.5, 5.0), wave(1, 1, 0.5, 2.0)];
        let mut spawner = WaveSpawner::new(waves);

        let mut steps = Vec::new();
        for _ in 0..2000 {
            steps.extend(spawner.advance(1.0 / 60.0));
        }

        let kinds = spawned_kinds(&steps);
        assert_eq!(
            kinds,
            vec![
                EnemyKind::Light,
                EnemyKind::Light,
                EnemyKind::Light,
                EnemyKind::Heavy,
                EnemyKind::Heavy,
                EnemyKind::Light,
                EnemyKind::Heavy,
            ]
        );

        let started: Vec<_> = steps
            .iter()
            .filter_map(|s| match s {
                SpawnerStep::WaveStarted(w) => Some(*w),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![0, 1]);

        let completed = steps
            .iter()
            .filter(|s| **s == SpawnerStep::AllWavesCompleted)
            .count();
        assert_eq!(completed, 1);
        assert_eq!(steps.last(), Some(&SpawnerStep::AllWavesCompleted));
        assert!(spawner.is_finished());
    }

    #[test]
    fn test_large_delta_catches_up() {
        let mut spawner = WaveSpawner::new(vec![wave(2, 1, 1.0, 1.0), wave(1, 0, 1.0, 1.0)]);

        // 3 spawn waits + rest (4s) for wave 0, then wave 1 starts and spawns
        let steps = spawner.advance(4.0);
        assert_eq!(
            spawned_kinds(&steps),
            vec![
                EnemyKind::Light,
                EnemyKind::Light,
                EnemyKind::Heavy,
                EnemyKind::Light
            ]
        );
        assert_eq!(spawner.current_wave(), Some(1));
    }

    #[test]
    fn test_empty_wave_list_finishes_immediately() {
        let mut spawner = WaveSpawner::new(Vec::new());
        assert!(spawner.advance(1.0).is_empty());
        assert!(spawner.is_finished());
        assert!(spawner.advance(1.0).is_empty());
    }

    #[test]
    fn test_empty_wave_goes_straight_to_rest() {
        let mut spawner = WaveSpawner::new(vec![wave(0, 0, 1.0, 2.0)]);
        let steps = spawner.advance(0.0);
        assert_eq!(steps, vec![SpawnerStep::WaveStarted(0)]);
        assert!(matches!(spawner.phase(), SpawnerPhase::Resting { .. }));

        assert_eq!(spawner.advance(2.0), vec![SpawnerStep::AllWavesCompleted]);
    }

    #[test]
    fn test_bounce_velocity_reaches_height() {
        let v = bounce_velocity_for(1.0, 20.0);
        // v^2 / 2g = h
        assert!((v * v / 40.0 - 1.0).abs() < 1e-5);
        assert_eq!(bounce_velocity_for(-1.0, 20.0), 0.0);
    }

    fn spawner_app(waves: Vec<WaveConfig>) -> App {
        let mut config = GameConfig::default();
        config.spawner.waves = waves;

        let mut app = create_headless_app(7);
        app.add_plugins(SimulationPlugin::with_config(config));
        app
    }

    #[test]
    fn test_spawned_enemies_placement() {
        let mut app = spawner_app(vec![wave(1, 1, 0.0, 10.0)]);
        step_fixed(&mut app, 1.0 / 60.0);

        let config = app.world().resource::<GameConfig>().clone();
        let mut query = app
            .world_mut()
            .query::<(&Enemy, &Transform, &EnemyBehavior, &crate::Health)>();

        let enemies: Vec<_> = query
            .iter(app.world())
            .map(|(e, t, b, h)| (*e, *t, b.clone(), *h))
            .collect();
        assert_eq!(enemies.len(), 2);

        for (enemy, transform, behavior, health) in enemies {
            let x = transform.translation.x;
            assert!(x.abs() <= config.spawner.spawn_distance + 0.1);
            // Moving toward the centre
            assert!(behavior.direction() * x.signum() < 0.0);

            match enemy.kind {
                EnemyKind::Light => {
                    assert_eq!(health.max, config.enemies.light.max_health);
                    let EnemyBehavior::Flying { base_y, .. } = behavior else {
                        panic!("light enemy must fly");
                    };
                    assert!((base_y - config.spawner.flying_height).abs() <= config.spawner.flying_height_variation);
                }
                EnemyKind::Heavy => {
                    assert_eq!(health.max, config.enemies.heavy.max_health);
                    assert!(matches!(behavior, EnemyBehavior::Grounded { .. }));
                }
            }
        }
    }

    #[test]
    fn test_heavy_enemy_lands_and_hops() {
        let mut app = spawner_app(vec![wave(0, 1, 10.0, 10.0)]);

        let mut max_y = f32::MIN;
        let mut landed = false;
        for _ in 0..120 {
            step_fixed(&mut app, 1.0 / 60.0);
            let mut query = app
                .world_mut()
                .query::<(&Transform, &crate::KinematicBody)>();
            for (transform, body) in query.iter(app.world()) {
                if body.grounded {
                    landed = true;
                }
                if landed {
                    max_y = max_y.max(transform.translation.y);
                }
            }
        }

        assert!(landed);
        let config = app.world().resource::<GameConfig>();
        let rest_y = config.arena.ground_level + config.enemies.heavy.half_height;
        // Hop height ≈ 2 * bob_height
        assert!(max_y > rest_y + 0.5);
        assert!(max_y < rest_y + 1.5);
    }

    #[test]
    fn test_enemies_turn_at_walls() {
        let mut app = spawner_app(vec![wave(1, 0, 10.0, 10.0)]);
        step_fixed(&mut app, 1.0 / 60.0);

        let mut query = app.world_mut().query::<&EnemyBehavior>();
        let initial = query.single(app.world()).map(|b| b.direction()).unwrap_or(0.0);
        assert_ne!(initial, 0.0);

        // 24 units of arena at 3 u/s: crosses and hits the far wall in ~8s
        let mut reversed = false;
        for _ in 0..(60 * 9) {
            step_fixed(&mut app, 1.0 / 60.0);
            let mut query = app.world_mut().query::<(&EnemyBehavior, &Transform)>();
            let (behavior, transform) = query.single(app.world()).expect("one enemy");
            let half_width = 12.0 + 0.1;
            assert!(transform.translation.x.abs() <= half_width);
            if behavior.direction() != initial {
                reversed = true;
            }
        }
        assert!(reversed);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        fn positions(seed: u64) -> Vec<(u32, Vec3)> {
            let mut config = GameConfig::default();
            config.spawner.waves = vec![wave(3, 2, 0.1, 1.0)];
            let mut app = create_headless_app(seed);
            app.add_plugins(SimulationPlugin::with_config(config));
            for _ in 0..60 {
                step_fixed(&mut app, 1.0 / 60.0);
            }
            let mut query = app.world_mut().query::<(Entity, &Enemy, &Transform)>();
            let mut out: Vec<_> = query
                .iter(app.world())
                .map(|(e, _, t)| (e.index(), t.translation))
                .collect();
            out.sort_by_key(|(index, _)| *index);
            out
        }

        assert_eq!(positions(99), positions(99));
    }
}
