//! Tests for hit detection, damage and deaths.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::*;
    use crate::components::{Facing, Health};
    use crate::enemy::{Enemy, EnemyKind};
    use crate::player::{spawn_player, AttackKind, AttackRequest};
    use crate::{create_headless_app, record_events, step_fixed, EventLog, GameConfig, SimulationPlugin};

    const DT: f32 = 0.125;

    fn combat_app() -> (App, Entity) {
        let mut config = GameConfig::default();
        config.spawner.waves.clear();

        let mut app = create_headless_app(5);
        app.add_plugins(SimulationPlugin::with_config(config.clone()));
        record_events::<DamageDealt>(&mut app);
        record_events::<EnemyDied>(&mut app);

        let player = {
            let mut commands = app.world_mut().commands();
            spawn_player(&mut commands, &config.player, &config.attack)
        };
        app.world_mut().flush();

        (app, player)
    }

    /// Stationary enemy on the player's line (no behavior attached).
    fn enemy_at(app: &mut App, kind: EnemyKind, x: f32) -> Entity {
        let max_health = app.world().resource::<GameConfig>().enemies.get(kind).max_health;
        app.world_mut()
            .spawn((Enemy { kind }, Health::new(max_health), Transform::from_xyz(x, -2.5, 0.0)))
            .id()
    }

    fn collected<E: Event + Clone>(app: &App) -> Vec<E> {
        app.world().resource::<EventLog<E>>().events().to_vec()
    }

    fn health(app: &App, entity: Entity) -> Option<u32> {
        app.world().get::<Health>(entity).map(|h| h.current)
    }

    #[test]
    fn test_normal_attack_kills_light_enemy_in_front() {
        let (mut app, player) = combat_app();
        let enemy = enemy_at(&mut app, EnemyKind::Light, 1.0);

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Normal,
        });
        step_fixed(&mut app, DT);

        assert_eq!(health(&app, enemy), Some(0));
        assert!(app.world().get::<Dead>(enemy).is_some());
        assert_eq!(app.world().resource::<KillCounter>().kills, 1);

        let damage = collected::<DamageDealt>(&app);
        assert_eq!(damage.len(), 1);
        assert_eq!(damage[0].damage, 100);
        assert!(damage[0].target_died);

        let died = collected::<EnemyDied>(&app);
        assert_eq!(
            died,
            vec![EnemyDied {
                entity: enemy,
                kind: EnemyKind::Light,
                killer: Some(player)
            }]
        );

        // Corpse lingers, then goes away
        for _ in 0..5 {
            step_fixed(&mut app, DT);
        }
        assert!(app.world().get_entity(enemy).is_err());
    }

    #[test]
    fn test_enemy_behind_is_not_hit() {
        let (mut app, player) = combat_app();
        let behind = enemy_at(&mut app, EnemyKind::Light, -1.0);

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Power,
        });
        step_fixed(&mut app, DT);

        assert_eq!(health(&app, behind), Some(100));
        assert!(collected::<DamageDealt>(&app).is_empty());
    }

    #[test]
    fn test_facing_left_hits_left_side() {
        let (mut app, player) = combat_app();
        let left = enemy_at(&mut app, EnemyKind::Light, -1.0);
        let right = enemy_at(&mut app, EnemyKind::Light, 1.0);
        app.world_mut().entity_mut(player).insert(Facing { right: false });

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Normal,
        });
        step_fixed(&mut app, DT);

        assert_eq!(health(&app, left), Some(0));
        assert_eq!(health(&app, right), Some(100));
    }

    #[test]
    fn test_power_attack_reaches_further() {
        let (mut app, player) = combat_app();
        // Hurtbox starts at 1.8: beyond normal reach (1.5), inside power reach (2.0)
        let far = enemy_at(&mut app, EnemyKind::Heavy, 2.3);

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Normal,
        });
        step_fixed(&mut app, DT);
        assert_eq!(health(&app, far), Some(200));

        app.world_mut()
            .send_event(crate::player::AnimationEvent::AttackFinished { entity: player });
        for _ in 0..4 {
            step_fixed(&mut app, DT);
        }

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Power,
        });
        step_fixed(&mut app, DT);
        assert_eq!(health(&app, far), Some(0));
    }

    #[test]
    fn test_heavy_survives_normal_hit_and_flashes() {
        let (mut app, player) = combat_app();
        let heavy = enemy_at(&mut app, EnemyKind::Heavy, 1.0);

        app.world_mut().send_event(AttackRequest {
            entity: player,
            kind: AttackKind::Normal,
        });
        step_fixed(&mut app, 1.0 / 60.0);

        assert_eq!(health(&app, heavy), Some(100));
        assert!(app.world().get::<Dead>(heavy).is_none());
        assert!(app.world().get::<HitFlash>(heavy).is_some());
        assert!(collected::<EnemyDied>(&app).is_empty());

        // 0.1s flash, first tick already counted
        for _ in 0..6 {
            step_fixed(&mut app, 1.0 / 60.0);
        }
        assert!(app.world().get::<HitFlash>(heavy).is_none());
    }

    #[test]
    fn test_dead_enemy_ignores_further_hits() {
        let (mut app, player) = combat_app();
        let enemy = enemy_at(&mut app, EnemyKind::Light, 1.0);

        for _ in 0..2 {
            app.world_mut().send_event(MeleeHit {
                attacker: player,
                target: enemy,
                damage: 150,
                kind: AttackKind::Power,
            });
        }
        step_fixed(&mut app, DT);

        // Saturated at 0, one death, one damage report (100 actually removed)
        assert_eq!(health(&app, enemy), Some(0));
        let damage = collected::<DamageDealt>(&app);
        assert_eq!(damage.len(), 1);
        assert_eq!(damage[0].damage, 100);
        assert_eq!(collected::<EnemyDied>(&app).len(), 1);
        assert_eq!(app.world().resource::<KillCounter>().kills, 1);
    }
}
