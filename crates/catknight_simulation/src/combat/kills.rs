//! Kill counter.

use bevy::prelude::*;

use super::damage::EnemyDied;

/// Kills this session (host renders `label()`).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KillCounter {
    pub kills: u32,
}

impl KillCounter {
    pub fn increment(&mut self) {
        self.kills += 1;
    }

    pub fn reset(&mut self) {
        self.kills = 0;
    }

    pub fn label(&self) -> String {
        format!("Kills: {}", self.kills)
    }
}

/// System: one kill per `EnemyDied`.
pub fn count_kills(mut died_events: EventReader<EnemyDied>, mut counter: ResMut<KillCounter>) {
    for _ in died_events.read() {
        counter.increment();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_counter_label_and_reset() {
        let mut counter = KillCounter::default();
        assert_eq!(counter.label(), "Kills: 0");

        counter.increment();
        counter.increment();
        assert_eq!(counter.label(), "Kills: 2");

        counter.reset();
        assert_eq!(counter.kills, 0);
    }
}
