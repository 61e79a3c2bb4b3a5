//! Obstacle spawning
//!
//! One new car every `SPAWN_INTERVAL` ticks, on a uniformly random lane,
//! with a coin-flip sprite variant. There is no cap on how many cars are
//! on the road, and the spawner has no memory beyond the tick counter and
//! the RNG stream.

use rand::Rng;

use super::state::{GameState, Obstacle, Sprite};
use crate::consts::{LANES, SPAWN_INTERVAL, SPAWN_Y};

/// Spawn a new obstacle if the tick counter has reached a spawn interval.
///
/// The tick counter is incremented before this runs, so the first spawn
/// lands on tick `SPAWN_INTERVAL`, never on tick 0.
pub fn maybe_spawn(state: &mut GameState) {
    if !state.tick_count.is_multiple_of(SPAWN_INTERVAL) {
        return;
    }

    let lane = state.rng.random_range(0..LANES.len());
    let sprite = if state.rng.random_bool(0.5) {
        Sprite::EnemyCar1
    } else {
        Sprite::EnemyCar2
    };
    state.obstacles.push(Obstacle {
        x: LANES[lane],
        y: SPAWN_Y,
        sprite,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_only_on_interval_ticks() {
        let mut state = GameState::new(1);

        state.tick_count = SPAWN_INTERVAL - 1;
        maybe_spawn(&mut state);
        assert!(state.obstacles.is_empty());

        state.tick_count = SPAWN_INTERVAL;
        maybe_spawn(&mut state);
        assert_eq!(state.obstacles.len(), 1);

        state.tick_count = SPAWN_INTERVAL + 1;
        maybe_spawn(&mut state);
        assert_eq!(state.obstacles.len(), 1);

        state.tick_count = SPAWN_INTERVAL * 2;
        maybe_spawn(&mut state);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawned_car_enters_above_the_screen_on_a_lane() {
        let mut state = GameState::new(99);
        state.tick_count = SPAWN_INTERVAL;
        maybe_spawn(&mut state);

        let car = &state.obstacles[0];
        assert_eq!(car.y, SPAWN_Y);
        assert!(LANES.contains(&car.x));
        assert!(matches!(car.sprite, Sprite::EnemyCar1 | Sprite::EnemyCar2));
    }

    #[test]
    fn test_same_seed_spawns_identically() {
        let mut a = GameState::new(12345);
        let mut b = GameState::new(12345);
        for state in [&mut a, &mut b] {
            for round in 1..=10u64 {
                state.tick_count = SPAWN_INTERVAL * round;
                maybe_spawn(state);
            }
        }
        assert_eq!(a.obstacles, b.obstacles);
    }
}
