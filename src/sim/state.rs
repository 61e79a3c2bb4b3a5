//! Game state and core simulation types
//!
//! One `GameState` exists per process. It is reset in place rather than
//! reconstructed, so every entry point works on the same owned value.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation advancing every frame
    Running,
    /// Crashed; nothing moves until reset
    GameOver,
}

/// Drawable sprite handles understood by the render collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayerCar,
    EnemyCar1,
    EnemyCar2,
}

/// The player's car. X is derived from the lane index, so the player can
/// never sit between lanes or off the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub lane: usize,
    pub y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: DEFAULT_LANE,
            y: PLAYER_Y,
        }
    }
}

impl Player {
    /// Current x position, always an element of `LANES`
    pub fn x(&self) -> f32 {
        LANES[self.lane]
    }

    /// Step one lane toward index 0, clamped at the leftmost lane
    pub fn step_left(&mut self) {
        self.lane = self.lane.saturating_sub(1);
    }

    /// Step one lane toward the highest index, clamped at the rightmost lane
    pub fn step_right(&mut self) {
        if self.lane + 1 < LANES.len() {
            self.lane += 1;
        }
    }
}

/// An oncoming car
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub sprite: Sprite,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG stream (lane and sprite picks)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Downward velocity shared by all obstacles (units per tick)
    pub obstacle_speed: f32,
    /// Ticks since session start or last reset
    pub tick_count: u64,
    pub player: Player,
    /// Oncoming cars in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a new running session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            tick_count: 0,
            player: Player::default(),
            obstacles: Vec::new(),
        }
    }

    /// Reinitialize the session in place: empty road, zero score, base
    /// speed, player back on the default lane. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.obstacle_speed = BASE_OBSTACLE_SPEED;
        self.tick_count = 0;
        self.player = Player::default();
        self.obstacles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_steps_clamp_to_lane_set() {
        let mut player = Player::default();
        assert_eq!(player.lane, DEFAULT_LANE);

        player.step_left();
        player.step_left();
        player.step_left();
        assert_eq!(player.lane, 0);
        assert_eq!(player.x(), LANES[0]);

        for _ in 0..10 {
            player.step_right();
        }
        assert_eq!(player.lane, LANES.len() - 1);
        assert_eq!(player.x(), LANES[LANES.len() - 1]);
    }

    #[test]
    fn test_lane_set_is_monotonic_and_evenly_spaced() {
        for pair in LANES.windows(2) {
            assert_eq!(pair[1] - pair[0], LANE_WIDTH);
        }
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut state = GameState::new(7);
        state.score = 42;
        state.obstacle_speed = 11.0;
        state.tick_count = 900;
        state.phase = GamePhase::GameOver;
        state.player.lane = 3;
        state.obstacles.push(Obstacle {
            x: LANES[0],
            y: 100.0,
            sprite: Sprite::EnemyCar1,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacle_speed, BASE_OBSTACLE_SPEED);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.player, Player::default());
        assert!(state.obstacles.is_empty());
    }
}
