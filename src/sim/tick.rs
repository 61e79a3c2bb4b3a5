//! Per-frame simulation step
//!
//! Advances the game by exactly one tick: player movement, difficulty
//! ramp, spawning, obstacle motion, collision scan, scoring sweep.

use super::collision::cars_overlap;
use super::spawn::maybe_spawn;
use super::state::{GamePhase, GameState};
use crate::consts::{CANVAS_HEIGHT, RAMP_INTERVAL};

/// Lane-step intents for a single tick, already edge-filtered by the
/// input tracker (at most one step per physical key press or swipe).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Step toward the lower-indexed lane
    pub step_left: bool,
    /// Step toward the higher-indexed lane
    pub step_right: bool,
}

/// Things that happened during a tick that the lifecycle controller must
/// relay to the platform collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle left the bottom of the screen; payload is the new score.
    Scored(u32),
    /// The player hit an obstacle. Terminal until reset.
    Crashed,
}

/// Advance the game by one tick, returning the events produced in order.
///
/// In `GameOver` this is a no-op: no position, score or speed changes
/// while the run flag is down.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Running {
        return Vec::new();
    }
    let mut events = Vec::new();

    state.tick_count += 1;

    // One lane step per edge, clamped to the lane set
    if input.step_left {
        state.player.step_left();
    }
    if input.step_right {
        state.player.step_right();
    }

    // Difficulty ramp, unbounded
    if state.tick_count.is_multiple_of(RAMP_INTERVAL) {
        state.obstacle_speed += 1.0;
    }

    maybe_spawn(state);

    for obstacle in &mut state.obstacles {
        obstacle.y += state.obstacle_speed;
    }

    // Collision scan in collection order; the first hit ends the run and
    // stops the remaining collision checks.
    let px = state.player.x();
    let py = state.player.y;
    for obstacle in &state.obstacles {
        if cars_overlap(px, py, obstacle.x, obstacle.y) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::Crashed);
            break;
        }
    }

    // Off-screen sweep, evaluated every tick including the crash tick:
    // each exiting car scores exactly once. A colliding car overlaps the
    // player, so it is never past the bottom edge and can never also
    // score.
    let score = &mut state.score;
    state.obstacles.retain(|obstacle| {
        if obstacle.y > CANVAS_HEIGHT {
            *score += 1;
            events.push(GameEvent::Scored(*score));
            false
        } else {
            true
        }
    });

    events
}
