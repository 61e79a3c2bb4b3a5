//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer tick counter, one tick per animation frame
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::cars_overlap;
pub use spawn::maybe_spawn;
pub use state::{GamePhase, GameState, Obstacle, Player, Sprite};
pub use tick::{GameEvent, TickInput, tick};
