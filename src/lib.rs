//! Lane Rush - a four-lane traffic dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `input`: Edge-triggered keyboard and swipe intent tracking
//! - `session`: Lifecycle controller tying the sim to the platform collaborators
//! - `platform`: Browser/native platform abstraction

pub mod input;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 450.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fixed lane x positions, monotonically increasing, one `LANE_WIDTH` apart
    pub const LANES: [f32; 4] = [50.0, 150.0, 250.0, 350.0];
    /// Horizontal distance between adjacent lanes
    pub const LANE_WIDTH: f32 = 100.0;
    /// Lane the player starts in and returns to on reset
    pub const DEFAULT_LANE: usize = 1;

    /// Car footprint - player and obstacles share the same size
    pub const CAR_WIDTH: f32 = 50.0;
    pub const CAR_HEIGHT: f32 = 100.0;

    /// Player y, fixed near the bottom edge
    pub const PLAYER_Y: f32 = CANVAS_HEIGHT - 120.0;
    /// Obstacles enter this far above the visible top edge
    pub const SPAWN_Y: f32 = -120.0;

    /// Base downward speed for obstacles (units per tick)
    pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
    /// One obstacle spawns every this many ticks
    pub const SPAWN_INTERVAL: u64 = 60;
    /// Obstacle speed increases by 1 every this many ticks, with no cap
    pub const RAMP_INTERVAL: u64 = 300;

    /// Minimum horizontal swipe distance to register a lane step
    pub const SWIPE_THRESHOLD: f32 = 50.0;
}
