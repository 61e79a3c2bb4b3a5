//! Platform collaborators
//!
//! The sim never touches the DOM, canvas or audio directly. The session
//! drives these capability traits instead; `web` holds the browser
//! implementations and tests use in-memory fakes.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::Sprite;

/// Frame drawing surface
pub trait Canvas {
    /// Clear the whole frame
    fn clear(&mut self, width: f32, height: f32);
    /// Draw a sprite at the given position and size
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
}

/// Ambient loop and crash cue.
///
/// Playback may be rejected by the host (autoplay restrictions);
/// implementations swallow the rejection and never surface it to the
/// simulation.
pub trait AudioSink {
    /// Start the ambient loop if it is not already playing
    fn start_ambient(&mut self);
    /// Pause the ambient loop
    fn pause_ambient(&mut self);
    /// Seek the ambient loop back to the beginning
    fn rewind_ambient(&mut self);
    /// Fire-and-forget crash cue
    fn play_crash(&mut self);
}

/// Score readout and game-over affordance
pub trait Hud {
    /// Push an already formatted score line ("Score: {n}")
    fn set_score(&mut self, text: &str);
    /// Show or hide the game-over overlay
    fn set_game_over_visible(&mut self, visible: bool);
}
