//! Session lifecycle controller
//!
//! One owned `Session` per process ties the simulation to the platform
//! collaborators and runs the Running -> GameOver -> reset state machine.
//! Event handlers only feed the input tracker; all state changes happen
//! inside [`Session::frame`] or [`Session::reset`].

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, CAR_HEIGHT, CAR_WIDTH};
use crate::input::{InputTracker, Intent};
use crate::platform::{AudioSink, Canvas, Hud};
use crate::sim::{GameEvent, GamePhase, GameState, Sprite, tick};

pub struct Session<C, A, H> {
    state: GameState,
    input: InputTracker,
    canvas: C,
    audio: A,
    hud: H,
}

impl<C: Canvas, A: AudioSink, H: Hud> Session<C, A, H> {
    pub fn new(seed: u64, canvas: C, audio: A, hud: H) -> Self {
        let mut session = Self {
            state: GameState::new(seed),
            input: InputTracker::new(),
            canvas,
            audio,
            hud,
        };
        session.hud.set_score("Score: 0");
        session.hud.set_game_over_visible(false);
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Run one animation frame.
    ///
    /// Returns false once the session is terminal; the caller must stop
    /// rescheduling the loop until [`Session::reset`].
    pub fn frame(&mut self) -> bool {
        if self.state.phase == GamePhase::GameOver {
            return false;
        }

        let input = self.input.take_input();
        for event in tick(&mut self.state, &input) {
            match event {
                GameEvent::Scored(score) => {
                    self.hud.set_score(&format!("Score: {score}"));
                }
                GameEvent::Crashed => self.game_over(),
            }
        }

        self.render();
        self.state.phase == GamePhase::Running
    }

    /// GAME_OVER entry. The loop has already stopped by the time the
    /// caller observes `frame` returning false; here the crash cue fires,
    /// the ambient loop pauses and the overlay appears.
    fn game_over(&mut self) {
        log::info!(
            "crashed at score {} after {} ticks",
            self.state.score,
            self.state.tick_count
        );
        self.audio.play_crash();
        self.audio.pause_ambient();
        self.hud.set_game_over_visible(true);
    }

    /// GAME_OVER -> RUNNING. Clears the road, zeroes the score readout,
    /// re-centers the player, hides the overlay and restarts the ambient
    /// loop from the top. The caller schedules the next frame immediately.
    pub fn reset(&mut self) {
        self.state.reset();
        // Gestures made while the overlay was up must not move the
        // freshly re-centered player
        self.input.clear();
        self.hud.set_score("Score: 0");
        self.hud.set_game_over_visible(false);
        self.audio.rewind_ambient();
        self.audio.start_ambient();
        log::info!("session reset (seed {})", self.state.seed);
    }

    /// Keyboard press/release carrying a DOM `key` identifier.
    ///
    /// The ambient loop starts here rather than on the next frame so the
    /// play call stays inside the user-gesture context autoplay policies
    /// require.
    pub fn key_event(&mut self, key: &str, pressed: bool) {
        if let Some(intent) = intent_for_key(key) {
            self.input.set_intent(intent, pressed);
            if self.input.take_ambient_request() {
                self.audio.start_ambient();
            }
        }
    }

    /// Finished touch gesture; horizontal displacement in CSS pixels.
    pub fn swipe(&mut self, delta_x: f32) {
        self.input.swipe(delta_x);
    }

    /// Mute-on-blur support: silence the soundtrack while the window is
    /// unfocused.
    pub fn handle_blur(&mut self) {
        self.audio.pause_ambient();
    }

    /// Resume the soundtrack when focus returns mid-run.
    pub fn handle_focus(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.audio.start_ambient();
        }
    }

    fn render(&mut self) {
        self.canvas.clear(CANVAS_WIDTH, CANVAS_HEIGHT);
        self.canvas.draw_image(
            Sprite::PlayerCar,
            self.state.player.x(),
            self.state.player.y,
            CAR_WIDTH,
            CAR_HEIGHT,
        );
        for obstacle in &self.state.obstacles {
            self.canvas
                .draw_image(obstacle.sprite, obstacle.x, obstacle.y, CAR_WIDTH, CAR_HEIGHT);
        }
    }
}

fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" => Some(Intent::Left),
        "ArrowRight" => Some(Intent::Right),
        _ => None,
    }
}
