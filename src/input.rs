//! Input intent tracking
//!
//! Keyboard movement is edge-triggered: a per-intent latch ({held,
//! consumed}) yields exactly one lane step per physical key press, no
//! matter how many frames pass before the key is released. A raw
//! pressed-flag map would let one press skip several lanes on fast
//! displays.

use crate::consts::SWIPE_THRESHOLD;
use crate::sim::TickInput;

/// Directional movement intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Toward the lower-indexed lane
    Left,
    /// Toward the higher-indexed lane
    Right,
}

/// Edge latch for one intent
#[derive(Debug, Clone, Copy, Default)]
struct KeyLatch {
    held: bool,
    consumed: bool,
}

impl KeyLatch {
    fn press(&mut self) {
        if !self.held {
            self.held = true;
            self.consumed = false;
        }
    }

    fn release(&mut self) {
        self.held = false;
        self.consumed = false;
    }

    /// One step per press edge
    fn take(&mut self) -> bool {
        if self.held && !self.consumed {
            self.consumed = true;
            true
        } else {
            false
        }
    }
}

/// Tracks pending movement intents between ticks.
///
/// Event handlers write here asynchronously; the session drains one
/// tick's worth of intents with [`InputTracker::take_input`].
#[derive(Debug, Default)]
pub struct InputTracker {
    left: KeyLatch,
    right: KeyLatch,
    swipe_left: bool,
    swipe_right: bool,
    ambient_requested: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`active`) or release for a directional intent.
    ///
    /// Every press also flags an ambient-audio start request; the audio
    /// sink no-ops when the loop is already playing, which makes the
    /// first press of a session the one that actually starts it.
    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        let latch = match intent {
            Intent::Left => &mut self.left,
            Intent::Right => &mut self.right,
        };
        if active {
            latch.press();
            self.ambient_requested = true;
        } else {
            latch.release();
        }
    }

    /// Translate a finished gesture into at most one lane step.
    ///
    /// Displacements within the threshold are no-ops; larger ones queue
    /// a single step regardless of magnitude.
    pub fn swipe(&mut self, delta_x: f32) {
        if delta_x > SWIPE_THRESHOLD {
            self.swipe_right = true;
        } else if delta_x < -SWIPE_THRESHOLD {
            self.swipe_left = true;
        }
    }

    /// Drain one tick's worth of intents.
    ///
    /// A queued swipe that coincides with a key step keeps its slot and
    /// applies on the following tick, so every gesture still moves the
    /// player exactly one lane.
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            step_left: self.left.take() || std::mem::take(&mut self.swipe_left),
            step_right: self.right.take() || std::mem::take(&mut self.swipe_right),
        }
    }

    /// True when a directional press has requested the ambient loop since
    /// the last call.
    pub fn take_ambient_request(&mut self) -> bool {
        std::mem::take(&mut self.ambient_requested)
    }

    /// Drop every pending intent: latches, queued swipes and the ambient
    /// request. A key still held afterwards must be released and pressed
    /// again to produce a step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_yields_exactly_one_step() {
        let mut tracker = InputTracker::new();
        tracker.set_intent(Intent::Left, true);

        assert!(tracker.take_input().step_left);
        // Still held across later ticks, but already consumed
        assert!(!tracker.take_input().step_left);
        assert!(!tracker.take_input().step_left);
    }

    #[test]
    fn test_release_and_press_rearms_the_latch() {
        let mut tracker = InputTracker::new();
        tracker.set_intent(Intent::Right, true);
        assert!(tracker.take_input().step_right);

        tracker.set_intent(Intent::Right, false);
        tracker.set_intent(Intent::Right, true);
        assert!(tracker.take_input().step_right);
    }

    #[test]
    fn test_repeated_keydown_without_release_does_not_rearm() {
        // Browsers auto-repeat keydown while a key is held
        let mut tracker = InputTracker::new();
        tracker.set_intent(Intent::Left, true);
        assert!(tracker.take_input().step_left);

        tracker.set_intent(Intent::Left, true);
        tracker.set_intent(Intent::Left, true);
        assert!(!tracker.take_input().step_left);
    }

    #[test]
    fn test_swipe_below_threshold_is_a_no_op() {
        let mut tracker = InputTracker::new();
        tracker.swipe(49.0);
        tracker.swipe(-50.0);
        assert_eq!(tracker.take_input(), TickInput::default());
    }

    #[test]
    fn test_swipe_queues_a_single_step_regardless_of_magnitude() {
        let mut tracker = InputTracker::new();
        tracker.swipe(600.0);
        let input = tracker.take_input();
        assert!(input.step_right);
        assert!(!input.step_left);
        // One gesture, one step
        assert_eq!(tracker.take_input(), TickInput::default());

        tracker.swipe(-51.0);
        assert!(tracker.take_input().step_left);
    }

    #[test]
    fn test_clear_drops_pending_intents() {
        let mut tracker = InputTracker::new();
        tracker.set_intent(Intent::Left, true);
        tracker.swipe(90.0);

        tracker.clear();

        assert_eq!(tracker.take_input(), TickInput::default());
        assert!(!tracker.take_ambient_request());
    }

    #[test]
    fn test_directional_press_requests_ambient_audio() {
        let mut tracker = InputTracker::new();
        assert!(!tracker.take_ambient_request());

        tracker.set_intent(Intent::Left, true);
        assert!(tracker.take_ambient_request());
        // Drained until the next press
        assert!(!tracker.take_ambient_request());

        tracker.set_intent(Intent::Left, false);
        assert!(!tracker.take_ambient_request());
    }
}
