//! Live gesture classifier
//!
//! A three-state machine (Idle, Pressed, Dragging) evaluated once per tick
//! against the current contact sample. Contact loss is how releases arrive:
//! the sampler reports `None` and the classifier closes out the contact.

use super::{ContactSample, GestureEvent};
use crate::time::elapsed_ms;

/// Lateral movement below this (per axis, px) keeps a press stationary
pub const DEAD_ZONE_PX: i16 = 5;
/// Dominant-axis displacement a swipe must exceed (px)
pub const SWIPE_MIN_PX: i16 = 50;
/// Swipe window lower bound (ms since press)
pub const SWIPE_MIN_MS: u32 = 100;
/// Swipe window upper bound (ms since press)
pub const SWIPE_MAX_MS: u32 = 500;
/// Releases faster than this are taps (ms)
pub const TAP_MAX_MS: u32 = 200;
/// Releases slower than this are long-presses (ms)
pub const LONG_PRESS_MIN_MS: u32 = 800;

/// Classifier states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// No contact tracked
    Idle,
    /// Contact down, still inside the dead zone
    Pressed,
    /// Contact down and moving
    Dragging,
}

/// The single tracked contact. Reset to empty on release.
#[derive(Debug, Clone, Copy, Default)]
struct ContactState {
    start_x: i16,
    start_y: i16,
    last_x: i16,
    last_y: i16,
    start_ms: u32,
}

/// Live gesture classifier
///
/// Feed it one `Option<ContactSample>` per tick; it emits at most one
/// [`GestureEvent`] per tick. Exactly one logical contact is tracked at a
/// time.
#[derive(Debug)]
pub struct GestureClassifier {
    phase: Phase,
    contact: ContactState,
    /// Running crown counter: accumulated incremental `dy` of drag moves.
    /// Survives release; cleared only by explicit request.
    crown_steps: i32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    /// Create a new classifier in the Idle state
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            contact: ContactState::default(),
            crown_steps: 0,
        }
    }

    /// Returns true while a contact is being tracked
    pub fn is_tracking(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Accumulated crown counter (vertical drag travel, px)
    ///
    /// Usable by callers that want continuous-rotation-style input from
    /// drag gestures.
    pub fn crown_steps(&self) -> i32 {
        self.crown_steps
    }

    /// Clear the crown counter
    pub fn reset_crown(&mut self) {
        self.crown_steps = 0;
    }

    /// Evaluate one tick of contact input.
    ///
    /// `now_ms` is the tick timestamp, used to time releases (the sample
    /// itself carries the timestamp of its sensor query).
    pub fn update(&mut self, sample: Option<ContactSample>, now_ms: u32) -> GestureEvent {
        match (self.phase, sample) {
            (Phase::Idle, None) => GestureEvent::None,

            (Phase::Idle, Some(s)) => {
                self.contact = ContactState {
                    start_x: s.x,
                    start_y: s.y,
                    last_x: s.x,
                    last_y: s.y,
                    start_ms: s.timestamp_ms,
                };
                self.phase = Phase::Pressed;
                GestureEvent::Press { x: s.x, y: s.y }
            }

            (Phase::Pressed, Some(s)) => {
                let dx = s.x - self.contact.start_x;
                let dy = s.y - self.contact.start_y;
                let step_dy = s.y - self.contact.last_y;
                self.contact.last_x = s.x;
                self.contact.last_y = s.y;

                if dx.abs() <= DEAD_ZONE_PX && dy.abs() <= DEAD_ZONE_PX {
                    // Dead zone: still a stationary press
                    GestureEvent::None
                } else {
                    self.phase = Phase::Dragging;
                    self.crown_steps += step_dy as i32;
                    GestureEvent::Move { x: s.x, y: s.y, dx, dy }
                }
            }

            (Phase::Dragging, Some(s)) => {
                let dx = s.x - self.contact.start_x;
                let dy = s.y - self.contact.start_y;
                let step_dy = s.y - self.contact.last_y;
                self.contact.last_x = s.x;
                self.contact.last_y = s.y;

                let duration_ms = elapsed_ms(s.timestamp_ms, self.contact.start_ms);
                if let Some(swipe) = swipe_for(dx, dy, duration_ms) {
                    swipe
                } else {
                    self.crown_steps += step_dy as i32;
                    GestureEvent::Move { x: s.x, y: s.y, dx, dy }
                }
            }

            // Contact lost: close out the press
            (Phase::Pressed, None) | (Phase::Dragging, None) => {
                let duration_ms = elapsed_ms(now_ms, self.contact.start_ms);
                let (x, y) = (self.contact.last_x, self.contact.last_y);
                self.phase = Phase::Idle;
                self.contact = ContactState::default();

                if duration_ms > LONG_PRESS_MIN_MS {
                    GestureEvent::LongPress { x, y, duration_ms }
                } else if duration_ms < TAP_MAX_MS {
                    GestureEvent::Tap { x, y, duration_ms }
                } else {
                    GestureEvent::Release { x, y, duration_ms }
                }
            }
        }
    }
}

/// Swipe test for the live classifier: dominant-axis displacement,
/// within the timing window.
fn swipe_for(dx: i16, dy: i16, duration_ms: u32) -> Option<GestureEvent> {
    if !(SWIPE_MIN_MS..=SWIPE_MAX_MS).contains(&duration_ms) {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > SWIPE_MIN_PX {
            Some(GestureEvent::SwipeRight { dx, dy, duration_ms })
        } else if dx < -SWIPE_MIN_PX {
            Some(GestureEvent::SwipeLeft { dx, dy, duration_ms })
        } else {
            None
        }
    } else if dy > SWIPE_MIN_PX {
        Some(GestureEvent::SwipeDown { dx, dy, duration_ms })
    } else if dy < -SWIPE_MIN_PX {
        Some(GestureEvent::SwipeUp { dx, dy, duration_ms })
    } else {
        None
    }
}
