//! Gesture classification
//!
//! Turns the stream of periodically-sampled touch contacts into discrete
//! gesture events. Two classifiers live here:
//!
//! - [`GestureClassifier`] - the live state machine that runs every tick
//!   and actually drives navigation
//! - [`classify_stroke`] - a pure release-time evaluator for offline/batch
//!   use
//!
//! The two apply the same numeric thresholds but measure displacement
//! differently (dominant axis vs. Euclidean distance) and are not
//! guaranteed to agree on every input. This is a known property of the
//! tuning, not a bug; see the notes on [`classify_stroke`].

mod classifier;
mod classify;

pub use classifier::{
    GestureClassifier, DEAD_ZONE_PX, LONG_PRESS_MIN_MS, SWIPE_MAX_MS, SWIPE_MIN_MS, SWIPE_MIN_PX,
    TAP_MAX_MS,
};
pub use classify::{
    classify_stroke, STROKE_DEAD_ZONE_PX, STROKE_SWIPE_MAX_MS, STROKE_SWIPE_MIN_PX,
    STROKE_TAP_MAX_MS,
};

/// One calibrated touch sample in screen space.
///
/// Transient: produced each tick by the sampler and not retained beyond
/// one comparison cycle in the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContactSample {
    /// X position in screen pixels
    pub x: i16,
    /// Y position in screen pixels
    pub y: i16,
    /// Contact pressure (controller units)
    pub pressure: u8,
    /// Millisecond timestamp of the underlying sensor query
    pub timestamp_ms: u32,
}

/// A classified gesture event. At most one is produced per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    /// Nothing happened this tick
    None,
    /// A contact started
    Press { x: i16, y: i16 },
    /// The contact moved outside the dead zone; deltas are from the press point
    Move { x: i16, y: i16, dx: i16, dy: i16 },
    /// Contact ended without qualifying as tap or long-press
    Release { x: i16, y: i16, duration_ms: u32 },
    /// Short stationary contact
    Tap { x: i16, y: i16, duration_ms: u32 },
    /// Long stationary contact
    LongPress { x: i16, y: i16, duration_ms: u32 },
    /// Swipe toward negative X
    SwipeLeft { dx: i16, dy: i16, duration_ms: u32 },
    /// Swipe toward positive X
    SwipeRight { dx: i16, dy: i16, duration_ms: u32 },
    /// Swipe toward negative Y
    SwipeUp { dx: i16, dy: i16, duration_ms: u32 },
    /// Swipe toward positive Y
    SwipeDown { dx: i16, dy: i16, duration_ms: u32 },
}

impl GestureEvent {
    /// Returns true for anything that should count as user activity
    pub fn is_activity(&self) -> bool {
        !matches!(self, GestureEvent::None)
    }

    /// Returns true if this is a directional swipe
    pub fn is_swipe(&self) -> bool {
        matches!(
            self,
            GestureEvent::SwipeLeft { .. }
                | GestureEvent::SwipeRight { .. }
                | GestureEvent::SwipeUp { .. }
                | GestureEvent::SwipeDown { .. }
        )
    }
}
