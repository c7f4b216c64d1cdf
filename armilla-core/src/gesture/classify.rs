//! Release-time stroke classifier
//!
//! Pure function for classifying a complete stroke from its endpoints,
//! intended for offline and batch use (replay tooling, tuning). Unlike the
//! live classifier it measures total Euclidean displacement, so the two can
//! disagree: a 40px/40px diagonal travels ~56px of distance and swipes
//! here, but never exceeds 50px on either axis and stays a drag live. Do
//! not "fix" one to match the other; navigation is driven by the live
//! classifier only.

use super::GestureEvent;

/// Taps may be slower here than live (ms)
pub const STROKE_TAP_MAX_MS: u32 = 300;
/// Total travel below this counts as stationary (px)
pub const STROKE_DEAD_ZONE_PX: i32 = 20;
/// Total travel a swipe must exceed (px)
pub const STROKE_SWIPE_MIN_PX: i32 = 50;
/// Swipes must complete within this (ms)
pub const STROKE_SWIPE_MAX_MS: u32 = 500;

// Long-press threshold is shared with the live classifier
use super::LONG_PRESS_MIN_MS;

/// Classify a complete stroke from its endpoints and duration.
///
/// Displacement is Euclidean distance (compared squared, no sqrt needed).
/// Thresholds: long-press > 800ms within 20px; tap < 300ms within 20px;
/// swipe > 50px within 500ms, direction by the larger absolute delta.
/// Everything else is a plain release at the end position.
pub fn classify_stroke(
    start_x: i16,
    start_y: i16,
    end_x: i16,
    end_y: i16,
    duration_ms: u32,
) -> GestureEvent {
    let dx = end_x as i32 - start_x as i32;
    let dy = end_y as i32 - start_y as i32;
    // Deltas span nearly 17 bits each, so the squares need i64
    let dist_sq = dx as i64 * dx as i64 + dy as i64 * dy as i64;

    let stationary = dist_sq < (STROKE_DEAD_ZONE_PX * STROKE_DEAD_ZONE_PX) as i64;

    if duration_ms > LONG_PRESS_MIN_MS && stationary {
        return GestureEvent::LongPress {
            x: end_x,
            y: end_y,
            duration_ms,
        };
    }

    if duration_ms < STROKE_TAP_MAX_MS && stationary {
        return GestureEvent::Tap {
            x: end_x,
            y: end_y,
            duration_ms,
        };
    }

    if dist_sq > (STROKE_SWIPE_MIN_PX * STROKE_SWIPE_MIN_PX) as i64
        && duration_ms < STROKE_SWIPE_MAX_MS
    {
        // Direction is decided on the full-width deltas; the reported
        // deltas saturate rather than wrap
        let sdx = dx.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        let sdy = dy.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        return if dx.abs() > dy.abs() {
            if dx > 0 {
                GestureEvent::SwipeRight { dx: sdx, dy: sdy, duration_ms }
            } else {
                GestureEvent::SwipeLeft { dx: sdx, dy: sdy, duration_ms }
            }
        } else if dy > 0 {
            GestureEvent::SwipeDown { dx: sdx, dy: sdy, duration_ms }
        } else {
            GestureEvent::SwipeUp { dx: sdx, dy: sdy, duration_ms }
        };
    }

    GestureEvent::Release {
        x: end_x,
        y: end_y,
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tap() {
        let ev = classify_stroke(100, 100, 105, 98, 120);
        assert!(matches!(ev, GestureEvent::Tap { duration_ms: 120, .. }));
    }

    #[test]
    fn test_long_press() {
        let ev = classify_stroke(100, 100, 110, 100, 1000);
        assert!(matches!(ev, GestureEvent::LongPress { .. }));
    }

    #[test]
    fn test_swipes_by_dominant_axis() {
        assert!(matches!(
            classify_stroke(100, 200, 200, 210, 300),
            GestureEvent::SwipeRight { dx: 100, .. }
        ));
        assert!(matches!(
            classify_stroke(200, 200, 100, 210, 300),
            GestureEvent::SwipeLeft { dx: -100, .. }
        ));
        assert!(matches!(
            classify_stroke(100, 200, 100, 100, 300),
            GestureEvent::SwipeUp { dy: -100, .. }
        ));
        assert!(matches!(
            classify_stroke(100, 100, 100, 200, 300),
            GestureEvent::SwipeDown { dy: 100, .. }
        ));
    }

    #[test]
    fn test_slow_long_stroke_is_release() {
        let ev = classify_stroke(100, 100, 220, 100, 700);
        assert!(matches!(ev, GestureEvent::Release { .. }));
    }

    #[test]
    fn test_extreme_endpoints_keep_direction() {
        // Deltas near the full i16 span must neither overflow the
        // distance math nor flip the reported direction
        assert!(matches!(
            classify_stroke(-20_000, 0, 20_000, 0, 300),
            GestureEvent::SwipeRight { .. }
        ));
        assert!(matches!(
            classify_stroke(20_000, 0, -20_000, 0, 300),
            GestureEvent::SwipeLeft { .. }
        ));

        let ev = classify_stroke(i16::MIN, 0, i16::MAX, 0, 300);
        assert!(matches!(
            ev,
            GestureEvent::SwipeRight {
                dx: i16::MAX,
                dy: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_diagonal_disagrees_with_live_classifier() {
        // 40px on each axis: 56px of total travel, so it swipes here,
        // while the live dominant-axis rule would keep it a drag.
        let ev = classify_stroke(100, 100, 140, 140, 300);
        assert!(ev.is_swipe());
    }

    proptest! {
        /// The stroke classifier only ever emits release-class events.
        #[test]
        fn prop_emits_release_class_only(
            sx in any::<i16>(),
            sy in any::<i16>(),
            ex in any::<i16>(),
            ey in any::<i16>(),
            dur in 0u32..5000,
        ) {
            let ev = classify_stroke(sx, sy, ex, ey, dur);
            let release_class = !matches!(
                ev,
                GestureEvent::None | GestureEvent::Press { .. } | GestureEvent::Move { .. }
            );
            prop_assert!(release_class);
        }

        /// Swipes always exceed the distance floor and fit the time window.
        #[test]
        fn prop_swipe_thresholds(
            sx in any::<i16>(),
            sy in any::<i16>(),
            ex in any::<i16>(),
            ey in any::<i16>(),
            dur in 0u32..5000,
        ) {
            if classify_stroke(sx, sy, ex, ey, dur).is_swipe() {
                let dx = (ex as i64) - (sx as i64);
                let dy = (ey as i64) - (sy as i64);
                let floor = (STROKE_SWIPE_MIN_PX * STROKE_SWIPE_MIN_PX) as i64;
                prop_assert!(dx * dx + dy * dy > floor);
                prop_assert!(dur < STROKE_SWIPE_MAX_MS);
            }
        }
    }
}
