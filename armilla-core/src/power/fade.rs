//! Brightness fade math
//!
//! The fade is a discrete-step animation on a fixed cadence. The step math
//! is kept pure and separate from the controller that applies values to
//! hardware, so fades can be tested deterministically as a function of
//! step count.

/// Brightness change per fade step
pub const FADE_STEP: u8 = 5;
/// Time a full-range fade takes (ms)
pub const FADE_DURATION_MS: u32 = 500;

/// Interval between fade steps.
///
/// The total duration is spread over the number of steps a full-range
/// fade would take: `duration / (max / step)`.
pub const fn step_interval_ms(duration_ms: u32, max_brightness: u8, step: u8) -> u32 {
    duration_ms / (max_brightness as u32 / step as u32)
}

/// One fade step from `current` toward `target`, clamped so the value
/// never overshoots the target.
pub fn step_toward(current: u8, target: u8, step: u8) -> u8 {
    if current < target {
        let next = current.saturating_add(step);
        if next > target {
            target
        } else {
            next
        }
    } else if current > target {
        let next = current.saturating_sub(step);
        if next < target {
            target
        } else {
            next
        }
    } else {
        current
    }
}
