//! Millisecond timebase arithmetic
//!
//! All timing in the firmware uses a monotonically increasing `u32`
//! millisecond counter supplied by the tick loop. The counter wraps after
//! about 49.7 days of uptime, so elapsed time is always computed with
//! wrapping subtraction and never by comparing raw timestamps.

/// Elapsed milliseconds between two counter readings.
///
/// Correct across counter wraparound as long as the real elapsed time is
/// less than half the counter range.
#[inline]
pub fn elapsed_ms(now_ms: u32, since_ms: u32) -> u32 {
    now_ms.wrapping_sub(since_ms)
}
