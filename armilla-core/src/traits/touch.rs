//! Touch sensor link and sample source traits

use crate::gesture::ContactSample;

/// One raw report from the touch controller, in sensor coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTouch {
    /// Number of simultaneous contacts the controller reports
    pub touches: u8,
    /// Raw X position in sensor space
    pub x: u16,
    /// Raw Y position in sensor space
    pub y: u16,
    /// Contact pressure in controller units (0 if the part does not report it)
    pub pressure: u8,
}

/// Trait for the bus link to the touch controller
///
/// Implementations must not block: a bus transfer that would wait takes the
/// fast-fail path and returns `None` instead.
pub trait TouchLink {
    /// Query the controller for the current contact.
    ///
    /// Returns `None` on bus error or when the controller has nothing to
    /// report. Never an error: from the caller's point of view an unhealthy
    /// bus and an idle panel look the same.
    fn probe(&mut self) -> Option<RawTouch>;

    /// Check whether the controller answers on the bus at all.
    fn presence_check(&mut self) -> bool;
}

/// Trait for a debounced, calibrated sample source.
///
/// Implemented by the touch sampler driver, which sits on top of a
/// [`TouchLink`] and handles query coalescing, calibration, and sanity
/// filtering. The classifier consumes this trait only.
pub trait TouchSource {
    /// The current contact in screen space, or `None` when there is no
    /// valid contact this tick.
    fn sample(&mut self, now_ms: u32) -> Option<ContactSample>;
}
