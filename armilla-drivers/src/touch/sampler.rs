//! Debounced touch acquisition
//!
//! Sits between the bus link and the gesture classifier. Responsibilities:
//! rate-limit controller queries to a coalescing interval, convert raw
//! sensor coordinates to screen space through a min/max calibration, clamp
//! to display bounds, and discard implausible reports. The sampler never
//! errors and never blocks; bad data is just "no contact".

use armilla_core::gesture::ContactSample;
use armilla_core::time::elapsed_ms;
use armilla_core::traits::{RawTouch, TouchLink, TouchSource};

/// Minimum interval between controller queries (ms)
pub const COALESCE_INTERVAL_MS: u32 = 20;
/// Raw coordinates beyond this are sensor glitches
pub const RAW_SANITY_BOUND: u16 = 4095;
/// Most simultaneous contacts a plausible report can carry
pub const MAX_TOUCHES: u8 = 2;

/// Per-axis calibration: the raw range that maps onto the display
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    /// Raw value at the low display edge
    pub raw_min: u16,
    /// Raw value at the high display edge
    pub raw_max: u16,
}

impl AxisCalibration {
    /// Map a raw reading into `0..extent` screen pixels, clamped
    pub fn map(&self, raw: u16, extent: u16) -> i16 {
        let raw = raw.clamp(self.raw_min, self.raw_max);
        let span = (self.raw_max.saturating_sub(self.raw_min)).max(1) as u32;
        let scaled = (raw - self.raw_min) as u32 * extent.saturating_sub(1) as u32 / span;
        scaled as i16
    }
}

/// Touch calibration: both axes plus the display bounds
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchCalibration {
    pub x: AxisCalibration,
    pub y: AxisCalibration,
    /// Display width in pixels
    pub width: u16,
    /// Display height in pixels
    pub height: u16,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        // FT6x36 parts on the reference panel report screen-resolution
        // coordinates already; identity-ish mapping onto a 240x280 panel
        Self {
            x: AxisCalibration {
                raw_min: 0,
                raw_max: 239,
            },
            y: AxisCalibration {
                raw_min: 0,
                raw_max: 279,
            },
            width: 240,
            height: 280,
        }
    }
}

/// Debounced, calibrated touch sampler
///
/// Queries the link at most once per coalescing interval; inside the
/// interval it replays the cached result, including a cached miss when the
/// last query failed.
pub struct TouchSampler<L> {
    link: L,
    calibration: TouchCalibration,
    /// Timestamp of the last controller query, if any
    last_query_ms: Option<u32>,
    cached: Option<ContactSample>,
}

impl<L: TouchLink> TouchSampler<L> {
    /// Create a sampler over a bus link
    pub fn new(link: L, calibration: TouchCalibration) -> Self {
        Self {
            link,
            calibration,
            last_query_ms: None,
            cached: None,
        }
    }

    /// Access to the underlying link
    pub fn link(&mut self) -> &mut L {
        &mut self.link
    }

    /// Validate a raw report and convert it to screen space
    fn convert(&self, raw: RawTouch, now_ms: u32) -> Option<ContactSample> {
        if raw.touches == 0 || raw.touches > MAX_TOUCHES {
            return None;
        }
        if raw.x > RAW_SANITY_BOUND || raw.y > RAW_SANITY_BOUND {
            return None;
        }

        Some(ContactSample {
            x: self.calibration.x.map(raw.x, self.calibration.width),
            y: self.calibration.y.map(raw.y, self.calibration.height),
            pressure: raw.pressure,
            timestamp_ms: now_ms,
        })
    }
}

impl<L: TouchLink> TouchSource for TouchSampler<L> {
    fn sample(&mut self, now_ms: u32) -> Option<ContactSample> {
        if let Some(last) = self.last_query_ms {
            if elapsed_ms(now_ms, last) < COALESCE_INTERVAL_MS {
                return self.cached;
            }
        }

        self.last_query_ms = Some(now_ms);
        self.cached = self
            .link
            .probe()
            .and_then(|raw| self.convert(raw, now_ms));
        self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock link with a settable report, counting queries
    struct MockLink {
        report: Option<RawTouch>,
        probes: u32,
    }

    impl MockLink {
        fn with(report: Option<RawTouch>) -> Self {
            Self { report, probes: 0 }
        }
    }

    impl TouchLink for MockLink {
        fn probe(&mut self) -> Option<RawTouch> {
            self.probes += 1;
            self.report
        }

        fn presence_check(&mut self) -> bool {
            true
        }
    }

    fn raw(x: u16, y: u16) -> Option<RawTouch> {
        Some(RawTouch {
            touches: 1,
            x,
            y,
            pressure: 40,
        })
    }

    fn sampler(report: Option<RawTouch>) -> TouchSampler<MockLink> {
        TouchSampler::new(MockLink::with(report), TouchCalibration::default())
    }

    #[test]
    fn test_valid_sample_passes_through() {
        let mut s = sampler(raw(120, 140));
        let sample = s.sample(0).unwrap();
        assert_eq!(sample.x, 120);
        assert_eq!(sample.y, 140);
        assert_eq!(sample.pressure, 40);
        assert_eq!(sample.timestamp_ms, 0);
    }

    #[test]
    fn test_coalescing_caches_inside_interval() {
        let mut s = sampler(raw(120, 140));

        s.sample(0);
        s.sample(5);
        s.sample(19);
        assert_eq!(s.link().probes, 1);

        s.sample(20);
        assert_eq!(s.link().probes, 2);
    }

    #[test]
    fn test_coalescing_caches_misses_too() {
        let mut s = sampler(None);

        assert!(s.sample(0).is_none());
        assert!(s.sample(10).is_none());
        assert_eq!(s.link().probes, 1);
    }

    #[test]
    fn test_zero_touches_is_no_contact() {
        let mut s = sampler(Some(RawTouch {
            touches: 0,
            x: 120,
            y: 140,
            pressure: 0,
        }));
        assert!(s.sample(0).is_none());
    }

    #[test]
    fn test_too_many_touches_rejected() {
        let mut s = sampler(Some(RawTouch {
            touches: 5,
            x: 120,
            y: 140,
            pressure: 40,
        }));
        assert!(s.sample(0).is_none());
    }

    #[test]
    fn test_out_of_sanity_coordinates_rejected() {
        let mut s = sampler(raw(RAW_SANITY_BOUND + 1, 140));
        assert!(s.sample(0).is_none());
    }

    #[test]
    fn test_calibration_maps_and_clamps() {
        let cal = TouchCalibration {
            x: AxisCalibration {
                raw_min: 100,
                raw_max: 3900,
            },
            y: AxisCalibration {
                raw_min: 200,
                raw_max: 3800,
            },
            width: 240,
            height: 280,
        };

        // Low edge, high edge, below-range clamp
        assert_eq!(cal.x.map(100, 240), 0);
        assert_eq!(cal.x.map(3900, 240), 239);
        assert_eq!(cal.x.map(0, 240), 0);
        assert_eq!(cal.y.map(3800, 280), 279);

        // Midpoint lands near the middle
        let mid = cal.x.map(2000, 240);
        assert!((118..=121).contains(&mid));
    }

    #[test]
    fn test_first_sample_always_queries() {
        let mut s = sampler(raw(10, 10));
        assert!(s.sample(u32::MAX).is_some());
        assert_eq!(s.link().probes, 1);
    }
}
