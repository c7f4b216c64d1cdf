//! Battery saver profiles
//!
//! A fixed table of brightness/timeout/radio policy bundles, selected by
//! level. The timeout values are data only: selecting a profile never
//! changes the timeout policy by itself (that stays manual).

/// Battery saver level, ordered from least to most aggressive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatterySaverLevel {
    #[default]
    Off,
    Light,
    Medium,
    Extreme,
}

impl BatterySaverLevel {
    /// Number of levels
    pub const COUNT: u8 = 4;

    /// Level from a raw index, clamped into the valid range
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => BatterySaverLevel::Off,
            1 => BatterySaverLevel::Light,
            2 => BatterySaverLevel::Medium,
            _ => BatterySaverLevel::Extreme,
        }
    }

    /// Index of this level in the profile table
    pub fn index(self) -> u8 {
        match self {
            BatterySaverLevel::Off => 0,
            BatterySaverLevel::Light => 1,
            BatterySaverLevel::Medium => 2,
            BatterySaverLevel::Extreme => 3,
        }
    }
}

/// One battery saver policy bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatterySaverProfile {
    /// Brightness ceiling while this profile is active
    pub brightness_cap: u8,
    /// Inactivity timeout this profile suggests (used only if the timeout
    /// policy is enabled)
    pub timeout_ms: u32,
    /// Whether the radio may stay up
    pub wifi_allowed: bool,
    /// Display label
    pub label: &'static str,
}

/// Fixed profile table, indexed by [`BatterySaverLevel`]
pub const PROFILES: [BatterySaverProfile; BatterySaverLevel::COUNT as usize] = [
    BatterySaverProfile {
        brightness_cap: 255,
        timeout_ms: 30_000,
        wifi_allowed: true,
        label: "Off",
    },
    BatterySaverProfile {
        brightness_cap: 180,
        timeout_ms: 20_000,
        wifi_allowed: true,
        label: "Light",
    },
    BatterySaverProfile {
        brightness_cap: 120,
        timeout_ms: 15_000,
        wifi_allowed: false,
        label: "Medium",
    },
    BatterySaverProfile {
        brightness_cap: 60,
        timeout_ms: 10_000,
        wifi_allowed: false,
        label: "Extreme",
    },
];

/// Look up the profile for a level
pub fn profile(level: BatterySaverLevel) -> &'static BatterySaverProfile {
    &PROFILES[level.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(BatterySaverLevel::from_index(0), BatterySaverLevel::Off);
        assert_eq!(BatterySaverLevel::from_index(3), BatterySaverLevel::Extreme);
        // Out-of-range input clamps to the most aggressive level
        assert_eq!(BatterySaverLevel::from_index(17), BatterySaverLevel::Extreme);
    }

    #[test]
    fn test_table_ordering() {
        // Caps and timeouts shrink as the level gets more aggressive
        for w in PROFILES.windows(2) {
            assert!(w[0].brightness_cap > w[1].brightness_cap);
            assert!(w[0].timeout_ms > w[1].timeout_ms);
        }
    }

    #[test]
    fn test_lookup_roundtrip() {
        assert_eq!(profile(BatterySaverLevel::Extreme).brightness_cap, 60);
        assert_eq!(profile(BatterySaverLevel::Off).label, "Off");
        assert!(!profile(BatterySaverLevel::Medium).wifi_allowed);
    }
}
