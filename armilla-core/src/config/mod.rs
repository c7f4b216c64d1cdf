//! Boot configuration
//!
//! Loaded once at boot from the external settings store as a
//! postcard-serialized blob and never reloaded. Load failure of any kind -
//! missing blob, parse error, wrong magic or version - falls back silently
//! to the documented defaults; configuration is never fatal.

use serde::{Deserialize, Serialize};

/// Magic number identifying a valid config blob
pub const CONFIG_MAGIC: u32 = 0x41524D43; // "ARMC"

/// Current config blob version
pub const CONFIG_VERSION: u8 = 1;

/// Persisted boot configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootConfig {
    /// Blob identification magic
    pub magic: u32,
    /// Blob format version
    pub version: u8,
    /// Whether the inactivity timeout may turn the screen off
    pub timeout_enabled: bool,
    /// Inactivity timeout (ms)
    pub timeout_ms: u32,
    /// Boot brightness
    pub brightness: u8,
    /// Battery saver level index (clamped on use)
    pub battery_saver: u8,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            // Product default: the screen never times out on its own
            timeout_enabled: false,
            timeout_ms: 30_000,
            brightness: 200,
            battery_saver: 0,
        }
    }
}

impl BootConfig {
    /// Deserialize a config blob, falling back to defaults on any failure
    pub fn load(bytes: &[u8]) -> Self {
        match postcard::from_bytes::<BootConfig>(bytes) {
            Ok(config) if config.magic == CONFIG_MAGIC && config.version == CONFIG_VERSION => {
                config
            }
            _ => BootConfig::default(),
        }
    }

    /// Serialize into a caller-provided buffer, returning the used slice
    pub fn save<'a>(&self, buf: &'a mut [u8]) -> Option<&'a [u8]> {
        postcard::to_slice(self, buf).ok().map(|s| &*s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootConfig::default();
        assert!(!config.timeout_enabled);
        assert_eq!(config.brightness, 200);
        assert_eq!(config.battery_saver, 0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let config = BootConfig {
            timeout_enabled: true,
            timeout_ms: 15_000,
            brightness: 120,
            battery_saver: 2,
            ..BootConfig::default()
        };

        let mut buf = [0u8; 32];
        let blob = config.save(&mut buf).unwrap();
        let loaded = BootConfig::load(blob);

        assert!(loaded.timeout_enabled);
        assert_eq!(loaded.timeout_ms, 15_000);
        assert_eq!(loaded.brightness, 120);
        assert_eq!(loaded.battery_saver, 2);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let loaded = BootConfig::load(&[0xFF, 0x13, 0x37]);
        assert!(!loaded.timeout_enabled);
        assert_eq!(loaded.brightness, 200);
    }

    #[test]
    fn test_empty_falls_back_to_defaults() {
        let loaded = BootConfig::load(&[]);
        assert_eq!(loaded.brightness, 200);
    }

    #[test]
    fn test_wrong_magic_falls_back() {
        let mut config = BootConfig::default();
        config.magic = 0xDEAD_BEEF;
        config.brightness = 42;

        let mut buf = [0u8; 32];
        let blob = config.save(&mut buf).unwrap();
        assert_eq!(BootConfig::load(blob).brightness, 200);
    }
}
