//! Power controller
//!
//! All paths that turn the screen on or off - button, timeout, explicit
//! requests - route through the same `sleep()`/`wake()` pair. Sleeping is
//! display-only suspension: the tick loop and every controller keep
//! running, only the panel goes dark.

use super::fade::{step_interval_ms, step_toward, FADE_DURATION_MS, FADE_STEP};
use super::profiles::{profile, BatterySaverLevel};
use crate::config::BootConfig;
use crate::time::elapsed_ms;
use crate::traits::{BacklightDriver, MAX_BRIGHTNESS};

/// Dead time after an accepted button edge (ms)
pub const BUTTON_DEBOUNCE_MS: u32 = 200;
/// Brightness used when no persisted configuration is available
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Screen power state. Created once at boot, mutated exclusively by
/// [`PowerController`], never destroyed during device uptime.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    /// Whether the screen is logically on
    pub screen_on: bool,
    /// Brightness currently applied to the panel
    pub current_brightness: u8,
    /// Brightness the fade is moving toward
    pub target_brightness: u8,
    /// A fade is running
    pub fade_in_progress: bool,
    /// Timestamp of the last user activity
    pub last_activity_ms: u32,
    /// Whether the inactivity timeout may turn the screen off
    pub timeout_enabled: bool,
    /// Inactivity timeout (ms)
    pub timeout_ms: u32,
    /// Active battery saver level
    pub battery_saver: BatterySaverLevel,
}

/// Screen power controller
///
/// Owns the backlight hardware and the [`PowerState`]. Driven once per
/// tick with the button level plus `step_fade`/`handle_timeout` calls.
pub struct PowerController<B> {
    backlight: B,
    state: PowerState,
    /// Button level seen on the previous tick (idle high)
    last_button_level: bool,
    /// Timestamp of the last accepted button edge
    last_edge_ms: u32,
    /// Timestamp of the last applied fade step
    last_fade_step_ms: u32,
}

impl<B: BacklightDriver> PowerController<B> {
    /// Create the controller and bring the screen up at the configured
    /// boot brightness.
    pub fn new(mut backlight: B, config: &BootConfig, now_ms: u32) -> Self {
        let battery_saver = BatterySaverLevel::from_index(config.battery_saver);
        let brightness = config.brightness.min(profile(battery_saver).brightness_cap);

        backlight.display_on();
        backlight.set_brightness(brightness);

        Self {
            backlight,
            state: PowerState {
                screen_on: true,
                current_brightness: brightness,
                target_brightness: brightness,
                fade_in_progress: false,
                last_activity_ms: now_ms,
                timeout_enabled: config.timeout_enabled,
                timeout_ms: config.timeout_ms,
                battery_saver,
            },
            last_button_level: true,
            // Let the very first press qualify
            last_edge_ms: now_ms.wrapping_sub(BUTTON_DEBOUNCE_MS),
            last_fade_step_ms: now_ms,
        }
    }

    /// Current power state
    pub fn state(&self) -> &PowerState {
        &self.state
    }

    /// Access to the underlying backlight hardware
    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Poll the side button level (idle high, pressed low).
    ///
    /// A high-to-low edge toggles the screen; edges inside the debounce
    /// window are absorbed without effect.
    pub fn on_button_level(&mut self, level: bool, now_ms: u32) {
        let was = self.last_button_level;
        self.last_button_level = level;

        if !(was && !level) {
            return;
        }
        if elapsed_ms(now_ms, self.last_edge_ms) < BUTTON_DEBOUNCE_MS {
            return;
        }

        self.last_edge_ms = now_ms;
        self.toggle_screen(now_ms);
        self.reset_activity(now_ms);
    }

    /// Sleep if the screen is on, wake otherwise
    pub fn toggle_screen(&mut self, now_ms: u32) {
        if self.state.screen_on {
            self.sleep();
        } else {
            self.wake(now_ms);
        }
    }

    /// Begin fading the screen out. No-op if already off.
    pub fn sleep(&mut self) {
        if !self.state.screen_on {
            return;
        }

        self.state.target_brightness = 0;
        self.state.fade_in_progress = true;

        // Immediate dim so the press feels acknowledged before the fade
        let dim = self.state.current_brightness / 2;
        self.state.current_brightness = dim;
        self.backlight.set_brightness(dim);

        self.state.screen_on = false;
    }

    /// Power the panel and begin fading the screen in. No-op if already on.
    pub fn wake(&mut self, now_ms: u32) {
        if self.state.screen_on {
            return;
        }

        self.backlight.display_on();

        let cap = profile(self.state.battery_saver).brightness_cap;
        self.state.target_brightness = cap;

        // Jump to half target immediately, fade covers the rest
        let half = cap / 2;
        self.state.current_brightness = half;
        self.backlight.set_brightness(half);

        self.state.fade_in_progress = true;
        self.state.screen_on = true;
        self.reset_activity(now_ms);
    }

    /// Advance a running fade by at most one step. Called every tick;
    /// rate-limited internally to the fade cadence.
    pub fn step_fade(&mut self, now_ms: u32) {
        if !self.state.fade_in_progress {
            return;
        }
        let interval = step_interval_ms(FADE_DURATION_MS, MAX_BRIGHTNESS, FADE_STEP);
        if elapsed_ms(now_ms, self.last_fade_step_ms) < interval {
            return;
        }
        self.last_fade_step_ms = now_ms;

        let next = step_toward(
            self.state.current_brightness,
            self.state.target_brightness,
            FADE_STEP,
        );
        self.state.current_brightness = next;
        self.backlight.set_brightness(next);

        if next == self.state.target_brightness {
            self.state.fade_in_progress = false;
            if next == 0 {
                self.backlight.display_off();
            }
        }
    }

    /// Sleep after sustained inactivity.
    ///
    /// Guaranteed no-op while the timeout policy is disabled, which is the
    /// default: the product requires that the screen never times out on
    /// its own unless the user opted in.
    pub fn handle_timeout(&mut self, now_ms: u32) {
        if !self.state.timeout_enabled {
            return;
        }
        if self.state.screen_on
            && elapsed_ms(now_ms, self.state.last_activity_ms) >= self.state.timeout_ms
        {
            self.sleep();
        }
    }

    /// Switch battery saver profiles.
    ///
    /// Re-targets the fade to the new brightness cap if the screen is on.
    /// The timeout policy is orthogonal and deliberately untouched here.
    pub fn apply_battery_saver(&mut self, level: BatterySaverLevel) {
        self.state.battery_saver = level;

        if self.state.screen_on {
            self.state.target_brightness = profile(level).brightness_cap;
            self.state.fade_in_progress = true;
        }
    }

    /// Refresh the inactivity clock. Called for every accepted gesture and
    /// button press.
    pub fn reset_activity(&mut self, now_ms: u32) {
        self.state.last_activity_ms = now_ms;
    }
}
