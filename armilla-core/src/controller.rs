//! Top-level controller
//!
//! Owns the four state aggregates (contact tracking, power, navigation,
//! crown counter) through their components and runs the fixed intra-tick
//! order: sample, classify, power update, navigation dispatch. A gesture
//! produced this tick is consumed by navigation in the same tick, so there
//! is no staleness between classification and dispatch.

use crate::config::BootConfig;
use crate::gesture::{GestureClassifier, GestureEvent};
use crate::nav::{NavigationController, ScreenId};
use crate::power::{BatterySaverLevel, PowerController};
use crate::traits::{BacklightDriver, ScreenHost, TouchSource};

/// Central controller owning every subsystem.
///
/// Constructed once at boot from persisted configuration; lives for the
/// process's entire uptime. Single-threaded: every aggregate has exactly
/// one owner and no locking exists anywhere.
pub struct Controller<T, B, H>
where
    T: TouchSource,
    B: BacklightDriver,
    H: ScreenHost,
{
    touch: T,
    classifier: GestureClassifier,
    power: PowerController<B>,
    nav: NavigationController<H>,
}

impl<T, B, H> Controller<T, B, H>
where
    T: TouchSource,
    B: BacklightDriver,
    H: ScreenHost,
{
    /// Build the controller from boot configuration
    pub fn new(touch: T, backlight: B, host: H, config: &BootConfig, now_ms: u32) -> Self {
        Self {
            touch,
            classifier: GestureClassifier::new(),
            power: PowerController::new(backlight, config, now_ms),
            nav: NavigationController::new(host, now_ms),
        }
    }

    /// One control tick.
    ///
    /// `button_level` is the side button line polled this tick (idle
    /// high). Returns the gesture classified this tick, for callers that
    /// want to observe the event stream.
    pub fn tick(&mut self, button_level: bool, now_ms: u32) -> GestureEvent {
        // 1. Sample and classify
        let sample = self.touch.sample(now_ms);
        let gesture = self.classifier.update(sample, now_ms);

        // 2. Power update: button edge, activity pulse, timeout, fade
        self.power.on_button_level(button_level, now_ms);
        if gesture.is_activity() {
            self.power.reset_activity(now_ms);
        }
        self.power.handle_timeout(now_ms);
        self.power.step_fade(now_ms);

        // 3. Navigation dispatch
        self.nav.handle(&gesture, now_ms);

        gesture
    }

    /// Accumulated crown counter
    pub fn crown_steps(&self) -> i32 {
        self.classifier.crown_steps()
    }

    /// Clear the crown counter
    pub fn reset_crown(&mut self) {
        self.classifier.reset_crown();
    }

    /// Switch battery saver profiles
    pub fn apply_battery_saver(&mut self, level: BatterySaverLevel) {
        self.power.apply_battery_saver(level);
    }

    /// Explicit application request to present a screen
    pub fn present(&mut self, screen: ScreenId, now_ms: u32) -> bool {
        self.nav.present(screen, now_ms)
    }

    /// Power subsystem
    pub fn power(&self) -> &PowerController<B> {
        &self.power
    }

    /// Navigation subsystem
    pub fn nav(&self) -> &NavigationController<H> {
        &self.nav
    }
}
