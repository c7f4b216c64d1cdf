//! Screen power and brightness control
//!
//! Owns the screen on/off state, the discrete-step brightness fade, the
//! inactivity timeout policy, battery-saver profiles, and the debounced
//! side button. The product rule that matters most here: with the timeout
//! disabled (the default), the screen never turns itself off.

pub mod fade;
mod controller;
mod profiles;

pub use controller::{PowerController, PowerState, BUTTON_DEBOUNCE_MS, DEFAULT_BRIGHTNESS};
pub use profiles::{profile, BatterySaverLevel, BatterySaverProfile, PROFILES};
