//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod screen;
pub mod touch;

pub use display::{BacklightDriver, MAX_BRIGHTNESS};
pub use screen::ScreenHost;
pub use touch::{RawTouch, TouchLink, TouchSource};
