//! Display backlight and panel power trait

/// Full-scale brightness value
pub const MAX_BRIGHTNESS: u8 = 255;

/// Trait for the display brightness/power hardware
///
/// The display content pipeline is out of scope for this core; the only
/// thing the power controller touches is the backlight level and the panel
/// power rail. All three operations are infallible: a write to a dead
/// panel is simply lost.
pub trait BacklightDriver {
    /// Apply a brightness level (0 = dark, 255 = full)
    fn set_brightness(&mut self, level: u8);

    /// Power the display panel on
    fn display_on(&mut self);

    /// Power the display panel off
    fn display_off(&mut self);
}
