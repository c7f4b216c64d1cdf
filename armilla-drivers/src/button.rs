//! Side button line
//!
//! The power controller's edge detector expects an idle-high line that
//! goes low while pressed. This wrapper normalizes whichever polarity the
//! board wires the button with.

/// Trait for reading a digital input level
pub trait InputLine {
    /// Current electrical level
    fn is_high(&self) -> bool;
}

/// Polarity-normalized side button
pub struct SideButton<P> {
    pin: P,
    /// True if the wired button pulls the line low while pressed
    active_low: bool,
}

impl<P: InputLine> SideButton<P> {
    /// Button wired active-low (pull-up, pressed = low). The common case.
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Button wired active-high (pull-down, pressed = high)
    pub fn new_active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// The normalized line level: high while idle, low while pressed
    pub fn level(&self) -> bool {
        if self.active_low {
            self.pin.is_high()
        } else {
            !self.pin.is_high()
        }
    }

    /// Whether the button is currently held
    pub fn is_pressed(&self) -> bool {
        !self.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl InputLine for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_low_passthrough() {
        let idle = SideButton::new_active_low(MockPin { high: true });
        assert!(idle.level());
        assert!(!idle.is_pressed());

        let pressed = SideButton::new_active_low(MockPin { high: false });
        assert!(!pressed.level());
        assert!(pressed.is_pressed());
    }

    #[test]
    fn test_active_high_inverts() {
        let pressed = SideButton::new_active_high(MockPin { high: true });
        assert!(!pressed.level());
        assert!(pressed.is_pressed());

        let idle = SideButton::new_active_high(MockPin { high: false });
        assert!(idle.level());
    }
}
