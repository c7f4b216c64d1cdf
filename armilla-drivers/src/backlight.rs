//! PWM backlight driver
//!
//! Drives display brightness through a PWM channel and the panel power
//! rail through a GPIO enable pin. Brightness 0-255 is rescaled onto
//! whatever duty range the PWM peripheral has.

use armilla_core::traits::{BacklightDriver, MAX_BRIGHTNESS};

/// Trait for a PWM channel abstraction
pub trait PwmChannel {
    /// Set the output duty
    fn set_duty(&mut self, duty: u16);

    /// Duty value for a permanently-high output
    fn max_duty(&self) -> u16;
}

/// Trait for the panel enable pin
pub trait EnablePin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);
}

/// PWM backlight with a panel enable rail
///
/// The enable pin can be active-high (default) or active-low depending on
/// how the panel's power switch is wired.
pub struct PwmBacklight<P, E> {
    pwm: P,
    enable: E,
    /// If true, panel ON = pin LOW
    inverted: bool,
}

impl<P: PwmChannel, E: EnablePin> PwmBacklight<P, E> {
    /// Create a backlight with an active-high enable rail
    pub fn new(pwm: P, enable: E) -> Self {
        Self {
            pwm,
            enable,
            inverted: false,
        }
    }

    /// Create a backlight with an active-low enable rail
    pub fn new_active_low(pwm: P, enable: E) -> Self {
        Self {
            pwm,
            enable,
            inverted: true,
        }
    }
}

impl<P: PwmChannel, E: EnablePin> BacklightDriver for PwmBacklight<P, E> {
    fn set_brightness(&mut self, level: u8) {
        let duty =
            level as u32 * self.pwm.max_duty() as u32 / MAX_BRIGHTNESS as u32;
        self.pwm.set_duty(duty as u16);
    }

    fn display_on(&mut self) {
        if self.inverted {
            self.enable.set_low();
        } else {
            self.enable.set_high();
        }
    }

    fn display_off(&mut self) {
        self.pwm.set_duty(0);
        if self.inverted {
            self.enable.set_high();
        } else {
            self.enable.set_low();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm {
        duty: u16,
    }

    impl PwmChannel for MockPwm {
        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }

        fn max_duty(&self) -> u16 {
            1000
        }
    }

    struct MockPin {
        high: bool,
    }

    impl EnablePin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn test_brightness_rescales_to_duty_range() {
        let mut bl = PwmBacklight::new(MockPwm { duty: 0 }, MockPin { high: false });

        bl.set_brightness(255);
        assert_eq!(bl.pwm.duty, 1000);

        bl.set_brightness(0);
        assert_eq!(bl.pwm.duty, 0);

        bl.set_brightness(128);
        assert_eq!(bl.pwm.duty, 501);
    }

    #[test]
    fn test_display_power_drives_enable_pin() {
        let mut bl = PwmBacklight::new(MockPwm { duty: 0 }, MockPin { high: false });

        bl.display_on();
        assert!(bl.enable.high);

        bl.set_brightness(100);
        bl.display_off();
        assert!(!bl.enable.high);
        // Panel off also forces the PWM dark
        assert_eq!(bl.pwm.duty, 0);
    }

    #[test]
    fn test_active_low_enable() {
        let mut bl = PwmBacklight::new_active_low(MockPwm { duty: 0 }, MockPin { high: true });

        bl.display_on();
        assert!(!bl.enable.high);

        bl.display_off();
        assert!(bl.enable.high);
    }
}
