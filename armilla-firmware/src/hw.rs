//! RP2040 pin and peripheral adapters
//!
//! Thin newtypes binding embassy-rp peripherals to the driver traits.

use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use armilla_drivers::backlight::{EnablePin, PwmChannel};
use armilla_drivers::button::InputLine;

/// PWM slice output driving the backlight LED rail.
pub struct BacklightPwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl BacklightPwm {
    pub fn new(pwm: Pwm<'static>, config: PwmConfig) -> Self {
        Self { pwm, config }
    }
}

impl PwmChannel for BacklightPwm {
    fn set_duty(&mut self, duty: u16) {
        self.config.compare_a = duty;
        self.pwm.set_config(&self.config);
    }

    fn max_duty(&self) -> u16 {
        self.config.top
    }
}

/// Panel power-enable line.
pub struct PanelEnable(pub Output<'static>);

impl EnablePin for PanelEnable {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Side button input line.
pub struct ButtonPin(pub Input<'static>);

impl InputLine for ButtonPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
