//! Armilla - Smartwatch Interaction Firmware
//!
//! Main firmware binary for RP2040-based watch boards. Wires the touch
//! controller, side button, and backlight to the core interaction
//! pipeline, then runs it from a single periodic tick task.
//!
//! Named after the armilla, the hinged bracelet of an armillary sphere.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use armilla_core::config::BootConfig;

use crate::hw::{BacklightPwm, ButtonPin, PanelEnable};

mod hw;
mod screens;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Armilla firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Boot configuration comes from the companion's settings blob once
    // the sync link is up; defaults until then
    let config = BootConfig::default();

    // Side button (GPIO16, pulled up, pressed = low)
    let button = ButtonPin(Input::new(p.PIN_16, Pull::Up));

    // Backlight PWM on GPIO24 (slice 4 channel A) plus the panel
    // power-enable rail on GPIO25
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = 0xFFFF;
    pwm_config.compare_a = 0;
    let pwm = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_24, pwm_config.clone());
    let backlight = BacklightPwm::new(pwm, pwm_config);
    let enable = PanelEnable(Output::new(p.PIN_25, Level::Low));

    info!("Backlight PWM initialized");

    // FT6x36 capacitive touch controller on I2C0 (GPIO5 SCL, GPIO4 SDA)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());

    info!("I2C initialized for touch controller");

    spawner
        .spawn(tasks::tick_task(button, backlight, enable, i2c, config))
        .unwrap();

    info!("Firmware running");
}
