//! Tick task for the interaction pipeline
//!
//! Single cooperative loop that polls the touch controller and side
//! button, then feeds the core controller:
//! - Touch sampling and gesture classification
//! - Screen power and brightness fades
//! - Ring navigation

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Instant, Ticker};

use armilla_core::config::BootConfig;
use armilla_core::controller::Controller;
use armilla_drivers::backlight::PwmBacklight;
use armilla_drivers::button::SideButton;
use armilla_drivers::touch::ft6x36::Ft6x36;
use armilla_drivers::touch::{TouchCalibration, TouchSampler};

use crate::hw::{BacklightPwm, ButtonPin, PanelEnable};
use crate::screens::LogScreenHost;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 10;

/// Tick task - drives the whole interaction pipeline at a fixed cadence
#[embassy_executor::task]
pub async fn tick_task(
    button: ButtonPin,
    pwm: BacklightPwm,
    enable: PanelEnable,
    i2c: I2c<'static, I2C0, Blocking>,
    config: BootConfig,
) {
    info!("Tick task started");

    let mut link = Ft6x36::new(i2c);
    if !link.presence_check() {
        warn!("Touch controller not responding on I2C0");
    }
    let sampler = TouchSampler::new(link, TouchCalibration::default());

    let backlight = PwmBacklight::new(pwm, enable);
    let button = SideButton::new_active_low(button);

    let start = Instant::now();
    let mut controller = Controller::new(sampler, backlight, LogScreenHost, &config, 0);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    loop {
        ticker.next().await;

        // Milliseconds since boot; wraps after ~49.7 days, which the
        // core timebase tolerates
        let now_ms = start.elapsed().as_millis() as u32;

        let gesture = controller.tick(button.level(), now_ms);
        if gesture.is_activity() {
            trace!("Gesture: {:?}", gesture);
        }
    }
}
