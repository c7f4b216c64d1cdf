//! Touch acquisition
//!
//! [`TouchSampler`] turns raw controller reports into calibrated,
//! screen-space contact samples; [`ft6x36::Ft6x36`] is the bus link for
//! the FocalTech controllers used on the reference hardware.

pub mod ft6x36;
mod sampler;

pub use sampler::{
    AxisCalibration, TouchCalibration, TouchSampler, COALESCE_INTERVAL_MS, MAX_TOUCHES,
    RAW_SANITY_BOUND,
};
