//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in armilla-core for the watch hardware:
//!
//! - Touch sampler (query coalescing, calibration, sanity filtering)
//! - FT6x36 capacitive touch controller link (I2C)
//! - PWM backlight with panel enable
//! - Side button line

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod backlight;
pub mod button;
pub mod touch;
