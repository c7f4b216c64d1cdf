//! Board-agnostic core logic for the Armilla watch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (touch link, backlight, screen host)
//! - Gesture classification state machine
//! - Screen power and brightness control
//! - Screen navigation ring
//! - Boot configuration type definitions
//!
//! Everything here runs on a single cooperative control thread driven by a
//! fixed-rate tick; no operation blocks and no operation panics.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod gesture;
pub mod nav;
pub mod power;
pub mod time;
pub mod traits;
