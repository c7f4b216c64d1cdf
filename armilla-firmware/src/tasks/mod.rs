//! Embassy task modules

pub mod tick;

pub use tick::tick_task;
