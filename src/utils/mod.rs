//! Utility functions

pub mod time;

pub use time::{format_clock, format_milliseconds};
