//! Core types and constants for the robot locator

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
