//! Input validation and error classification

pub mod error;
pub mod input;

pub use error::{GeometryError, GeometryResult};
pub use input::InputError;
