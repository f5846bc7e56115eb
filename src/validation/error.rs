//! Failure classification for the geometric core
//!
//! Every variant describes an expected outcome of a valid computation over
//! incomplete or contradictory data. None of them indicate a defect.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for geometric computations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Reasons a geometric query cannot produce an answer
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum GeometryError {
    /// Too few observations or points to determine a unique answer
    #[error("insufficient data: {available} available, {required} required")]
    InsufficientData { available: usize, required: usize },

    /// The first two range circles are disjoint or one strictly contains the other
    #[error("range circles do not intersect: centres {separation} apart, radii {r0} and {r1}")]
    NoIntersection { separation: f64, r0: f64, r1: f64 },

    /// Neither intersection candidate agrees with the third range reading
    #[error("observations admit no common point: closest residual {residual} exceeds tolerance {tolerance}")]
    Inconsistent { residual: f64, tolerance: f64 },
}

impl GeometryError {
    pub fn insufficient(available: usize, required: usize) -> Self {
        GeometryError::InsufficientData { available, required }
    }
}
