//! Boundary checks applied before requests reach the geometric core

use crate::algorithms::distance::{Metric, UnknownMetric};
use crate::core::{Position, RawPosition, RobotId, ROBOT_REFERENCE_PREFIX};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed or ambiguous request input
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum InputError {
    #[error("position matches neither {{x, y}} nor {{north|south, east|west}}")]
    InvalidPosition,

    #[error("invalid robot reference '{0}', expected 'robot#<id>'")]
    InvalidReference(String),

    #[error("unknown metric '{0}', expected 'euclidean' or 'manhattan'")]
    InvalidMetric(String),

    #[error("k must be at least 1")]
    InvalidK,

    #[error("distance reading {0} must be finite and non-negative")]
    InvalidDistance(f64),
}

impl From<UnknownMetric> for InputError {
    fn from(err: UnknownMetric) -> Self {
        InputError::InvalidMetric(err.0)
    }
}

/// Normalizes `raw`, rejecting unknown shapes and non-finite coordinates
pub fn validate_position(raw: &RawPosition) -> Result<Position, InputError> {
    raw.into_position()
        .filter(Position::is_finite)
        .ok_or(InputError::InvalidPosition)
}

/// Parses `robot#<id>` into the referenced id
pub fn parse_robot_reference(reference: &str) -> Result<RobotId, InputError> {
    reference
        .strip_prefix(ROBOT_REFERENCE_PREFIX)
        .and_then(|id| id.trim().parse::<RobotId>().ok())
        .ok_or_else(|| InputError::InvalidReference(reference.to_string()))
}

/// Absent metric means Euclidean
pub fn parse_metric(name: Option<&str>) -> Result<Metric, InputError> {
    match name {
        None => Ok(Metric::default()),
        Some(name) => Ok(name.parse::<Metric>()?),
    }
}

pub fn validate_k(k: usize) -> Result<usize, InputError> {
    if k == 0 {
        Err(InputError::InvalidK)
    } else {
        Ok(k)
    }
}

pub fn validate_distance(distance: f64) -> Result<f64, InputError> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(distance)
    } else {
        Err(InputError::InvalidDistance(distance))
    }
}
