//! Request-level errors and their status mapping

use crate::core::RobotId;
use crate::validation::{GeometryError, InputError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a locator operation.
///
/// Each variant maps onto one status code through [`ApiError::status_code`]:
/// bad input is 400, a missing robot on a direct lookup is 404, and anything
/// the service could not resolve from registered data is 424.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A referenced robot is not registered
    #[error("robot {id} is not registered")]
    UnknownEntity { id: RobotId },

    /// Direct lookup of a robot that has no position
    #[error("no position recorded for robot {id}")]
    NotFound { id: RobotId },

    #[error("no proximity reports for alien '{alien_id}'")]
    UnknownAlien { alien_id: String },

    #[error("cannot resolve: {0}")]
    Unresolved(#[from] GeometryError),
}

/// Coarse classification of [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    UnknownEntity,
    NotFound,
    InsufficientData,
    NoIntersection,
    Inconsistent,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidInput(_) => ErrorKind::InvalidInput,
            ApiError::UnknownEntity { .. } => ErrorKind::UnknownEntity,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::UnknownAlien { .. } => ErrorKind::InsufficientData,
            ApiError::Unresolved(GeometryError::InsufficientData { .. }) => ErrorKind::InsufficientData,
            ApiError::Unresolved(GeometryError::NoIntersection { .. }) => ErrorKind::NoIntersection,
            ApiError::Unresolved(GeometryError::Inconsistent { .. }) => ErrorKind::Inconsistent,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::UnknownEntity
            | ErrorKind::InsufficientData
            | ErrorKind::NoIntersection
            | ErrorKind::Inconsistent => 424,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::from(InputError::InvalidPosition).status_code(), 400);
        assert_eq!(ApiError::from(InputError::InvalidMetric("x".into())).status_code(), 400);
        assert_eq!(ApiError::NotFound { id: 1 }.status_code(), 404);
        assert_eq!(ApiError::UnknownEntity { id: 1 }.status_code(), 424);
        assert_eq!(ApiError::UnknownAlien { alien_id: "a".into() }.status_code(), 424);
        assert_eq!(ApiError::from(GeometryError::insufficient(1, 2)).status_code(), 424);
    }

    #[test]
    fn test_kinds() {
        let err = ApiError::from(GeometryError::NoIntersection { separation: 5.0, r0: 1.0, r1: 1.0 });
        assert_eq!(err.kind(), ErrorKind::NoIntersection);
        let err = ApiError::from(GeometryError::Inconsistent { residual: 1.0, tolerance: 1e-4 });
        assert_eq!(err.kind(), ErrorKind::Inconsistent);
        assert_eq!(ApiError::UnknownAlien { alien_id: "a".into() }.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn test_display_includes_cause() {
        let err = ApiError::from(InputError::InvalidReference("droid#1".into()));
        assert!(err.to_string().contains("droid#1"));
    }
}
