//! Request and response types for the locator operations

use crate::core::{Position, RawPosition, RobotId};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Position argument given either literally or as a `robot#<id>` reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionArg {
    Reference(String),
    Literal(RawPosition),
}

impl From<RawPosition> for PositionArg {
    fn from(raw: RawPosition) -> Self {
        PositionArg::Literal(raw)
    }
}

impl From<Position> for PositionArg {
    fn from(p: Position) -> Self {
        PositionArg::Literal(p.into())
    }
}

impl PositionArg {
    pub fn robot(id: RobotId) -> Self {
        PositionArg::Reference(format!("{}{}", crate::core::ROBOT_REFERENCE_PREFIX, id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub first_pos: PositionArg,
    pub second_pos: PositionArg,
    /// `euclidean` (default) or `manhattan`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotPositionResponse {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestRequest {
    pub ref_position: RawPosition,
    /// Number of robots to return; the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestResponse {
    pub robot_ids: Vec<RobotId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlienReportRequest {
    pub robot_id: RobotId,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPairResponse {
    pub distance: f64,
}
