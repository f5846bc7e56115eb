//! Core data types for the robot locator

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Identifier of a registered robot
pub type RobotId = i64;

/// Canonical 2D position in Cartesian coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Position as received at the boundary, before normalization.
///
/// Either the Cartesian pair `x`/`y` or a compass pair such as
/// `north`/`east` is expected; any other combination is rejected by
/// [`RawPosition::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub north: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub south: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub west: Option<f64>,
}

impl RawPosition {
    pub fn cartesian(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    pub fn with_north(mut self, north: f64) -> Self {
        self.north = Some(north);
        self
    }

    pub fn with_south(mut self, south: f64) -> Self {
        self.south = Some(south);
        self
    }

    pub fn with_east(mut self, east: f64) -> Self {
        self.east = Some(east);
        self
    }

    pub fn with_west(mut self, west: f64) -> Self {
        self.west = Some(west);
        self
    }
}

impl From<Position> for RawPosition {
    fn from(p: Position) -> Self {
        Self::cartesian(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_vector_conversion() {
        let p = Position::new(3.0, -4.5);
        let v = p.to_vector();
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, -4.5);
        assert_eq!(Position::from_vector(v), p);
    }

    #[test]
    fn test_raw_position_deserializes_partial_fields() {
        let raw: RawPosition = serde_json::from_str(r#"{"north": 4, "east": 3}"#).unwrap();
        assert_eq!(raw.north, Some(4.0));
        assert_eq!(raw.east, Some(3.0));
        assert!(raw.x.is_none() && raw.south.is_none());
    }

    #[test]
    fn test_raw_position_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&RawPosition::cartesian(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
    }
}
