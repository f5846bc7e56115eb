//! Three-circle trilateration
//!
//! Locates a target from range readings taken by up to three robots at known
//! positions. The first two range circles are intersected, which gives at
//! most two candidates; the third reading selects between them.
//!
//! Degenerate readings short-circuit the geometry: a zero range means the
//! target sits on that observer, checked in observation order.

use crate::core::{Position, INTERSECTION_EPSILON, MAX_OBSERVATIONS};
use crate::validation::error::{GeometryError, GeometryResult};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// One observer position paired with its reported range to the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub center: Position,
    pub range: f64,
}

impl Observation {
    pub fn new(center: Position, range: f64) -> Self {
        Self { center, range }
    }
}

/// Trilateration engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trilateration {
    /// Per-coordinate tolerance for tangency and range agreement
    pub tolerance: f64,
}

impl Default for Trilateration {
    fn default() -> Self {
        Self {
            tolerance: INTERSECTION_EPSILON,
        }
    }
}

impl Trilateration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Solves for the target position.
    ///
    /// Only the first three observations are considered; any further
    /// readings are ignored.
    pub fn solve(&self, observations: &[Observation]) -> GeometryResult<Position> {
        let used = &observations[..observations.len().min(MAX_OBSERVATIONS)];

        let first = used.first().ok_or(GeometryError::insufficient(0, 2))?;

        // r0 before r1 before r2
        if let Some(colocated) = used.iter().find(|o| o.range == 0.0) {
            return Ok(colocated.center);
        }

        let second = used.get(1).ok_or(GeometryError::insufficient(1, 2))?;
        let (p1, p2) = self.circle_intersections(first, second)?;

        if (p1.x - p2.x).abs() < self.tolerance && (p1.y - p2.y).abs() < self.tolerance {
            return Ok(Position::from_vector(p1));
        }

        let third = used.get(2).ok_or(GeometryError::insufficient(2, 3))?;
        let c2 = third.center.to_vector();
        let residual1 = ((p1 - c2).norm() - third.range).abs();
        let residual2 = ((p2 - c2).norm() - third.range).abs();

        if residual1 < self.tolerance {
            Ok(Position::from_vector(p1))
        } else if residual2 < self.tolerance {
            Ok(Position::from_vector(p2))
        } else {
            Err(GeometryError::Inconsistent {
                residual: residual1.min(residual2),
                tolerance: self.tolerance,
            })
        }
    }

    /// Both intersection points of two range circles.
    ///
    /// Tangent circles yield the same point twice.
    pub fn circle_intersections(
        &self,
        first: &Observation,
        second: &Observation,
    ) -> GeometryResult<(Vector2<f64>, Vector2<f64>)> {
        let (r0, r1) = (first.range, second.range);
        let c0 = first.center.to_vector();
        let offset = second.center.to_vector() - c0;
        let d = offset.norm();

        if d > r0 + r1 || d < (r0 - r1).abs() {
            return Err(GeometryError::NoIntersection { separation: d, r0, r1 });
        }
        // Same centre and same radius: every point of the circle qualifies
        if d == 0.0 {
            return Err(GeometryError::insufficient(1, 2));
        }

        let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        let h = (r0 * r0 - a * a).max(0.0).sqrt();

        let unit = offset / d;
        let chord_mid = c0 + unit * a;
        let normal = Vector2::new(-unit.y, unit.x) * h;

        Ok((chord_mid + normal, chord_mid - normal))
    }
}

/// Solves with the default tolerance
pub fn trilaterate(observations: &[Observation]) -> GeometryResult<Position> {
    Trilateration::default().solve(observations)
}
