//! Scalar distance between canonical positions

use crate::core::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Distance metric selectable for pairwise queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
}

/// Metric name that is neither `euclidean` nor `manhattan`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{0}', expected 'euclidean' or 'manhattan'")]
pub struct UnknownMetric(pub String);

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
        }
    }

    /// Distance between `a` and `b` under this metric.
    ///
    /// NaN and infinite coordinates propagate per IEEE-754.
    pub fn distance(&self, a: &Position, b: &Position) -> f64 {
        let delta = a.to_vector() - b.to_vector();
        match self {
            Metric::Euclidean => delta.norm(),
            Metric::Manhattan => delta.x.abs() + delta.y.abs(),
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn distance(a: &Position, b: &Position, metric: Metric) -> f64 {
    metric.distance(a, b)
}

/// Euclidean distance, the metric used by ranking and closest-pair search
#[inline]
pub fn euclidean(a: &Position, b: &Position) -> f64 {
    Metric::Euclidean.distance(a, b)
}
