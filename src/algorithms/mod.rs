//! Core geometric algorithms

pub mod coordinates;
pub mod distance;
pub mod nearest;
pub mod trilateration;
pub mod closest_pair;

pub use distance::{distance, Metric, UnknownMetric};
pub use nearest::nearest_k;
pub use trilateration::{trilaterate, Observation, Trilateration};
pub use closest_pair::closest_pair;
