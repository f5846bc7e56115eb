//! Geometry tolerances and service defaults

/// Per-coordinate tolerance used when comparing trilateration candidates
pub const INTERSECTION_EPSILON: f64 = 1e-4;

/// Decimal digits kept in reported pairwise distances
pub const DISTANCE_DECIMALS: u32 = 3;

/// Number of neighbours returned by a nearest query without an explicit `k`
pub const DEFAULT_NEAREST_K: usize = 1;

/// Observations consumed by a single trilateration solve
pub const MAX_OBSERVATIONS: usize = 3;

/// Prefix of a registered-robot reference such as `robot#7`
pub const ROBOT_REFERENCE_PREFIX: &str = "robot#";
