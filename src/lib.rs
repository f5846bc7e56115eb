//! Robot Locator
//!
//! Tracks the 2D positions of a fleet of robots and answers geometric
//! queries about them: pairwise distance, nearest-neighbour ranking,
//! trilateration of third parties from range reports, and the closest pair
//! among all registered robots.

pub mod core;
pub mod algorithms;
pub mod registry;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{Position, RawPosition, RobotId};
pub use crate::algorithms::{closest_pair, distance, nearest_k, trilaterate, Metric, Observation, Trilateration};
pub use crate::registry::{AlienReports, PositionStore, ReportStore, RobotRegistry};
pub use crate::validation::{GeometryError, GeometryResult, InputError};
pub use crate::utils::{init_logging, ConfigError, ConfigurationManager, LogLevel, ServiceConfig};
pub use crate::api::{ApiError, ApiResult, Command, ErrorKind, LocatorService, PositionArg, Reply};
