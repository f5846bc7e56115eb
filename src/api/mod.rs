//! Request/response surface of the locator
//!
//! The service is transport-agnostic: it takes typed requests and returns
//! typed results. [`batch`] adds a JSON command layer on top for the binary.

pub mod batch;
pub mod error;
pub mod formatting;
pub mod service;
pub mod types;

pub use batch::{execute, execute_all, Command};
pub use error::{ApiError, ErrorKind};
pub use formatting::{round_to, Reply};
pub use service::LocatorService;
pub use types::{
    AlienReportRequest, ApiResult, ClosestPairResponse, DistanceRequest, DistanceResponse, NearestRequest,
    NearestResponse, PositionArg, RobotPositionResponse,
};
