//! Batch execution of JSON-encoded requests
//!
//! Each request names its operation in an `op` field. Requests run in order
//! against one service, so later requests see earlier registry writes.

use crate::api::formatting::Reply;
use crate::api::service::LocatorService;
use crate::api::types::{AlienReportRequest, DistanceRequest, NearestRequest, RobotPositionResponse};
use crate::core::{RawPosition, RobotId};
use crate::registry::{PositionStore, ReportStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One locator operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    PutPosition { robot_id: RobotId, position: RawPosition },
    GetPosition { robot_id: RobotId },
    Distance(DistanceRequest),
    Nearest(NearestRequest),
    Report { alien_id: String, robot_id: RobotId, distance: f64 },
    AlienPosition { alien_id: String },
    ClosestPair,
}

pub fn execute<P: PositionStore, R: ReportStore>(service: &mut LocatorService<P, R>, command: &Command) -> Reply {
    let outcome = match command {
        Command::PutPosition { robot_id, position } => {
            service.put_robot_position(*robot_id, position).map(|_| Reply::no_content())
        }
        Command::GetPosition { robot_id } => service
            .robot_position(*robot_id)
            .map(|position| Reply::ok(&RobotPositionResponse { position })),
        Command::Distance(request) => service.distance(request).map(|r| Reply::ok(&r)),
        Command::Nearest(request) => service.nearest(request).map(|r| Reply::ok(&r)),
        Command::Report { alien_id, robot_id, distance } => service
            .report_alien(alien_id, &AlienReportRequest { robot_id: *robot_id, distance: *distance })
            .map(|_| Reply { status: 200, body: Value::Null }),
        Command::AlienPosition { alien_id } => service.alien_position(alien_id).map(|p| Reply::ok(&p)),
        Command::ClosestPair => service.closest_pair().map(|r| Reply::ok(&r)),
    };

    outcome.unwrap_or_else(|err| Reply::error(&err))
}

/// Decodes and executes each element of a JSON array.
///
/// An element that does not decode as a [`Command`] yields a 400 reply and
/// does not stop the batch.
pub fn execute_all<P: PositionStore, R: ReportStore>(service: &mut LocatorService<P, R>, requests: &[Value]) -> Vec<Reply> {
    requests
        .iter()
        .map(|request| match Command::deserialize(request) {
            Ok(command) => execute(service, &command),
            Err(e) => Reply::bad_request(e.to_string()),
        })
        .collect()
}
