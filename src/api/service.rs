//! Locator service
//!
//! Resolves boundary input into canonical positions, reads the injected
//! registries and hands snapshots to the geometric core. Every operation is
//! synchronous and either returns a complete result or a single [`ApiError`].

use crate::algorithms::{closest_pair, nearest_k, Observation, Trilateration};
use crate::api::formatting::round_to;
use crate::api::types::{
    AlienReportRequest, ApiResult, ClosestPairResponse, DistanceRequest, DistanceResponse, NearestRequest,
    NearestResponse, PositionArg,
};
use crate::api::error::ApiError;
use crate::core::{Position, RawPosition, RobotId};
use crate::registry::{AlienReports, PositionStore, ReportStore, RobotRegistry};
use crate::utils::config::ServiceConfig;
use crate::validation::input::{
    parse_metric, parse_robot_reference, validate_distance, validate_k, validate_position,
};
use tracing::{debug, info, warn};

/// Robot position tracking and geometric queries over injected registries
#[derive(Debug)]
pub struct LocatorService<P = RobotRegistry, R = AlienReports> {
    robots: P,
    reports: R,
    config: ServiceConfig,
    trilateration: Trilateration,
}

impl LocatorService {
    /// Service backed by empty in-memory registries
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_stores(config, RobotRegistry::new(), AlienReports::new())
    }
}

impl Default for LocatorService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl<P: PositionStore, R: ReportStore> LocatorService<P, R> {
    pub fn with_stores(config: ServiceConfig, robots: P, reports: R) -> Self {
        let trilateration = Trilateration::with_tolerance(config.tolerance);
        Self {
            robots,
            reports,
            config,
            trilateration,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn robots(&self) -> &P {
        &self.robots
    }

    pub fn reports(&self) -> &R {
        &self.reports
    }

    /// Registers or replaces the position of robot `id`
    pub fn put_robot_position(&mut self, id: RobotId, raw: &RawPosition) -> ApiResult<Position> {
        let position = validate_position(raw)?;
        let previous = self.robots.upsert(id, position);
        info!(robot_id = id, x = position.x, y = position.y, replaced = previous.is_some(), "robot position updated");
        Ok(position)
    }

    pub fn robot_position(&self, id: RobotId) -> ApiResult<Position> {
        self.robots.position(id).ok_or(ApiError::NotFound { id })
    }

    /// Turns a literal or `robot#<id>` argument into a canonical position
    pub fn resolve(&self, arg: &PositionArg) -> ApiResult<Position> {
        match arg {
            PositionArg::Literal(raw) => Ok(validate_position(raw)?),
            PositionArg::Reference(reference) => {
                let id = parse_robot_reference(reference)?;
                self.robots.position(id).ok_or(ApiError::UnknownEntity { id })
            }
        }
    }

    /// Pairwise distance, rounded to the configured number of decimals
    pub fn distance(&self, request: &DistanceRequest) -> ApiResult<DistanceResponse> {
        let first = self.resolve(&request.first_pos)?;
        let second = self.resolve(&request.second_pos)?;
        let metric = parse_metric(request.metric.as_deref())?;

        let distance = round_to(metric.distance(&first, &second), self.config.distance_decimals);
        debug!(%metric, distance, "distance computed");
        Ok(DistanceResponse { distance })
    }

    /// Ids of the robots closest to the reference position
    pub fn nearest(&self, request: &NearestRequest) -> ApiResult<NearestResponse> {
        let reference = validate_position(&request.ref_position)?;
        let k = validate_k(request.k.unwrap_or(self.config.default_k))?;

        let robot_ids = nearest_k(&reference, &self.robots.snapshot(), k);
        debug!(k, found = robot_ids.len(), "nearest robots ranked");
        Ok(NearestResponse { robot_ids })
    }

    /// Records a range reading from a robot to an alien.
    ///
    /// The reporting robot does not need to be registered yet; it is looked
    /// up only when the alien's position is requested.
    pub fn report_alien(&mut self, alien_id: &str, request: &AlienReportRequest) -> ApiResult<()> {
        let distance = validate_distance(request.distance)?;
        self.reports.record(alien_id, request.robot_id, distance);
        debug!(alien_id, robot_id = request.robot_id, distance, "proximity report recorded");
        Ok(())
    }

    /// Trilaterates an alien from its earliest proximity reports
    pub fn alien_position(&self, alien_id: &str) -> ApiResult<Position> {
        let reports = self.reports.reports(alien_id).ok_or_else(|| ApiError::UnknownAlien {
            alien_id: alien_id.to_string(),
        })?;

        let observations = reports
            .iter()
            .take(self.config.max_observations)
            .map(|(robot_id, range)| {
                self.robots
                    .position(robot_id)
                    .map(|center| Observation::new(center, range))
                    .ok_or(ApiError::UnknownEntity { id: robot_id })
            })
            .collect::<ApiResult<Vec<_>>>()?;

        match self.trilateration.solve(&observations) {
            Ok(position) => {
                debug!(alien_id, x = position.x, y = position.y, "alien located");
                Ok(position)
            }
            Err(err) => {
                warn!(alien_id, observations = observations.len(), error = %err, "alien position unresolved");
                Err(err.into())
            }
        }
    }

    /// Smallest distance between any two registered robots
    pub fn closest_pair(&self) -> ApiResult<ClosestPairResponse> {
        let positions: Vec<Position> = self.robots.snapshot().into_iter().map(|(_, p)| p).collect();
        let distance = closest_pair(&positions)?;
        debug!(robots = positions.len(), distance, "closest pair found");
        Ok(ClosestPairResponse { distance })
    }
}
