//! In-memory registries for robot positions and alien proximity reports
//!
//! The service reads and writes these through the [`PositionStore`] and
//! [`ReportStore`] traits so callers can inject their own storage.

pub mod robots;
pub mod reports;

pub use robots::RobotRegistry;
pub use reports::{AlienReports, ProximityReports};

use crate::core::{Position, RobotId};

/// Key-value store of robot positions
pub trait PositionStore {
    /// Current position of `id`, if registered
    fn position(&self, id: RobotId) -> Option<Position>;

    /// Replaces the whole entry for `id`, returning the previous position
    fn upsert(&mut self, id: RobotId, position: Position) -> Option<Position>;

    /// Every registered robot, ordered by id
    fn snapshot(&self) -> Vec<(RobotId, Position)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Store of proximity reports keyed by alien id
pub trait ReportStore {
    /// Records a range reading, updating an earlier one from the same robot in place
    fn record(&mut self, alien_id: &str, robot_id: RobotId, distance: f64);

    /// Reports received for `alien_id`, in first-report order
    fn reports(&self, alien_id: &str) -> Option<&ProximityReports>;
}
