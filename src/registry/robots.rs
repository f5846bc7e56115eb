use super::PositionStore;
use crate::core::{Position, RobotId};
use std::collections::BTreeMap;

/// Robot positions indexed by id
#[derive(Debug, Clone, Default)]
pub struct RobotRegistry {
    positions: BTreeMap<RobotId, Position>,
}

impl RobotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RobotId, Position)> + '_ {
        self.positions.iter().map(|(id, p)| (*id, *p))
    }
}

impl PositionStore for RobotRegistry {
    fn position(&self, id: RobotId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    fn upsert(&mut self, id: RobotId, position: Position) -> Option<Position> {
        self.positions.insert(id, position)
    }

    fn snapshot(&self) -> Vec<(RobotId, Position)> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.positions.len()
    }
}

impl FromIterator<(RobotId, Position)> for RobotRegistry {
    fn from_iter<I: IntoIterator<Item = (RobotId, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
