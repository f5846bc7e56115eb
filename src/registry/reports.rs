use super::ReportStore;
use crate::core::RobotId;
use std::collections::HashMap;

/// Range readings for one alien, in the order robots first reported
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityReports {
    entries: Vec<(RobotId, f64)>,
}

impl ProximityReports {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeat report from the same robot overwrites the distance but keeps its slot
    pub fn record(&mut self, robot_id: RobotId, distance: f64) {
        match self.entries.iter_mut().find(|(id, _)| *id == robot_id) {
            Some(entry) => entry.1 = distance,
            None => self.entries.push((robot_id, distance)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RobotId, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Proximity reports for every alien seen so far
#[derive(Debug, Clone, Default)]
pub struct AlienReports {
    by_alien: HashMap<String, ProximityReports>,
}

impl AlienReports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alien_count(&self) -> usize {
        self.by_alien.len()
    }
}

impl ReportStore for AlienReports {
    fn record(&mut self, alien_id: &str, robot_id: RobotId, distance: f64) {
        self.by_alien
            .entry(alien_id.to_string())
            .or_default()
            .record(robot_id, distance);
    }

    fn reports(&self, alien_id: &str) -> Option<&ProximityReports> {
        self.by_alien.get(alien_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let mut reports = ProximityReports::new();
        reports.record(5, 1.0);
        reports.record(2, 2.0);
        reports.record(9, 3.0);
        let ids: Vec<_> = reports.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_repeat_report_updates_in_place() {
        let mut reports = ProximityReports::new();
        reports.record(5, 1.0);
        reports.record(2, 2.0);
        reports.record(5, 7.5);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports.iter().collect::<Vec<_>>(), vec![(5, 7.5), (2, 2.0)]);
    }

    #[test]
    fn test_reports_per_alien() {
        let mut store = AlienReports::new();
        store.record("zorg", 1, 3.0);
        store.record("blip", 1, 4.0);
        store.record("zorg", 2, 5.0);

        assert_eq!(store.alien_count(), 2);
        assert_eq!(store.reports("zorg").map(|r| r.len()), Some(2));
        assert_eq!(store.reports("blip").map(|r| r.len()), Some(1));
        assert!(store.reports("unknown").is_none());
    }
}
