use robot_locator::api::{DistanceRequest, NearestRequest};
use robot_locator::{
    AlienReports, ApiError, ErrorKind, LocatorService, Position, PositionArg, PositionStore, RawPosition, RobotId,
    ServiceConfig,
};
use std::collections::HashMap;

/// Store that records how often it was asked for a full snapshot
#[derive(Default)]
struct CountingStore {
    positions: HashMap<RobotId, Position>,
    snapshots: std::cell::Cell<usize>,
}

impl PositionStore for CountingStore {
    fn position(&self, id: RobotId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    fn upsert(&mut self, id: RobotId, position: Position) -> Option<Position> {
        self.positions.insert(id, position)
    }

    fn snapshot(&self) -> Vec<(RobotId, Position)> {
        self.snapshots.set(self.snapshots.get() + 1);
        let mut all: Vec<_> = self.positions.iter().map(|(id, p)| (*id, *p)).collect();
        all.sort_by_key(|(id, _)| *id);
        all
    }

    fn len(&self) -> usize {
        self.positions.len()
    }
}

#[test]
fn injected_store_backs_every_query() {
    let mut store = CountingStore::default();
    store.upsert(10, Position::new(0.0, 0.0));
    store.upsert(20, Position::new(0.0, 1.0));
    store.upsert(30, Position::new(3.0, 4.0));

    let service = LocatorService::with_stores(ServiceConfig::default(), store, AlienReports::new());

    let nearest = service
        .nearest(&NearestRequest { ref_position: RawPosition::cartesian(2.9, 3.9), k: Some(2) })
        .unwrap();
    assert_eq!(nearest.robot_ids, vec![30, 20]);

    assert_eq!(service.closest_pair().unwrap().distance, 1.0);
    assert_eq!(service.robots().snapshots.get(), 2);
}

#[test]
fn compass_and_reference_arguments_mix() {
    let mut service = LocatorService::new(ServiceConfig::default());
    service
        .put_robot_position(1, &RawPosition::default().with_south(4.0).with_west(3.0))
        .unwrap();

    let request = DistanceRequest {
        first_pos: PositionArg::robot(1),
        second_pos: PositionArg::Literal(RawPosition::default().with_north(0.0).with_east(0.0)),
        metric: Some("manhattan".to_string()),
    };
    assert_eq!(service.distance(&request).unwrap().distance, 7.0);
}

#[test]
fn overwriting_a_robot_moves_it() {
    let mut service = LocatorService::new(ServiceConfig::default());
    service.put_robot_position(1, &RawPosition::cartesian(0.0, 0.0)).unwrap();
    service.put_robot_position(2, &RawPosition::cartesian(10.0, 0.0)).unwrap();
    assert_eq!(service.closest_pair().unwrap().distance, 10.0);

    service.put_robot_position(2, &RawPosition::default().with_north(2.0).with_east(0.0)).unwrap();
    assert_eq!(service.closest_pair().unwrap().distance, 2.0);
    assert_eq!(service.robot_position(2).unwrap(), Position::new(0.0, 2.0));
}

#[test]
fn error_taxonomy_surfaces_through_service() {
    let service = LocatorService::new(ServiceConfig::default());

    let err = service.closest_pair().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientData);
    assert_eq!(err.status_code(), 424);

    let err = service
        .distance(&DistanceRequest {
            first_pos: PositionArg::robot(1),
            second_pos: PositionArg::robot(2),
            metric: None,
        })
        .unwrap_err();
    assert_eq!(err, ApiError::UnknownEntity { id: 1 });
}
