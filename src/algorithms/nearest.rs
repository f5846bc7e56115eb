//! Nearest-k ranking of registered robots

use crate::algorithms::distance::euclidean;
use crate::core::{Position, RobotId};
use std::cmp::Ordering;

/// Returns the ids of the `k` candidates closest to `reference`.
///
/// Ranking is by Euclidean distance, ascending, with ties broken by the
/// lower id. Asking for more than the candidate count returns every id.
pub fn nearest_k(reference: &Position, candidates: &[(RobotId, Position)], k: usize) -> Vec<RobotId> {
    let mut ranked: Vec<(f64, RobotId)> = candidates
        .iter()
        .map(|(id, position)| (euclidean(reference, position), *id))
        .collect();

    let k = k.min(ranked.len());
    if k == 0 {
        return Vec::new();
    }

    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, compare_ranked);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(compare_ranked);

    ranked.into_iter().map(|(_, id)| id).collect()
}

fn compare_ranked(a: &(f64, RobotId), b: &(f64, RobotId)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<(RobotId, Position)> {
        vec![
            (4, Position::new(10.0, 10.0)),
            (1, Position::new(1.0, 0.0)),
            (7, Position::new(-3.0, 0.0)),
            (2, Position::new(0.0, 2.0)),
        ]
    }

    #[test]
    fn test_single_nearest() {
        assert_eq!(nearest_k(&Position::new(0.0, 0.0), &fleet(), 1), vec![1]);
    }

    #[test]
    fn test_k_larger_than_fleet_returns_all_sorted() {
        assert_eq!(nearest_k(&Position::new(0.0, 0.0), &fleet(), 10), vec![1, 2, 7, 4]);
    }

    #[test]
    fn test_partial_selection_is_sorted() {
        assert_eq!(nearest_k(&Position::new(0.0, 0.0), &fleet(), 3), vec![1, 2, 7]);
    }

    #[test]
    fn test_ties_break_by_id() {
        let candidates = vec![
            (9, Position::new(0.0, 1.0)),
            (3, Position::new(1.0, 0.0)),
            (5, Position::new(0.0, -1.0)),
        ];
        assert_eq!(nearest_k(&Position::new(0.0, 0.0), &candidates, 2), vec![3, 5]);
        assert_eq!(nearest_k(&Position::new(0.0, 0.0), &candidates, 3), vec![3, 5, 9]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(nearest_k(&Position::new(0.0, 0.0), &[], 3).is_empty());
    }
}
