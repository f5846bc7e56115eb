//! Divide-and-conquer closest-pair search
//!
//! Points are sorted by `x` once into an owned buffer; the recursion then
//! works on slices of that buffer, halving at the median index. Each level
//! checks a strip around the split line for pairs that straddle the halves.
//! Runs in O(n log n) with recursion depth O(log n).

use crate::algorithms::distance::euclidean;
use crate::core::Position;
use crate::validation::error::{GeometryError, GeometryResult};

/// Largest slice solved by direct pairwise comparison
pub const BRUTE_FORCE_THRESHOLD: usize = 3;

/// Minimum Euclidean distance between any two of `points`.
pub fn closest_pair(points: &[Position]) -> GeometryResult<f64> {
    if points.len() < 2 {
        return Err(GeometryError::insufficient(points.len(), 2));
    }

    let mut by_x = points.to_vec();
    by_x.sort_unstable_by(|a, b| a.x.total_cmp(&b.x));

    let mut strip = Vec::with_capacity(by_x.len());
    Ok(closest_in(&by_x, &mut strip))
}

/// O(n²) reference search, also used for the recursion's base case
pub fn brute_force(points: &[Position]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(euclidean(a, b));
        }
    }
    best
}

fn closest_in(points: &[Position], strip: &mut Vec<Position>) -> f64 {
    if points.len() <= BRUTE_FORCE_THRESHOLD {
        return brute_force(points);
    }

    let mid = points.len() / 2;
    let split_x = points[mid].x;
    let (left, right) = points.split_at(mid);

    let best = closest_in(left, strip).min(closest_in(right, strip));

    strip.clear();
    strip.extend(points.iter().copied().filter(|p| (p.x - split_x).abs() < best));

    best.min(strip_closest(strip, best))
}

/// Best pair inside the strip, or `best` if none beats it.
///
/// Sorted by `y`, each point only needs comparing with successors whose
/// `y`-gap is still below the current best.
fn strip_closest(strip: &mut [Position], mut best: f64) -> f64 {
    strip.sort_unstable_by(|a, b| a.y.total_cmp(&b.y));

    for (i, a) in strip.iter().enumerate() {
        for b in &strip[i + 1..] {
            if b.y - a.y >= best {
                break;
            }
            best = best.min(euclidean(a, b));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Position> {
        coords.iter().map(|&c| Position::from(c)).collect()
    }

    #[test]
    fn test_three_points() {
        let points = pts(&[(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)]);
        assert_relative_eq!(closest_pair(&points).unwrap(), 1.0);
        assert_relative_eq!(brute_force(&points), 1.0);
    }

    #[test]
    fn test_two_points() {
        let points = pts(&[(1.0, 1.0), (4.0, 5.0)]);
        assert_relative_eq!(closest_pair(&points).unwrap(), 5.0);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(closest_pair(&[]), Err(GeometryError::insufficient(0, 2)));
        assert_eq!(
            closest_pair(&[Position::new(1.0, 1.0)]),
            Err(GeometryError::insufficient(1, 2))
        );
    }

    #[test]
    fn test_duplicate_points() {
        let points = pts(&[(5.0, 5.0), (0.0, 0.0), (9.0, 1.0), (5.0, 5.0), (2.0, 8.0)]);
        assert_eq!(closest_pair(&points).unwrap(), 0.0);
    }

    #[test]
    fn test_pair_straddles_split_line() {
        // the closest pair is (4.9, 0) / (5.1, 0.05), split across halves
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 10.0),
            (2.0, 20.0),
            (4.9, 0.0),
            (5.1, 0.05),
            (8.0, 20.0),
            (9.0, 10.0),
            (10.0, 0.0),
        ]);
        let expected = brute_force(&points);
        assert_relative_eq!(closest_pair(&points).unwrap(), expected);
        assert_relative_eq!(expected, ((5.1f64 - 4.9).powi(2) + 0.05f64.powi(2)).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_pair_far_apart_in_x_but_near_midline() {
        // left-side points sit at x slightly below the split, right-side points
        // far to the right; a naive strip filter would drop the close pair
        let points = pts(&[
            (-100.0, 0.0),
            (-50.0, 50.0),
            (-0.3, 3.0),
            (0.0, 3.2),
            (40.0, 90.0),
            (80.0, -40.0),
        ]);
        assert_relative_eq!(closest_pair(&points).unwrap(), brute_force(&points));
    }

    #[test]
    fn test_order_invariance() {
        let points = pts(&[
            (3.0, 1.0),
            (-2.0, 7.5),
            (0.5, 0.5),
            (9.0, -4.0),
            (1.0, 1.2),
            (-6.0, -6.0),
            (4.4, 4.4),
        ]);
        let forward = closest_pair(&points).unwrap();
        let mut reversed = points.clone();
        reversed.reverse();
        assert_eq!(closest_pair(&reversed).unwrap(), forward);
        let mut rotated = points.clone();
        rotated.rotate_left(3);
        assert_eq!(closest_pair(&rotated).unwrap(), forward);
    }

    #[test]
    fn test_vertical_line() {
        let points: Vec<_> = (0..50).map(|i| Position::new(0.0, (i * i) as f64)).collect();
        assert_relative_eq!(closest_pair(&points).unwrap(), 1.0);
    }
}
