//! 2-opt improvement of a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` in the open stop sequence, compute the
//! change in length from reversing the segment `[i..=j]`:
//!
//! ```text
//! delta = d(prev, s[j]) + d(s[i], next) - d(prev, s[i]) - d(s[j], next)
//!       + (reversed interior) - (forward interior)
//! ```
//!
//! The interior term is zero for symmetric matrices and keeps the move exact
//! for road-network costs. Improving moves are applied immediately
//! (first-improvement) until a full pass finds none.
//!
//! # Complexity
//!
//! O(n³) per pass in the worst case.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::CostMatrix;
use crate::models::{Tour, DEPOT};

/// Applies 2-opt to `tour`, returning the improved tour and its length.
///
/// The returned length is never greater than the input tour's length.
///
/// # Examples
///
/// ```
/// use u_aco::distance::CostMatrix;
/// use u_aco::local_search::two_opt_improve;
/// use u_aco::models::Tour;
///
/// // Four points on a line; 0 → 2 → 1 → 3 → 0 doubles back.
/// let mut cm = CostMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let tour = Tour::new(vec![0, 2, 1, 3, 0], 4).unwrap();
/// assert_eq!(tour.length(&cm), 8.0);
/// let (improved, length) = two_opt_improve(&tour, &cm);
/// assert_eq!(length, 6.0);
/// assert_eq!(improved.length(&cm), length);
/// ```
pub fn two_opt_improve(tour: &Tour, cost: &CostMatrix) -> (Tour, f64) {
    let mut stops = tour.stops().to_vec();
    let n = stops.len();
    let mut improved = n >= 2;

    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&stops, cost, i, j) < -1e-10 {
                    stops[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let mut sequence = Vec::with_capacity(n + 2);
    sequence.push(DEPOT);
    sequence.extend_from_slice(&stops);
    sequence.push(DEPOT);
    let candidate = Tour::from_closed(sequence);

    let original_length = tour.length(cost);
    let candidate_length = candidate.length(cost);
    if candidate_length < original_length {
        (candidate, candidate_length)
    } else {
        (tour.clone(), original_length)
    }
}

/// Length change from reversing `stops[i..=j]`, with the depot at both ends.
fn two_opt_delta(stops: &[usize], cost: &CostMatrix, i: usize, j: usize) -> f64 {
    let n = stops.len();
    let prev_i = if i == 0 { DEPOT } else { stops[i - 1] };
    let next_j = if j == n - 1 { DEPOT } else { stops[j + 1] };

    let old_cost = cost.get(prev_i, stops[i]) + cost.get(stops[j], next_j);
    let new_cost = cost.get(prev_i, stops[j]) + cost.get(stops[i], next_j);

    let interior: f64 = stops[i..=j]
        .windows(2)
        .map(|w| cost.get(w[1], w[0]) - cost.get(w[0], w[1]))
        .sum();

    new_cost - old_cost + interior
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    fn line_matrix(n: usize) -> CostMatrix {
        let mut cm = CostMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                cm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        cm
    }

    #[test]
    fn test_2opt_already_optimal() {
        let cm = line_matrix(4);
        let tour = Tour::new(vec![0, 1, 2, 3, 0], 4).expect("valid");
        let (improved, dist) = two_opt_improve(&tour, &cm);
        assert_eq!(improved, tour);
        assert!((dist - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_removes_crossing() {
        let nodes = vec![
            Node::new("school", 0.0, 0.0),
            Node::new("a", 0.01, 0.01),
            Node::new("b", 0.0, 0.02),
            Node::new("c", -0.01, 0.01),
        ];
        let cm = CostMatrix::from_nodes(&nodes).expect("valid");
        // school → a → c → b crosses itself
        let tour = Tour::new(vec![0, 1, 3, 2, 0], 4).expect("valid");
        let (improved, dist) = two_opt_improve(&tour, &cm);
        assert!(dist < tour.length(&cm));
        assert!((improved.length(&cm) - dist).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_two_nodes() {
        let cm = line_matrix(2);
        let tour = Tour::new(vec![0, 1, 0], 2).expect("valid");
        let (improved, dist) = two_opt_improve(&tour, &cm);
        assert_eq!(improved.as_slice(), &[0, 1, 0]);
        assert!((dist - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_asymmetric_never_worse() {
        let cm = CostMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 9.0, 9.0, //
                9.0, 0.0, 1.0, 9.0, //
                9.0, 9.0, 0.0, 1.0, //
                1.0, 9.0, 9.0, 0.0,
            ],
        )
        .expect("valid");
        let tour = Tour::new(vec![0, 1, 2, 3, 0], 4).expect("valid");
        let (improved, dist) = two_opt_improve(&tour, &cm);
        assert_eq!(improved, tour);
        assert!((dist - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_delta_matches_length_change() {
        let cm = CostMatrix::from_data(
            4,
            vec![
                0.0, 2.0, 7.0, 3.0, //
                5.0, 0.0, 1.0, 8.0, //
                4.0, 6.0, 0.0, 2.0, //
                1.0, 9.0, 3.0, 0.0,
            ],
        )
        .expect("valid");
        let stops = vec![1, 2, 3];
        let before = Tour::new(vec![0, 1, 2, 3, 0], 4).expect("valid").length(&cm);
        let after = Tour::new(vec![0, 3, 2, 1, 0], 4).expect("valid").length(&cm);
        assert!((two_opt_delta(&stops, &cm, 0, 2) - (after - before)).abs() < 1e-10);
    }
}
