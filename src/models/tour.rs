//! Depot-closed tours.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::{AcoError, AcoResult};

use super::Node;

/// Index of the depot in every node ordering.
pub const DEPOT: usize = 0;

/// A closed tour: starts and ends at the depot and visits every other node
/// exactly once.
///
/// For `n` nodes the sequence has `n + 1` entries.
///
/// # Examples
///
/// ```
/// use u_aco::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3, 0], 4).unwrap();
/// assert_eq!(tour.stops(), &[2, 1, 3]);
/// assert_eq!(tour.len(), 5);
/// assert!(Tour::new(vec![0, 1, 1, 0], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Validates a caller-supplied sequence for a problem of `num_nodes` nodes.
    pub fn new(sequence: Vec<usize>, num_nodes: usize) -> AcoResult<Self> {
        if num_nodes < 2 {
            return Err(AcoError::InsufficientNodes { found: num_nodes });
        }
        if sequence.len() != num_nodes + 1 {
            return Err(AcoError::InvalidTour(format!(
                "expected {} entries, found {}",
                num_nodes + 1,
                sequence.len()
            )));
        }
        if sequence[0] != DEPOT || sequence[num_nodes] != DEPOT {
            return Err(AcoError::InvalidTour(
                "tour must start and end at the depot".to_string(),
            ));
        }
        let mut seen = vec![false; num_nodes];
        for &idx in &sequence[..num_nodes] {
            if idx >= num_nodes {
                return Err(AcoError::InvalidTour(format!("node {idx} out of range")));
            }
            if seen[idx] {
                return Err(AcoError::InvalidTour(format!("node {idx} visited twice")));
            }
            seen[idx] = true;
        }
        Ok(Self { sequence })
    }

    /// Builds a tour from a sequence already known to be valid.
    pub(crate) fn from_closed(sequence: Vec<usize>) -> Self {
        debug_assert!(sequence.len() >= 3);
        debug_assert_eq!(sequence.first(), Some(&DEPOT));
        debug_assert_eq!(sequence.last(), Some(&DEPOT));
        Self { sequence }
    }

    /// Full closed sequence, depot at both ends.
    pub fn as_slice(&self) -> &[usize] {
        &self.sequence
    }

    /// Visited pickups in order, without the depot.
    pub fn stops(&self) -> &[usize] {
        &self.sequence[1..self.sequence.len() - 1]
    }

    /// Number of entries in the closed sequence (nodes + 1).
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false`; a tour has at least three entries.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Consecutive `(from, to)` edges, including the closing edge to the depot.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of consecutive-edge costs.
    pub fn length(&self, cost: &CostMatrix) -> f64 {
        self.edges().map(|(a, b)| cost.get(a, b)).sum()
    }

    /// `(lat, lon)` points in visiting order.
    ///
    /// This is the straight-line polyline a caller draws when road geometry
    /// for the tour is unavailable.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` is shorter than the problem the tour was built for.
    pub fn waypoints(&self, nodes: &[Node]) -> Vec<(f64, f64)> {
        self.sequence
            .iter()
            .map(|&i| (nodes[i].lat(), nodes[i].lon()))
            .collect()
    }

    /// Consumes the tour, returning the closed sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_valid() {
        let t = Tour::new(vec![0, 1, 2, 0], 3).expect("valid");
        assert_eq!(t.as_slice(), &[0, 1, 2, 0]);
        assert_eq!(t.stops(), &[1, 2]);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_tour_rejects_wrong_length() {
        assert!(matches!(
            Tour::new(vec![0, 1, 0], 3),
            Err(AcoError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_tour_rejects_open_tour() {
        assert!(Tour::new(vec![1, 0, 2, 1], 3).is_err());
        assert!(Tour::new(vec![0, 1, 2, 1], 3).is_err());
    }

    #[test]
    fn test_tour_rejects_duplicates_and_out_of_range() {
        assert!(Tour::new(vec![0, 2, 2, 0], 3).is_err());
        assert!(Tour::new(vec![0, 1, 5, 0], 3).is_err());
    }

    #[test]
    fn test_tour_rejects_single_node() {
        assert!(matches!(
            Tour::new(vec![0, 0], 1),
            Err(AcoError::InsufficientNodes { found: 1 })
        ));
    }

    #[test]
    fn test_tour_edges_and_length() {
        let cost = CostMatrix::from_data(3, vec![0.0, 1.0, 4.0, 1.0, 0.0, 2.0, 4.0, 2.0, 0.0])
            .expect("valid");
        let t = Tour::new(vec![0, 1, 2, 0], 3).expect("valid");
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
        assert!((t.length(&cost) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_waypoints() {
        let nodes = vec![
            Node::new("school", 0.0, 0.0),
            Node::new("a", 0.0, 1.0),
            Node::new("b", 1.0, 0.0),
        ];
        let t = Tour::new(vec![0, 2, 1, 0], 3).expect("valid");
        assert_eq!(
            t.waypoints(&nodes),
            vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]
        );
    }
}
