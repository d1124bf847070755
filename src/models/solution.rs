//! Solve result type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// The best tour found by one solve, with its total cost.
///
/// # Examples
///
/// ```
/// use u_aco::models::{SolveResult, Tour};
///
/// let tour = Tour::new(vec![0, 1, 0], 2).unwrap();
/// let result = SolveResult::new(tour, 12.5, 10);
/// assert_eq!(result.tour().as_slice(), &[0, 1, 0]);
/// assert_eq!(result.length(), 12.5);
/// assert_eq!(result.iterations(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    tour: Tour,
    length: f64,
    iterations: usize,
}

impl SolveResult {
    /// Creates a result.
    pub fn new(tour: Tour, length: f64, iterations: usize) -> Self {
        Self {
            tour,
            length,
            iterations,
        }
    }

    /// Best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total cost of [`tour`](Self::tour), in matrix units (kilometers).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Iterations actually run; fewer than configured if stopped early.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consumes the result, returning the tour and its length.
    pub fn into_parts(self) -> (Tour, f64) {
        (self.tour, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_result_accessors() {
        let tour = Tour::new(vec![0, 2, 1, 0], 3).expect("valid");
        let r = SolveResult::new(tour.clone(), 42.0, 7);
        assert_eq!(r.tour(), &tour);
        assert_eq!(r.length(), 42.0);
        assert_eq!(r.iterations(), 7);
        let (t, len) = r.into_parts();
        assert_eq!(t, tour);
        assert_eq!(len, 42.0);
    }

    #[test]
    fn test_solve_result_serializes_tour_as_array() {
        let tour = Tour::new(vec![0, 1, 0], 2).expect("valid");
        let json = serde_json::to_string(&SolveResult::new(tour, 3.0, 1)).expect("serializable");
        assert_eq!(json, r#"{"tour":[0,1,0],"length":3.0,"iterations":1}"#);
    }
}
