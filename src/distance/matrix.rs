//! Dense travel-cost matrix.

use log::warn;

use crate::error::{AcoError, AcoResult};
use crate::models::Node;

/// Finite cost substituted for missing, negative, or non-finite entries of
/// an externally supplied matrix.
pub const UNREACHABLE_PENALTY: f64 = 1_000_000.0;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Diagonal entries are zero and every entry is finite and non-negative.
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
/// use u_aco::distance::CostMatrix;
///
/// let nodes = vec![
///     Node::new("school", 0.0, 0.0),
///     Node::new("a", 0.0, 1.0),
///     Node::new("b", 1.0, 0.0),
/// ];
/// let cm = CostMatrix::from_nodes(&nodes).unwrap();
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(1, 1), 0.0);
/// assert!((cm.get(1, 2) - 157.25).abs() < 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine cost matrix (kilometers) from node coordinates.
    ///
    /// Symmetric by construction.
    pub fn from_nodes(nodes: &[Node]) -> AcoResult<Self> {
        let n = nodes.len();
        if n < 2 {
            return Err(AcoError::InsufficientNodes { found: n });
        }
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        Ok(cm)
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    ///
    /// Fails with [`AcoError::DimensionMismatch`] if `data.len() != size * size`;
    /// the error then carries entry counts rather than dimensions.
    /// Invalid entries are replaced with [`UNREACHABLE_PENALTY`].
    pub fn from_data(size: usize, data: Vec<f64>) -> AcoResult<Self> {
        if size < 2 {
            return Err(AcoError::InsufficientNodes { found: size });
        }
        if data.len() != size * size {
            return Err(AcoError::DimensionMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        let mut cm = Self { data, size };
        cm.sanitize();
        Ok(cm)
    }

    /// Creates a cost matrix for `num_nodes` nodes from externally supplied
    /// rows, where `None` marks a missing entry.
    ///
    /// Fails with [`AcoError::DimensionMismatch`] unless there are exactly
    /// `num_nodes` rows of `num_nodes` entries each.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_aco::distance::{CostMatrix, UNREACHABLE_PENALTY};
    ///
    /// let rows = vec![
    ///     vec![Some(0.0), Some(2.5)],
    ///     vec![None, Some(0.0)],
    /// ];
    /// let cm = CostMatrix::from_external(&rows, 2).unwrap();
    /// assert_eq!(cm.get(0, 1), 2.5);
    /// assert_eq!(cm.get(1, 0), UNREACHABLE_PENALTY);
    ///
    /// assert!(CostMatrix::from_external(&rows, 3).is_err());
    /// ```
    pub fn from_external(rows: &[Vec<Option<f64>>], num_nodes: usize) -> AcoResult<Self> {
        if num_nodes < 2 {
            return Err(AcoError::InsufficientNodes { found: num_nodes });
        }
        if rows.len() != num_nodes {
            return Err(AcoError::DimensionMismatch {
                expected: num_nodes,
                found: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|r| r.len() != num_nodes) {
            return Err(AcoError::DimensionMismatch {
                expected: num_nodes,
                found: row.len(),
            });
        }
        let data = rows
            .iter()
            .flat_map(|row| row.iter().map(|v| v.unwrap_or(f64::NAN)))
            .collect();
        let mut cm = Self {
            data,
            size: num_nodes,
        };
        cm.sanitize();
        Ok(cm)
    }

    /// Forces a zero diagonal and replaces invalid off-diagonal entries with
    /// the penalty.
    fn sanitize(&mut self) {
        let mut replaced = 0usize;
        for i in 0..self.size {
            for j in 0..self.size {
                let v = self.get(i, j);
                if i == j {
                    self.set(i, j, 0.0);
                } else if !v.is_finite() || v < 0.0 {
                    self.set(i, j, UNREACHABLE_PENALTY);
                    replaced += 1;
                }
            }
        }
        if replaced > 0 {
            warn!("replaced {replaced} invalid cost matrix entries with penalty {UNREACHABLE_PENALTY}");
        }
    }

    /// Returns the cost from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns a symmetric copy where `(i, j)` and `(j, i)` both hold their mean.
    ///
    /// Road-network matrices are rarely symmetric; the optimizer deposits
    /// pheromone in both directions, so callers usually symmetrize first.
    pub fn symmetrized(&self) -> Self {
        let mut out = self.clone();
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let mean = 0.5 * (self.get(i, j) + self.get(j, i));
                out.set(i, j, mean);
                out.set(j, i, mean);
            }
        }
        out
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
