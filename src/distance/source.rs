//! Interchangeable cost matrix sources.

use log::warn;

use crate::error::{AcoError, AcoResult};
use crate::models::Node;

use super::CostMatrix;

/// Produces a [`CostMatrix`] for an ordered node list.
///
/// Implementations are chosen by the caller before the optimizer runs:
/// a network-derived matrix when one was fetched, geometric distances
/// otherwise, or both combined with [`WithFallback`].
pub trait CostMatrixSource {
    /// Returns a human-readable name for this source.
    fn name(&self) -> &str;

    /// Builds the matrix for `nodes` (index 0 = depot).
    fn build(&self, nodes: &[Node]) -> AcoResult<CostMatrix>;
}

/// Straight-line haversine distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoSource;

impl CostMatrixSource for GeoSource {
    fn name(&self) -> &str {
        "haversine"
    }

    fn build(&self, nodes: &[Node]) -> AcoResult<CostMatrix> {
        CostMatrix::from_nodes(nodes)
    }
}

/// A matrix computed elsewhere, e.g. road distances from a routing service.
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
/// use u_aco::distance::{CostMatrixSource, ExternalSource};
///
/// let nodes = vec![Node::new("school", 0.0, 0.0), Node::new("a", 0.0, 1.0)];
/// let source = ExternalSource::new(vec![
///     vec![Some(0.0), Some(4.0)],
///     vec![Some(6.0), Some(0.0)],
/// ])
/// .symmetrize();
/// let cm = source.build(&nodes).unwrap();
/// assert_eq!(cm.get(0, 1), 5.0);
/// assert_eq!(cm.get(1, 0), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalSource {
    rows: Vec<Vec<Option<f64>>>,
    symmetrize: bool,
}

impl ExternalSource {
    /// Wraps externally supplied rows; `None` marks a missing entry.
    pub fn new(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            rows,
            symmetrize: false,
        }
    }

    /// Averages each `(i, j)`/`(j, i)` pair after sanitizing.
    pub fn symmetrize(mut self) -> Self {
        self.symmetrize = true;
        self
    }
}

impl CostMatrixSource for ExternalSource {
    fn name(&self) -> &str {
        "external"
    }

    fn build(&self, nodes: &[Node]) -> AcoResult<CostMatrix> {
        let cm = CostMatrix::from_external(&self.rows, nodes.len())?;
        Ok(if self.symmetrize { cm.symmetrized() } else { cm })
    }
}

/// Uses `primary` unless it reports [`AcoError::DimensionMismatch`], in
/// which case `fallback` builds the matrix instead.
///
/// Other errors from `primary` are returned as is.
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
/// use u_aco::distance::{CostMatrixSource, ExternalSource, GeoSource, WithFallback};
///
/// let nodes = vec![
///     Node::new("school", 0.0, 0.0),
///     Node::new("a", 0.0, 1.0),
///     Node::new("b", 1.0, 0.0),
/// ];
/// // Stale 2×2 matrix for a 3-node problem.
/// let stale = ExternalSource::new(vec![vec![Some(0.0), Some(1.0)]; 2]);
/// let cm = WithFallback::new(stale, GeoSource).build(&nodes).unwrap();
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P: CostMatrixSource, F: CostMatrixSource> WithFallback<P, F> {
    /// Combines a primary source with a fallback.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: CostMatrixSource, F: CostMatrixSource> CostMatrixSource for WithFallback<P, F> {
    /// Names the preferred source; a fallback build is reported by a `warn!`.
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn build(&self, nodes: &[Node]) -> AcoResult<CostMatrix> {
        match self.primary.build(nodes) {
            Err(err @ AcoError::DimensionMismatch { .. }) => {
                warn!(
                    "{} cost source rejected ({err}); falling back to {}",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.build(nodes)
            }
            other => other,
        }
    }
}
