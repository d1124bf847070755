//! Serializable problem instances.
//!
//! A [`ProblemInstance`] is what a presentation layer hands to the solver:
//! the ordered node list (depot first), an optional externally computed
//! cost matrix, and the solver configuration.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "label": "school", "lat": 37.50, "lon": 127.00 },
//!     { "label": "A", "lat": 37.51, "lon": 127.01 }
//!   ],
//!   "matrix": [[0.0, 1.8], [null, 0.0]],
//!   "config": { "agents": 10, "iterations": 50 }
//! }
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::aco::{AcoConfig, ColonyOptimizer};
use crate::distance::{CostMatrix, CostMatrixSource, ExternalSource, GeoSource, WithFallback};
use crate::error::{AcoError, AcoResult};
use crate::models::{Node, SolveResult};

/// A complete problem: nodes, optional external costs, and configuration.
///
/// # Examples
///
/// ```
/// use u_aco::instance::ProblemInstance;
///
/// let json = r#"{
///     "nodes": [
///         { "label": "school", "lat": 0.0, "lon": 0.0 },
///         { "label": "A", "lat": 0.0, "lon": 1.0 },
///         { "label": "B", "lat": 1.0, "lon": 0.0 }
///     ],
///     "config": { "iterations": 10 }
/// }"#;
/// let instance = ProblemInstance::from_json(json).unwrap();
/// let result = instance.solve().unwrap();
/// assert_eq!(result.tour().len(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Depot at index 0, pickups after it.
    pub nodes: Vec<Node>,
    /// Externally computed costs in kilometers; `null` marks a missing entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<Option<f64>>>>,
    /// Solver parameters.
    #[serde(default)]
    pub config: AcoConfig,
}

impl ProblemInstance {
    /// Creates an instance using haversine costs and default parameters.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            matrix: None,
            config: AcoConfig::default(),
        }
    }

    /// Attaches an externally computed cost matrix.
    pub fn with_matrix(mut self, matrix: Vec<Vec<Option<f64>>>) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Replaces the solver configuration.
    pub fn with_config(mut self, config: AcoConfig) -> Self {
        self.config = config;
        self
    }

    /// Decodes an instance from JSON.
    pub fn from_json(json: &str) -> AcoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes this instance as JSON.
    pub fn to_json(&self) -> AcoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the cost matrix.
    ///
    /// Uses the external matrix when present (symmetrized), falling back to
    /// haversine distances if its dimension does not match the node list.
    pub fn cost_matrix(&self) -> AcoResult<CostMatrix> {
        match &self.matrix {
            Some(rows) => {
                let external = ExternalSource::new(rows.clone()).symmetrize();
                WithFallback::new(external, GeoSource).build(&self.nodes)
            }
            None => GeoSource.build(&self.nodes),
        }
    }

    /// Validates the configuration, builds the matrix, and runs the solver.
    ///
    /// Every error is reported before the first iteration.
    pub fn solve(&self) -> AcoResult<SolveResult> {
        let optimizer = ColonyOptimizer::new(self.config.clone())?;
        let cost = self.cost_matrix()?;
        info!(
            "solving instance: depot `{}`, {} pickups",
            self.nodes.first().map_or("", |n| n.label()),
            self.nodes.len().saturating_sub(1)
        );
        optimizer.optimize(&cost).ok_or(AcoError::InsufficientNodes {
            found: cost.size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::UNREACHABLE_PENALTY;

    fn nodes(n: usize) -> Vec<Node> {
        (0..n)
            .map(|i| Node::new(format!("n{i}"), 0.01 * i as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_geo_matrix_when_absent() {
        let inst = ProblemInstance::new(nodes(3));
        let cm = inst.cost_matrix().expect("valid");
        assert_eq!(cm, CostMatrix::from_nodes(&nodes(3)).expect("valid"));
    }

    #[test]
    fn test_external_matrix_is_symmetrized_and_sanitized() {
        let inst = ProblemInstance::new(nodes(2))
            .with_matrix(vec![vec![Some(0.0), Some(2.0)], vec![Some(4.0), Some(0.0)]]);
        let cm = inst.cost_matrix().expect("valid");
        assert_eq!(cm.get(0, 1), 3.0);
        assert_eq!(cm.get(1, 0), 3.0);

        let inst = ProblemInstance::new(nodes(2))
            .with_matrix(vec![vec![Some(0.0), None], vec![None, Some(0.0)]]);
        let cm = inst.cost_matrix().expect("valid");
        assert_eq!(cm.get(0, 1), UNREACHABLE_PENALTY);
    }

    #[test]
    fn test_mismatched_matrix_falls_back() {
        let inst = ProblemInstance::new(nodes(5)).with_matrix(vec![vec![Some(1.0); 4]; 4]);
        let cm = inst.cost_matrix().expect("falls back");
        assert_eq!(cm, CostMatrix::from_nodes(&nodes(5)).expect("valid"));
    }

    #[test]
    fn test_solve_rejects_bad_config_first() {
        let inst = ProblemInstance::new(nodes(1)).with_config(AcoConfig::default().with_beta(0.0));
        assert!(matches!(
            inst.solve(),
            Err(AcoError::InvalidParameter { name: "beta", .. })
        ));
    }

    #[test]
    fn test_solve_insufficient_nodes() {
        let inst = ProblemInstance::new(nodes(1));
        assert!(matches!(
            inst.solve(),
            Err(AcoError::InsufficientNodes { found: 1 })
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_matrix_nulls() {
        let inst = ProblemInstance::new(nodes(2))
            .with_matrix(vec![vec![Some(0.0), None], vec![Some(1.0), Some(0.0)]]);
        let json = inst.to_json().expect("serializable");
        assert!(json.contains("null"));
        let back = ProblemInstance::from_json(&json).expect("valid");
        assert_eq!(back.matrix, inst.matrix);
        assert_eq!(back.nodes, inst.nodes);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            ProblemInstance::from_json("{\"nodes\": 3}"),
            Err(AcoError::Json(_))
        ));
    }
}
