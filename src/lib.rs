//! # u-aco
//!
//! Ant colony optimization for closed pickup tours: a depot (index 0) and a
//! set of pickup points, solved over a haversine or externally supplied
//! travel-cost matrix.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Tour, SolveResult)
//! - [`distance`] — Haversine distance, cost matrix, and cost sources with fallback
//! - [`aco`] — Pheromone field, tour construction, and the colony optimizer
//! - [`local_search`] — 2-opt polish for the best tour
//! - [`instance`] — JSON problem instances
//! - [`error`] — Error taxonomy
//!
//! ## Example
//!
//! ```
//! use u_aco::aco::{optimize, AcoConfig};
//! use u_aco::distance::CostMatrix;
//! use u_aco::models::Node;
//!
//! let nodes = vec![
//!     Node::new("school", 0.0, 0.0),
//!     Node::new("A", 0.0, 1.0),
//!     Node::new("B", 1.0, 0.0),
//! ];
//! let cost = CostMatrix::from_nodes(&nodes).unwrap();
//! let result = optimize(&cost, &AcoConfig::default()).unwrap().unwrap();
//! let seq = result.tour().as_slice();
//! assert!(seq == [0, 1, 2, 0] || seq == [0, 2, 1, 0]);
//! ```

pub mod aco;
pub mod distance;
pub mod error;
pub mod instance;
pub mod local_search;
pub mod models;

pub use error::{AcoError, AcoResult};
