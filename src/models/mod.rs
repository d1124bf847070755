//! Domain model types.
//!
//! Nodes (the depot at index 0 plus pickups), depot-closed tours, and the
//! result of a solve.

mod node;
mod solution;
mod tour;

pub use node::Node;
pub use solution::SolveResult;
pub use tour::{Tour, DEPOT};
