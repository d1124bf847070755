//! Ant colony optimization.
//!
//! - [`AcoConfig`] — Validated solver parameters
//! - [`PheromoneField`] — Trail matrix with floored evaporation
//! - [`construct_tour`] — One agent's probabilistic tour
//! - [`ColonyOptimizer`] — Iterations, best tracking, pheromone updates

mod config;
mod construct;
mod optimizer;
mod pheromone;

pub use config::{AcoConfig, MAX_AGENTS, MAX_ITERATIONS};
pub use construct::construct_tour;
pub use optimizer::{optimize, ColonyOptimizer, IterationStats};
pub use pheromone::{PheromoneField, INITIAL_PHEROMONE, PHEROMONE_FLOOR};
