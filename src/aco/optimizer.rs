//! Colony optimizer: iterations, best-tour tracking, and pheromone updates.
//!
//! # Iteration
//!
//! 1. Draw one seed per agent from the master stream.
//! 2. Every agent builds a tour against the same read-only pheromone
//!    snapshot (sequentially or on the rayon pool).
//! 3. The global best is updated in agent order with a strict `<`, so the
//!    earliest of several equal-length tours is kept.
//! 4. The field evaporates once, then each tour of the round deposits
//!    `Q / length` on its edges.
//!
//! Because per-agent seeds are drawn before construction and results are
//! collected in agent order, sequential and parallel runs are identical.

use std::ops::ControlFlow;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::distance::CostMatrix;
use crate::error::AcoResult;
use crate::local_search::two_opt_improve;
use crate::models::{SolveResult, Tour};

use super::{construct_tour, AcoConfig, PheromoneField};

/// Progress snapshot passed to the per-iteration checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Shortest tour built in this iteration.
    pub iteration_best: f64,
    /// Shortest tour built so far.
    pub best_length: f64,
}

/// Ant colony optimizer over a fixed cost matrix.
///
/// The configuration is validated once, in [`new`](Self::new), so every
/// parameter error surfaces before any iteration runs.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, ColonyOptimizer};
/// use u_aco::distance::CostMatrix;
/// use u_aco::models::Node;
///
/// let nodes = vec![
///     Node::new("school", 0.0, 0.0),
///     Node::new("a", 0.0, 1.0),
///     Node::new("b", 1.0, 0.0),
///     Node::new("c", 1.0, 1.0),
/// ];
/// let cost = CostMatrix::from_nodes(&nodes).unwrap();
/// let optimizer = ColonyOptimizer::new(AcoConfig::default().with_iterations(20)).unwrap();
///
/// let result = optimizer.optimize(&cost).unwrap();
/// assert_eq!(result.tour().len(), 5);
/// assert!((result.tour().length(&cost) - result.length()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ColonyOptimizer {
    config: AcoConfig,
}

impl ColonyOptimizer {
    /// Creates an optimizer, rejecting invalid parameters.
    pub fn new(config: AcoConfig) -> AcoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs a full solve seeded from `config.seed`.
    ///
    /// Returns `None` when `cost` has fewer than 2 nodes.
    pub fn optimize(&self, cost: &CostMatrix) -> Option<SolveResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.optimize_with_rng(cost, &mut rng)
    }

    /// Runs a full solve drawing from a caller-supplied master stream.
    pub fn optimize_with_rng<R: Rng>(&self, cost: &CostMatrix, rng: &mut R) -> Option<SolveResult> {
        self.optimize_until(cost, rng, |_| ControlFlow::Continue(()))
    }

    /// Runs a solve, calling `on_iteration` after every pheromone update.
    ///
    /// Returning [`ControlFlow::Break`] stops the solve at that checkpoint;
    /// the best tour found so far is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_aco::aco::{AcoConfig, ColonyOptimizer};
    /// use u_aco::distance::CostMatrix;
    ///
    /// let cost = CostMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0]).unwrap();
    /// let optimizer = ColonyOptimizer::new(AcoConfig::default().with_iterations(1000)).unwrap();
    /// let mut rng = StdRng::seed_from_u64(3);
    ///
    /// let result = optimizer
    ///     .optimize_until(&cost, &mut rng, |stats| {
    ///         if stats.iteration >= 4 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    ///     })
    ///     .unwrap();
    /// assert_eq!(result.iterations(), 5);
    /// ```
    pub fn optimize_until<R, F>(
        &self,
        cost: &CostMatrix,
        rng: &mut R,
        mut on_iteration: F,
    ) -> Option<SolveResult>
    where
        R: Rng,
        F: FnMut(&IterationStats) -> ControlFlow<()>,
    {
        let n = cost.size();
        if n < 2 {
            return None;
        }

        let cfg = &self.config;
        info!(
            "aco solve: {n} nodes, {} agents, {} iterations",
            cfg.agents, cfg.iterations
        );

        let mut field = PheromoneField::new(n);
        let mut best: Option<(Tour, f64)> = None;
        let mut iterations_run = 0;

        for iteration in 0..cfg.iterations {
            let seeds: Vec<u64> = (0..cfg.agents).map(|_| rng.random()).collect();
            let tours = build_round(&field, cost, cfg, &seeds);

            let mut iteration_best = f64::INFINITY;
            for (tour, length) in &tours {
                iteration_best = iteration_best.min(*length);
                let improves = match &best {
                    Some((_, b)) => *length < *b,
                    None => true,
                };
                if improves {
                    debug!("iteration {iteration}: new best {length:.4}");
                    best = Some((tour.clone(), *length));
                }
            }

            update_pheromone(&mut field, &tours, cfg);

            iterations_run = iteration + 1;
            let stats = IterationStats {
                iteration,
                iteration_best,
                best_length: best.as_ref().map_or(f64::INFINITY, |(_, b)| *b),
            };
            trace!(
                "iteration {iteration}: round best {:.4}, global best {:.4}",
                stats.iteration_best,
                stats.best_length
            );
            if on_iteration(&stats).is_break() {
                debug!("solve stopped after {iterations_run} iterations");
                break;
            }
        }

        let (mut tour, mut length) = best?;
        if cfg.two_opt {
            let (polished, polished_length) = two_opt_improve(&tour, cost);
            if polished_length < length {
                debug!("2-opt shortened best tour {length:.4} -> {polished_length:.4}");
                tour = polished;
                length = polished_length;
            }
        }

        info!("aco solve finished: best length {length:.4} after {iterations_run} iterations");
        Some(SolveResult::new(tour, length, iterations_run))
    }
}

/// Validates `config` and runs one seeded solve.
///
/// Returns `Ok(None)` when `cost` has fewer than 2 nodes.
pub fn optimize(cost: &CostMatrix, config: &AcoConfig) -> AcoResult<Option<SolveResult>> {
    Ok(ColonyOptimizer::new(config.clone())?.optimize(cost))
}

/// Builds one tour per seed against a fixed pheromone snapshot.
fn build_round(
    field: &PheromoneField,
    cost: &CostMatrix,
    cfg: &AcoConfig,
    seeds: &[u64],
) -> Vec<(Tour, f64)> {
    let build = |seed: u64| {
        let mut agent_rng = StdRng::seed_from_u64(seed);
        let tour = construct_tour(field, cost, cfg.alpha, cfg.beta, &mut agent_rng);
        let length = tour.length(cost);
        (tour, length)
    };

    if cfg.parallel {
        seeds.par_iter().map(|&s| build(s)).collect()
    } else {
        seeds.iter().map(|&s| build(s)).collect()
    }
}

/// Evaporates the field once, then lays down every tour of the round.
fn update_pheromone(field: &mut PheromoneField, tours: &[(Tour, f64)], cfg: &AcoConfig) {
    field.decay(1.0 - cfg.evaporation);
    for (tour, length) in tours {
        field.deposit(tour, deposit_amount(cfg.deposit_constant, *length));
    }
}

/// Pheromone a tour of `length` lays on each of its edges.
///
/// A zero-length tour (all nodes coincide) deposits `q` to keep the field finite.
fn deposit_amount(q: f64, length: f64) -> f64 {
    if length > 0.0 {
        q / length
    } else {
        q
    }
}
