//! Colony optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};

/// Largest accepted agent count per iteration.
pub const MAX_AGENTS: usize = 10_000;

/// Largest accepted iteration count.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Parameters for [`ColonyOptimizer`](super::ColonyOptimizer).
///
/// Every field is validated independently by [`validate`](Self::validate);
/// out-of-range values are rejected, never clamped.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_agents(30)
///     .with_iterations(200)
///     .with_evaporation(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcoConfig {
    /// Agents (ants) per iteration, in `1..=MAX_AGENTS`.
    pub agents: usize,
    /// Iterations, in `1..=MAX_ITERATIONS`.
    pub iterations: usize,
    /// Pheromone exponent, `> 0`.
    pub alpha: f64,
    /// Visibility (inverse cost) exponent, `> 0`.
    pub beta: f64,
    /// Fraction of pheromone removed per iteration, in `(0, 1)`.
    pub evaporation: f64,
    /// Deposit constant Q; a tour of length L deposits `Q / L` per edge.
    pub deposit_constant: f64,
    /// Seed for the master random stream.
    pub seed: u64,
    /// Build the agents of one iteration on the rayon pool.
    pub parallel: bool,
    /// Polish the final best tour with 2-opt.
    pub two_opt: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            agents: 20,
            iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            deposit_constant: 100.0,
            seed: 42,
            parallel: false,
            two_opt: false,
        }
    }
}

impl AcoConfig {
    /// Default configuration with one agent per node.
    pub fn for_nodes(num_nodes: usize) -> Self {
        Self::default().with_agents(num_nodes.clamp(1, MAX_AGENTS))
    }

    /// Sets the agent count per iteration.
    pub fn with_agents(mut self, n: usize) -> Self {
        self.agents = n;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    /// Sets the deposit constant Q.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the final 2-opt polish.
    pub fn with_two_opt(mut self, two_opt: bool) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Checks every parameter against its domain.
    ///
    /// Returns the first violation as [`AcoError::InvalidParameter`].
    pub fn validate(&self) -> AcoResult<()> {
        if !(1..=MAX_AGENTS).contains(&self.agents) {
            return Err(AcoError::invalid_parameter(
                "agents",
                self.agents,
                "must be in 1..=10000",
            ));
        }
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(AcoError::invalid_parameter(
                "iterations",
                self.iterations,
                "must be in 1..=1000000",
            ));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(AcoError::invalid_parameter(
                "alpha",
                self.alpha,
                "must be finite and > 0",
            ));
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(AcoError::invalid_parameter(
                "beta",
                self.beta,
                "must be finite and > 0",
            ));
        }
        validate_rate(self.evaporation)?;
        if !(self.deposit_constant.is_finite() && self.deposit_constant > 0.0) {
            return Err(AcoError::invalid_parameter(
                "depositConstant",
                self.deposit_constant,
                "must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Checks that an evaporation rate lies strictly inside `(0, 1)`.
pub(crate) fn validate_rate(rate: f64) -> AcoResult<()> {
    if rate > 0.0 && rate < 1.0 {
        Ok(())
    } else {
        Err(AcoError::invalid_parameter(
            "evaporation",
            rate,
            "must be in (0, 1)",
        ))
    }
}
