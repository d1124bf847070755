//! Probabilistic tour construction for a single agent.
//!
//! # Transition rule
//!
//! From the current node `i`, each unvisited candidate `c` gets the weight
//!
//! ```text
//! w(c) = tau(i, c)^alpha * (1 / d(i, c))^beta
//! ```
//!
//! and the next node is drawn with probability proportional to `w(c)`
//! (roulette wheel). A zero cost maps to the largest weight that keeps the
//! sum finite. If all weights are zero the draw is uniform.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::Rng;

use crate::distance::CostMatrix;
use crate::models::{Tour, DEPOT};

use super::PheromoneField;

/// Builds one depot-closed tour.
///
/// Reads `pheromone` and `cost` only; all randomness comes from `rng`, so
/// independent agents may run concurrently with their own streams.
///
/// # Panics
///
/// Panics if the matrices are smaller than 2×2 or differ in size.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_aco::aco::{construct_tour, PheromoneField};
/// use u_aco::distance::CostMatrix;
///
/// let cost = CostMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.5,
///     2.0, 1.5, 0.0,
/// ]).unwrap();
/// let field = PheromoneField::new(3);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let tour = construct_tour(&field, &cost, 1.0, 2.0, &mut rng);
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.as_slice()[0], 0);
/// assert_eq!(tour.as_slice()[3], 0);
/// ```
pub fn construct_tour<R: Rng>(
    pheromone: &PheromoneField,
    cost: &CostMatrix,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Tour {
    let n = cost.size();
    assert!(n >= 2, "a tour needs at least 2 nodes");
    assert_eq!(pheromone.size(), n, "pheromone and cost dimensions differ");

    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(DEPOT);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != DEPOT).collect();
    let mut weights = Vec::with_capacity(unvisited.len());
    let mut current = DEPOT;

    while !unvisited.is_empty() {
        weights.clear();
        let cap = weight_cap(unvisited.len());
        weights.extend(unvisited.iter().map(|&c| {
            transition_weight(
                pheromone.get(current, c),
                cost.get(current, c),
                alpha,
                beta,
                cap,
            )
        }));

        let pos = select_index(&weights, rng);
        current = unvisited.remove(pos);
        sequence.push(current);
    }

    sequence.push(DEPOT);
    Tour::from_closed(sequence)
}

/// Largest per-candidate weight; `candidates` of them still sum to a finite value.
///
/// Half of `f64::MAX / candidates` leaves room for the rounding in the sum.
fn weight_cap(candidates: usize) -> f64 {
    f64::MAX / (2.0 * candidates as f64)
}

/// Weight of one candidate edge, capped at `cap` and never NaN.
fn transition_weight(tau: f64, cost: f64, alpha: f64, beta: f64, cap: f64) -> f64 {
    if cost <= 0.0 {
        return cap;
    }
    let w = tau.powf(alpha) * (1.0 / cost).powf(beta);
    if w.is_nan() {
        0.0
    } else {
        w.min(cap)
    }
}

/// Roulette-wheel draw over `weights`; uniform when they sum to zero.
fn select_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let mut threshold = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        if threshold < w {
            return i;
        }
        threshold -= w;
    }

    // Rounding left a sliver past the last weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1)
}
