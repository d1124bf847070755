//! Pheromone trail matrix.

use crate::error::AcoResult;
use crate::models::Tour;

use super::config::validate_rate;

/// Trail strength every cell starts with.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Lower bound evaporation never takes a cell below.
pub const PHEROMONE_FLOOR: f64 = 1e-6;

/// An n×n matrix of positive trail strengths, row-major.
///
/// Owned by a single solve; tour construction only ever sees it through a
/// shared reference, so no agent can observe a mid-iteration update.
///
/// # Examples
///
/// ```
/// use u_aco::aco::PheromoneField;
/// use u_aco::models::Tour;
///
/// let mut field = PheromoneField::new(3);
/// field.evaporate(0.5).unwrap();
/// assert_eq!(field.get(0, 1), 0.5);
///
/// let tour = Tour::new(vec![0, 1, 2, 0], 3).unwrap();
/// field.deposit(&tour, 0.25);
/// assert_eq!(field.get(1, 0), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneField {
    /// Creates a field with every cell at [`INITIAL_PHEROMONE`].
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![INITIAL_PHEROMONE; size * size],
            size,
        }
    }

    /// Trail strength on edge `from → to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Dimension of the field.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every cell by `1 - rate`, flooring at [`PHEROMONE_FLOOR`].
    ///
    /// Fails with [`AcoError::InvalidParameter`](crate::AcoError::InvalidParameter)
    /// unless `rate` is in `(0, 1)`; the field is untouched in that case.
    pub fn evaporate(&mut self, rate: f64) -> AcoResult<()> {
        validate_rate(rate)?;
        self.decay(1.0 - rate);
        Ok(())
    }

    /// Scales every cell by `keep`, flooring at [`PHEROMONE_FLOOR`].
    ///
    /// `keep` must already be known to lie in `(0, 1)`.
    pub(crate) fn decay(&mut self, keep: f64) {
        for cell in &mut self.data {
            *cell = (*cell * keep).max(PHEROMONE_FLOOR);
        }
    }

    /// Adds `amount` to every edge of `tour`, in both directions.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        for (a, b) in tour.edges() {
            self.data[a * self.size + b] += amount;
            if a != b {
                self.data[b * self.size + a] += amount;
            }
        }
    }

    /// Smallest cell value.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
