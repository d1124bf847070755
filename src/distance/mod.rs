//! Travel-cost matrices.
//!
//! Provides haversine distance, a dense cost matrix, and the
//! [`CostMatrixSource`] seam for choosing between geometric and
//! externally computed costs.

mod geo;
mod matrix;
mod source;

pub use geo::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::{CostMatrix, UNREACHABLE_PENALTY};
pub use source::{CostMatrixSource, ExternalSource, GeoSource, WithFallback};
