//! Local search applied to the colony's best tour.
//!
//! - [`two_opt_improve`] — Segment-reversal improvement (Croes, 1958)

mod two_opt;

pub use two_opt::two_opt_improve;
