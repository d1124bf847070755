//! Error types.
//!
//! Every failure is reported before the first iteration runs. Once a solve
//! has started it always completes with a valid tour.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type AcoResult<T> = Result<T, AcoError>;

/// Errors reported by matrix construction, parameter validation, and
/// instance decoding.
#[derive(Debug, Error)]
pub enum AcoError {
    /// Fewer than two nodes were supplied; no tour exists.
    #[error("at least 2 nodes are required, found {found}")]
    InsufficientNodes {
        /// Number of nodes supplied.
        found: usize,
    },

    /// An externally supplied matrix does not match the node count.
    ///
    /// Nested rows report row lengths; flat row-major data reports entry counts.
    #[error("cost matrix size {found} does not match expected {expected}")]
    DimensionMismatch {
        /// Required size.
        expected: usize,
        /// Size of the supplied matrix.
        found: usize,
    },

    /// An optimization parameter lies outside its documented domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in [`AcoConfig`](crate::aco::AcoConfig).
        name: &'static str,
        /// Offending value, formatted.
        value: String,
        /// Accepted domain.
        reason: &'static str,
    },

    /// A caller-supplied node sequence is not a depot-closed permutation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A problem instance could not be decoded.
    #[error("instance decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AcoError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = AcoError::InsufficientNodes { found: 1 };
        assert_eq!(e.to_string(), "at least 2 nodes are required, found 1");

        let e = AcoError::DimensionMismatch {
            expected: 5,
            found: 4,
        };
        assert_eq!(e.to_string(), "cost matrix size 4 does not match expected 5");

        let e = AcoError::invalid_parameter("alpha", -1.0, "must be > 0");
        assert_eq!(e.to_string(), "invalid parameter `alpha` = -1: must be > 0");
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated");
        let e: AcoError = err.into();
        assert!(matches!(e, AcoError::Json(_)));
    }
}
