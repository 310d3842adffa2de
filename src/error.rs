//! Error types for sampling and statistics.
//!
//! Every failure in this crate is a validation failure detected at the
//! call that received the bad input. Degenerate-but-defined results (zero
//! variance of a single observation, the median sentinel, NaN moments in
//! the aggregate summary) are returned as ordinary values, never as errors.

use thiserror::Error;

use crate::distributions::DistributionKind;

/// Crate-wide error type.
///
/// # Examples
/// ```
/// use u_stochastic::Error;
///
/// let err = Error::InsufficientData { statistic: "skewness", required: 3, actual: 2 };
/// assert!(err.to_string().contains("skewness"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A scalar argument is outside its domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Distribution parameters violate the kind's constraints.
    #[error("invalid {kind} parameters: {reason}")]
    InvalidParameters {
        /// Distribution the parameters were meant for
        kind: DistributionKind,
        /// Constraint that failed
        reason: String,
    },

    /// The sample is too small for the requested statistic.
    #[error("{statistic} requires at least {required} observations, got {actual}")]
    InsufficientData {
        /// Statistic being computed
        statistic: &'static str,
        /// Minimum sample size
        required: usize,
        /// Actual sample size
        actual: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameters(kind: DistributionKind, reason: impl Into<String>) -> Self {
        Error::InvalidParameters {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::InsufficientData`] unless `data` has `required` elements.
pub(crate) fn require_len(data: &[f64], required: usize, statistic: &'static str) -> Result<()> {
    if data.len() < required {
        return Err(Error::InsufficientData {
            statistic,
            required,
            actual: data.len(),
        });
    }
    Ok(())
}
