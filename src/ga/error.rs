//! Error types for configuring and starting a GA run.
//!
//! Every error is terminal for the run: nothing is retried and no partial
//! result is produced.

use super::fitness::FitnessFunction;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced before the evolutionary loop starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A numeric parameter is out of its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Configuration field name.
        name: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// No fitness function was chosen.
    #[error("no fitness function selected")]
    MissingFitnessFunction,

    /// The chromosome cannot hold every field the fitness function decodes.
    #[error("{function} needs a chromosome of at least {required} bits, got {actual}")]
    ChromosomeTooShort {
        /// The selected fitness function.
        function: FitnessFunction,
        /// Minimum chromosome length for that function.
        required: usize,
        /// Configured chromosome length.
        actual: usize,
    },

    /// Population or bit-order storage could not be reserved.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl GaError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GaError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for GA setup operations.
pub type Result<T> = std::result::Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_parameter() {
        let err = GaError::invalid("tournament_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `tournament_size`: must be at least 1"
        );
    }

    #[test]
    fn test_display_chromosome_too_short() {
        let err = GaError::ChromosomeTooShort {
            function: FitnessFunction::F101,
            required: 100,
            actual: 40,
        };
        assert_eq!(
            err.to_string(),
            "f101 needs a chromosome of at least 100 bits, got 40"
        );
    }

    #[test]
    fn test_allocation_from_try_reserve() {
        let mut v: Vec<u8> = Vec::new();
        let reserve_err = v.try_reserve_exact(usize::MAX).unwrap_err();
        let err: GaError = reserve_err.into();
        assert!(matches!(err, GaError::Allocation(_)));
    }
}
