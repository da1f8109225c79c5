//! Error types shared by every layer of the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by configuration, sampling, statistics and benchmarks.
#[derive(Debug, Error)]
pub enum VmcError {
    /// A `SimulationConfig` field (or its raw transport value) is invalid.
    #[error("{message}")]
    ConfigValidation {
        field: &'static str,
        message: String,
    },

    /// A statistic that needs at least one value got none.
    #[error("{operation} requires at least one value")]
    EmptyInput { operation: &'static str },

    /// The chain finished without retaining any post burn-in sample.
    #[error("no samples collected; check n_steps and burn_in")]
    NoSamples,

    /// An analytic formula was called outside its domain.
    #[error("{0}")]
    Domain(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl VmcError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        VmcError::ConfigValidation {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            VmcError::ConfigValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VmcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_rule_text() {
        let err = VmcError::invalid("alpha", "alpha must be positive");
        assert_eq!(err.to_string(), "alpha must be positive");
        assert_eq!(err.field(), Some("alpha"));
    }

    #[test]
    fn test_empty_input_message_names_operation() {
        let err = VmcError::EmptyInput { operation: "mean" };
        assert_eq!(err.to_string(), "mean requires at least one value");
        assert_eq!(err.field(), None);
    }
}
