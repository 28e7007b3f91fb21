use thiserror::Error;

/// Errors raised before a simulation starts. No partial result is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SimulationError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors related to the reference tables in a `ParameterStore`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("probability `{field}` must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("crisis and correction probabilities sum to {total}, which exceeds 1")]
    ProbabilitiesExceedOne { total: f64 },
    #[error("standard deviation for `{context}` must be finite and non-negative, got {value}")]
    InvalidStdDev { context: String, value: f64 },
    #[error("value for `{context}` must be finite, got {value}")]
    NonFinite { context: String, value: f64 },
    #[error("fee for `{context}` must be finite and below 1, got {value}")]
    InvalidFee { context: String, value: f64 },
    #[error("log-normal mean for `{context}` must be above -100%, got {value}")]
    InvalidLogNormalMean { context: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
