//! Error types shared by all solvers.

use thiserror::Error;

/// Errors returned by distance construction, solvers, and experiments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The instance cannot be solved as given: empty where at least one city
    /// is required, or a distance matrix that is not a valid symmetric,
    /// non-negative square matrix with a zero diagonal.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// The Held-Karp state table for this many cities is not addressable.
    #[error("instance too large for exact solver: {cities} cities (max {max})")]
    InstanceTooLarge { cities: usize, max: usize },

    /// Generator or experiment parameters were rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl TspError {
    pub fn invalid_instance(message: impl Into<String>) -> Self {
        Self::InvalidInstance(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type TspResult<T> = std::result::Result<T, TspError>;
