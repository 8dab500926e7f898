//! Application error handling

use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Saving or loading the snapshot failed
    #[error("Persistence error: {0}")]
    Port(#[from] PortError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<infra_storage::StorageError> for AppError {
    fn from(err: infra_storage::StorageError) -> Self {
        AppError::Port(err.into())
    }
}
