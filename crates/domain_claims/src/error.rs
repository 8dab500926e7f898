//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;

/// Errors that can occur in the claims domain
///
/// The store's plain mutations never fail; these come from the
/// existence-checked variants, parsing, validation, and export.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl ClaimError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::ClaimNotFound(_))
    }
}
