//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;

use crate::claim::ClaimStatus;

/// Errors surfaced by the workflow engine
///
/// Every failure is returned as a typed value; bad input never panics the
/// process. The gateway maps these onto HTTP status codes.
#[derive(Debug, Error, PartialEq)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition from {from} to {to}")]
    StateConflict { from: ClaimStatus, to: ClaimStatus },
}

impl ClaimError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }
}
