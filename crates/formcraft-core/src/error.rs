//! Error types for FormCraft

use thiserror::Error;

use crate::domain::services::validator::ValidationError;
use crate::ports::outbound::GatewayError;

/// Failure of a lifecycle operation.
///
/// Domain-rule violations are decided before the gateway is touched;
/// gateway failures pass through untouched.
#[derive(Error, Debug)]
pub enum FormError {
    /// The submitted definition broke a validator rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No form with this id exists
    #[error("form {0} not found")]
    NotFound(i32),

    /// Malformed identifier
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The persistence gateway failed
    #[error("gateway failure: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result type for lifecycle operations
pub type FormResult<T> = Result<T, FormError>;
