//! Infrastructure errors: session setup and remote store calls

use thiserror::Error;

/// Errors resolving (profile, region) into a usable client session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the specified region '{0}' is not a valid AWS region")]
    UnknownRegion(String),

    #[error("the config profile '{profile}' could not be used: {reason}")]
    Profile { profile: String, reason: String },
}

/// Errors from remote parameter store calls.
///
/// A "parameter not found" lookup response is not an error; it is mapped
/// to `Ok(None)` at the store boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
