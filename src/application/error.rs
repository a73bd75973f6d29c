//! Application-level errors (wraps store errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::StoreError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("the file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
