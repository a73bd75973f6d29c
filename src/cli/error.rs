//! CLI-level errors (wraps application and infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::SessionError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user; all of them are fatal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
