//! Application-level errors

use thiserror::Error;

/// Application errors. The form itself never fails; these cover the
/// configuration and I/O around it.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
