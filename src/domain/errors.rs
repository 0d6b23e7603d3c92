//! Remote call failures shared by every data service client.

/// Failure of a single request/reply exchange with a data service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The broker could not be reached or the reply path is gone
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// The remote service answered with an application error
    #[error("remote service failed: {message}")]
    RemoteFailure { message: String },

    /// No reply arrived within the configured timeout
    #[error("no reply to '{pattern}' before timeout")]
    Timeout { pattern: String },

    /// The reply did not match the shape expected for the pattern
    #[error("unexpected reply to '{pattern}': {reason}")]
    InvalidResponse { pattern: String, reason: String },
}
