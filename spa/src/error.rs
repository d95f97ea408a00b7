use thiserror::Error;

/// Everything that can come out of the API gateway. User-facing messages
/// mirror what the backend cannot say for itself; `Api` carries the
/// backend's own error text through unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected credentials on the login endpoint itself.
    #[error("{0}")]
    Auth(String),
    /// 401 on credentialed traffic; the stored token has been dropped.
    #[error("Session expired. Please sign in again.")]
    SessionExpired,
    #[error("Server error. Please try again later.")]
    Server(u16),
    #[error("{0}")]
    Api(String),
    #[error("Network error. Please check your connection.")]
    Transport(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("Another sign-in attempt is in progress.")]
    Busy,
}
