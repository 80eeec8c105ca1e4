/// Errors returned by [`NalogClient`](crate::client::NalogClient).
///
/// Domain variants carry the human readable message taken from the response
/// envelope, or the per-operation default when the server sent none.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("token refresh failed: {0}")]
    TokenRefresh(String),
    #[error("income creation failed: {0}")]
    IncomeCreation(String),
    #[error("income cancellation failed: {0}")]
    IncomeCancellation(String),
    #[error("client is not authenticated")]
    NotAuthenticated,
    #[error("timezone offset {0}h is out of range")]
    InvalidTimezoneOffset(i32),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Envelope message carried by a domain rejection, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Authentication(m)
            | ApiError::TokenRefresh(m)
            | ApiError::IncomeCreation(m)
            | ApiError::IncomeCancellation(m) => Some(m),
            _ => None,
        }
    }
}
