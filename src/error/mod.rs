//! Error types for Parley.

use thiserror::Error;

/// Primary error type for all Parley operations.
#[derive(Error, Debug)]
pub enum ParleyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unexpected response from {service}: {message}")]
    MalformedResponse { service: String, message: String },

    #[error("No results returned by {0}")]
    EmptyResult(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ParleyError {
    /// Create an API error from a status code and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an error for a provider payload that lacks an expected field.
    pub fn malformed(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from missing or rejected credentials.
    pub fn is_credential_error(&self) -> bool {
        match self {
            Self::Authentication(_) | Self::Configuration(_) => true,
            Self::Api { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ParleyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = ParleyError::api(500, "upstream exploded");
        assert_eq!(
            err.to_string(),
            "API error (status 500): upstream exploded"
        );
    }

    #[test]
    fn credential_errors_are_classified() {
        assert!(ParleyError::Configuration("missing key".into()).is_credential_error());
        assert!(ParleyError::Authentication("bad key".into()).is_credential_error());
        assert!(ParleyError::api(403, "forbidden").is_credential_error());
        assert!(!ParleyError::api(500, "boom").is_credential_error());
        assert!(!ParleyError::InvalidArgument("x".into()).is_credential_error());
    }

    #[test]
    fn malformed_response_names_service() {
        let err = ParleyError::malformed("weather", "missing field `main`");
        assert_eq!(
            err.to_string(),
            "Unexpected response from weather: missing field `main`"
        );
    }
}
