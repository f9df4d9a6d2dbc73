use thiserror::Error;

use crate::clients::entities::ErrorEnvelope;

/// Result alias used across the client modules
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse response body, error: {0}")]
    ParseError(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    /// Normalizes the raw body of a failed response into the API error envelope.
    ///
    /// Returns `None` for errors that carry no body, or when the body does not
    /// have the `{"error": {"status", "message"}}` shape.
    pub fn envelope(&self) -> Option<ErrorEnvelope> {
        match self {
            Error::UnexpectedStatus { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// HTTP status of a rejected response, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_read_from_rejected_body() {
        let err = Error::UnexpectedStatus {
            status: 400,
            body: r#"{"error":{"status":400,"message":"Invalid playlist Id"}}"#.to_string(),
        };
        let envelope = err.envelope().unwrap();
        assert_eq!(envelope.error.status, 400);
        assert_eq!(envelope.error.message, "Invalid playlist Id");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn envelope_is_none_for_other_shapes() {
        let err = Error::UnexpectedStatus {
            status: 502,
            body: "<html>Bad gateway</html>".to_string(),
        };
        assert!(err.envelope().is_none());
        assert!(Error::ParseError("items".into()).envelope().is_none());
    }
}
