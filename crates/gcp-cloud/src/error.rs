//! Error types for the Google Cloud client facade.

use thiserror::Error;

/// Errors returned by the Google Cloud client.
#[derive(Error, Debug)]
pub enum CloudError {
    /// Credential file could not be read or parsed as a service-account key
    #[error("invalid service-account key '{path}': {message}")]
    InvalidKeyFile { path: String, message: String },

    /// Token exchange with the auth backend failed
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// A sub-service handle could not be constructed
    #[error("failed to initialize {service} client: {source}")]
    Handshake {
        service: &'static str,
        #[source]
        source: Box<CloudError>,
    },

    /// 400 Bad Request
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// 403 Forbidden
    #[error("permission denied: {message}")]
    Forbidden { message: String },

    /// 404 Not Found
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 429 Too Many Requests
    #[error("rate limited: {message}")]
    RateLimited { message: String },

    /// Any other non-success status from the API
    #[error("API error (HTTP {code}): {message}")]
    ApiError { code: u16, message: String },

    /// 5xx responses
    #[error("server error: {0}")]
    ServerError(String),

    /// Transport-level failure (DNS, TLS, connect, read)
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid client configuration (bad URL, empty required field)
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, CloudError>;

impl CloudError {
    /// Wrap an error from a sub-service handshake, recording which service failed.
    pub(crate) fn handshake(service: &'static str, source: CloudError) -> Self {
        CloudError::Handshake {
            service,
            source: Box::new(source),
        }
    }

    /// Returns true if this is a "not found" error (404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            CloudError::NotFound { .. } => true,
            CloudError::Handshake { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this is an authentication/authorization error (401/403)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            CloudError::AuthenticationFailed { .. } | CloudError::Forbidden { .. } => true,
            CloudError::Handshake { source, .. } => source.is_unauthorized(),
            _ => false,
        }
    }

    /// Returns true if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        match self {
            CloudError::ServerError(_) => true,
            CloudError::ApiError { code, .. } => *code >= 500,
            CloudError::Handshake { source, .. } => source.is_server_error(),
            _ => false,
        }
    }

    /// The sub-service a handshake failure originated from, if any.
    #[must_use]
    pub fn failed_service(&self) -> Option<&'static str> {
        match self {
            CloudError::Handshake { service, .. } => Some(service),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(err: reqwest::Error) -> Self {
        CloudError::ConnectionError(err.to_string())
    }
}

/// Error body returned by Google APIs on non-success statuses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct GoogleErrorResponse {
    pub error: GoogleError,
}

#[derive(Debug, serde::Deserialize)]
#[allow(dead_code)] // Fields used for deserialization
pub(crate) struct GoogleError {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Extract a human-readable message from a Google API error body,
/// falling back to the raw body when it is not the standard shape.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorResponse>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(s) => format!("{} ({})", parsed.error.message, s),
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Map a non-success HTTP response to a typed error.
pub(crate) fn status_to_error(status: reqwest::StatusCode, body: &str) -> CloudError {
    let message = error_message(status, body);
    match status.as_u16() {
        400 => CloudError::BadRequest { message },
        401 => CloudError::AuthenticationFailed { message },
        403 => CloudError::Forbidden { message },
        404 => CloudError::NotFound { message },
        429 => CloudError::RateLimited { message },
        code if status.is_server_error() => {
            CloudError::ServerError(format!("HTTP {code}: {message}"))
        }
        code => CloudError::ApiError { code, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn parses_google_error_body() {
        let body = r#"{"error":{"code":404,"message":"Project not found","status":"NOT_FOUND"}}"#;
        let err = status_to_error(StatusCode::NOT_FOUND, body);
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Project not found"));
        assert!(err.to_string().contains("NOT_FOUND"));
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = status_to_error(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert!(err.is_server_error());
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn empty_body_uses_status_line() {
        let err = status_to_error(StatusCode::FORBIDDEN, "");
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn handshake_records_service_and_delegates() {
        let inner = CloudError::AuthenticationFailed {
            message: "bad key".to_string(),
        };
        let err = CloudError::handshake("Cloud Resource Manager", inner);
        assert_eq!(err.failed_service(), Some("Cloud Resource Manager"));
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("Cloud Resource Manager"));
    }
}
