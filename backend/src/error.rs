//! Error types for the NovaCard relay.
//!
//! - [`ConfigError`] - Startup configuration errors
//! - [`RelayError`] - Webhook forwarding errors
//! - [`ServerError`] - HTTP server errors
//!
//! A [`RelayError`] is never fatal: it is turned into a failed
//! [`SubmissionResult`] and handed back to the user.

use novacard_form::SubmissionResult;
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building the relay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No webhook URL in the environment or on the command line.
    #[error("Missing NOVACARD_WEBHOOK_URL environment variable (or --webhook-url)")]
    MissingWebhookUrl,

    /// Webhook URL does not parse.
    #[error("Invalid webhook URL '{url}': {message}")]
    InvalidWebhookUrl { url: String, message: String },

    /// Webhook URL is not http(s).
    #[error("Unsupported webhook URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// Port is not a number in range.
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

// =============================================================================
// Relay Errors
// =============================================================================

/// Errors while forwarding a submission to the webhook.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The multipart body could not be built.
    #[error("An error occurred: {0}")]
    Payload(String),

    /// Network failure before a response arrived.
    #[error("An error occurred: {0}")]
    Transport(String),

    /// The webhook answered with a non-success status.
    #[error("Submission failed: {status} {reason}. Details: {body}")]
    Status { status: u16, reason: String, body: String },

    /// The webhook answered 2xx but the body is not JSON.
    #[error("Received an invalid response from the server.")]
    InvalidResponse,
}

impl From<RelayError> for SubmissionResult {
    fn from(err: RelayError) -> Self {
        SubmissionResult::failure(err.to_string())
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bind or serve failure.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = RelayError::Status {
            status: 500,
            reason: "Internal Server Error".into(),
            body: "server error".into(),
        };
        let result = SubmissionResult::from(err);
        assert!(!result.success);
        assert_eq!(
            result.message,
            "Submission failed: 500 Internal Server Error. Details: server error"
        );
    }

    #[test]
    fn test_invalid_response_message() {
        let result = SubmissionResult::from(RelayError::InvalidResponse);
        assert!(result.message.contains("invalid response"));
    }

    #[test]
    fn test_config_error_converts_to_server_error() {
        let err: ServerError = ConfigError::MissingWebhookUrl.into();
        assert!(err.to_string().contains("NOVACARD_WEBHOOK_URL"));
    }
}
