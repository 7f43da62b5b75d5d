//! Error types for TinyChat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling. The client-facing
//! variants preserve the failure taxonomy (unreachable server, timeout,
//! server error, malformed response) so callers can match on the kind
//! instead of parsing display strings.

use thiserror::Error;

/// Main error type for TinyChat operations
///
/// The inference client returns these directly; only the presentation
/// layer converts them to user-visible text via [`ChatError::user_message`].
#[derive(Error, Debug)]
pub enum ChatError {
    /// Configuration-related errors (invalid timeout bounds, bad host, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The liveness probe or a request could not reach the server at all
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// The generation call exceeded the configured timeout
    #[error("Request timed out after {seconds} seconds")]
    Timeout {
        /// The configured timeout that was exceeded, in seconds
        seconds: u64,
    },

    /// The server answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    ServerError {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body as returned by the server
        body: String,
    },

    /// Transport-level failure that is neither a timeout nor a refused connection
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChatError {
    /// Render this error as the text shown in place of an assistant reply
    ///
    /// Errors are terminal for the current turn only: they are displayed as
    /// the assistant's message and never crash the session. The wording for
    /// the common failure modes is deliberately actionable.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerUnreachable(_) => {
                "Error: Cannot connect to Ollama. Make sure it's running with 'ollama serve'"
                    .to_string()
            }
            Self::Timeout { seconds } => format!(
                "Error: The model took too long to respond (> {} seconds). Try:\n\
                 1. Increasing the timeout in settings\n\
                 2. Using a smaller model\n\
                 3. Asking a simpler question",
                seconds
            ),
            Self::ServerError { status, body } => format!("Error: {} - {}", status, body),
            other => format!("Error: {}", other),
        }
    }
}

/// Result type alias for TinyChat operations
///
/// Defaults to `anyhow::Error` for command handlers while allowing the
/// inference client to name `ChatError` explicitly at its boundary.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
