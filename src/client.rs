//! Ollama inference client
//!
//! This module implements the HTTP exchange with a local Ollama server:
//! a fast liveness probe, the non-streaming generation call carrying the
//! continuation token, and model listing via the tags endpoint.
//!
//! The generation timeout is user-configurable and can be large (up to
//! 300 seconds), so every generation call is preceded by a probe with a
//! short fixed timeout; a down server fails in seconds instead of holding
//! the session for the full configured timeout.

use crate::error::{ChatError, Result};
use crate::session::ContextToken;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama endpoint
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Fixed timeout for the liveness probe and the tags endpoint, in seconds
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Placeholder shown when a 2xx generation response carries no text
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received";

/// Request body for `/api/generate`
///
/// The continuation token is included only when a prior successful
/// exchange produced one.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a ContextToken>,
}

/// Response body from `/api/generate`
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    context: Option<ContextToken>,
}

/// Response body from `/api/tags`
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

/// One locally pulled model as reported by `/api/tags`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTag {
    /// Model name including tag, e.g. `tinyllama:latest`
    pub name: String,
    /// On-disk size in bytes, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Result of one successful generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReply {
    /// Text to display as the assistant's turn
    pub text: String,
    /// New continuation token, when the server returned one
    pub context: Option<ContextToken>,
}

/// HTTP client for a single Ollama server
///
/// Stateless with respect to prior calls: the continuation token is
/// threaded in explicitly by the caller, and on any failure the caller's
/// token is left untouched.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tinychat::client::OllamaClient;
///
/// # async fn example() -> Result<(), tinychat::ChatError> {
/// let client = OllamaClient::new("http://localhost:11434")?;
/// let reply = client
///     .generate("tinyllama", "Hello!", Duration::from_secs(120), None)
///     .await?;
/// println!("{}", reply.text);
/// # Ok(())
/// # }
/// ```
pub struct OllamaClient {
    client: Client,
    host: String,
    probe_timeout: Duration,
}

impl OllamaClient {
    /// Create a client for the given host, e.g. `http://localhost:11434`
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Transport` if HTTP client initialization fails
    pub fn new(host: impl Into<String>) -> Result<Self, ChatError> {
        let client = Client::builder()
            .user_agent(concat!("tinychat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChatError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let host = host.into();
        let host = host.trim_end_matches('/').to_string();
        tracing::debug!("Initialized Ollama client for {}", host);

        Ok(Self {
            client,
            host,
            probe_timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
        })
    }

    /// Override the probe timeout
    ///
    /// The default is the fixed [`PROBE_TIMEOUT_SECS`]; tests shorten it to
    /// exercise probe failure without waiting out the full five seconds.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// The host this client talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Liveness probe against the server root
    ///
    /// Any HTTP response counts as "server is up", including non-2xx
    /// statuses; only a transport failure (connection refused, timeout,
    /// DNS failure) reports the server as unreachable. No retry.
    pub async fn ping(&self) -> Result<(), ChatError> {
        let url = format!("{}/", self.host);
        match self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => {
                tracing::debug!("Liveness probe answered with {}", response.status());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Liveness probe failed: {}", e);
                Err(ChatError::ServerUnreachable(e.to_string()))
            }
        }
    }

    /// Run one non-streaming generation call
    ///
    /// Probes the server first and short-circuits with
    /// [`ChatError::ServerUnreachable`] when it is down, without touching
    /// the generation endpoint. On success returns the reply text (or the
    /// [`NO_RESPONSE_PLACEHOLDER`] when the body carries no `response`
    /// field) and the new continuation token when one was returned.
    ///
    /// # Arguments
    ///
    /// * `model` - Model name, e.g. `tinyllama`
    /// * `prompt` - The user's text for this turn
    /// * `timeout` - Generation timeout; reported back in the error on expiry
    /// * `context` - Continuation token from the previous successful exchange
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
        context: Option<&ContextToken>,
    ) -> Result<GenerateReply, ChatError> {
        self.ping().await?;

        let url = format!("{}/api/generate", self.host);
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            context,
        };

        tracing::debug!(
            "Sending generation request: model={}, timeout={}s, has_context={}",
            model,
            timeout.as_secs(),
            context.is_some()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_request_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama returned error {}: {}", status, body);
            return Err(ChatError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse generation response: {}", e);
            ChatError::MalformedResponse(e.to_string())
        })?;

        Ok(GenerateReply {
            text: reply
                .response
                .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()),
            context: reply.context,
        })
    }

    /// List locally pulled models via `/api/tags`
    ///
    /// An empty list is a valid outcome (server reachable, zero models
    /// pulled) and is distinct from an error.
    pub async fn list_models(&self) -> Result<Vec<ModelTag>, ChatError> {
        let url = format!("{}/api/tags", self.host);
        tracing::debug!("Fetching models from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to fetch models: {}", e);
                ChatError::ServerUnreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama returned error {}: {}", status, body);
            return Err(ChatError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse tags response: {}", e);
            ChatError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!("Fetched {} models", tags.models.len());
        Ok(tags.models)
    }
}

/// Map a reqwest failure on the generation call into the error taxonomy
///
/// Timeouts are reported with the configured value so the user sees which
/// setting to raise; refused connections (server went down between probe
/// and call) stay distinguishable from other transport failures.
fn classify_request_error(e: reqwest::Error, timeout: Duration) -> ChatError {
    if e.is_timeout() {
        tracing::warn!("Generation call exceeded {}s timeout", timeout.as_secs());
        ChatError::Timeout {
            seconds: timeout.as_secs(),
        }
    } else if e.is_connect() {
        tracing::warn!("Generation call could not connect: {}", e);
        ChatError::ServerUnreachable(e.to_string())
    } else {
        tracing::error!("Generation call failed: {}", e);
        ChatError::Transport(e.to_string())
    }
}
