//! TinyChat - terminal chat client for a local Ollama server
//!
//! This library provides the pieces behind the `tinychat` binary:
//!
//! - `client`: HTTP exchange with the inference server (liveness probe,
//!   generation call, model listing)
//! - `session`: conversation turns and the opaque continuation token for
//!   one interactive session
//! - `config`: defaults and bounds for the per-session settings
//! - `error`: typed error taxonomy and result alias
//! - `cli`: command-line interface definition
//! - `commands`: handlers wiring the above into the terminal
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tinychat::{OllamaClient, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OllamaClient::new("http://localhost:11434")?;
//!     let mut session = Session::new();
//!
//!     session.push_user("Hello!");
//!     let reply = client
//!         .generate("tinyllama", "Hello!", Duration::from_secs(120), session.context())
//!         .await?;
//!     session.push_assistant(reply.text, reply.context);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use client::{GenerateReply, ModelTag, OllamaClient};
pub use config::Config;
pub use error::{ChatError, Result};
pub use session::{ChatTurn, ContextToken, Role, Session};
