/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint:

- `chat`   — Interactive chat session
- `models` — Model listing against the Ollama server

The handlers are intentionally small and use the library components:
the inference client and the session state store. All conversion of
typed client errors into display text happens here, at the
presentation boundary.
*/

pub mod chat;
pub mod models;
