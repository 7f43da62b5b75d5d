//! Model listing command
//!
//! Queries the Ollama tags endpoint and renders the locally pulled
//! models. An empty list is informational (server reachable, zero models
//! pulled), not an error.

use crate::client::OllamaClient;
use crate::config::Config;
use crate::error::Result;

use colored::Colorize;
use prettytable::{cell, row, Table};

/// List models pulled on the Ollama server
///
/// # Arguments
///
/// * `config` - Configuration carrying the server host
/// * `json` - Output a JSON array instead of a table
///
/// # Errors
///
/// Returns an error with actionable guidance when the server is
/// unreachable or answers with a non-200 status
pub async fn list_models(config: &Config, json: bool) -> Result<()> {
    let client = OllamaClient::new(&config.host)?;

    let models = client
        .list_models()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if models.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("{}", zero_models_hint());
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        let mut table = Table::new();
        table.add_row(row!["NAME", "SIZE"]);
        for model in &models {
            table.add_row(row![model.name, render_size(model.size)]);
        }
        table.printstd();
    }

    Ok(())
}

/// Print the model list inline, bullet style, for use inside the chat loop
///
/// Failures are displayed rather than propagated so a listing problem
/// never ends the chat session.
pub async fn print_inline_list(client: &OllamaClient) {
    match client.list_models().await {
        Ok(models) if models.is_empty() => {
            println!("{}", zero_models_hint().yellow());
        }
        Ok(models) => {
            for model in &models {
                println!("• {} ({})", model.name, render_size(model.size));
            }
        }
        Err(e) => {
            println!("{}", e.user_message().red());
        }
    }
}

/// Informational text for the zero-models outcome
fn zero_models_hint() -> String {
    "No models found. Try pulling one with 'ollama pull tinyllama'".to_string()
}

/// Format an optional byte size for display
pub fn render_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format_size(bytes),
        None => "size unknown".to_string(),
    }
}

/// Format byte size for display
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.1}{}", size, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512.0B");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(1048576), "1.0MB");
        assert_eq!(format_size(1073741824), "1.0GB");
    }

    #[test]
    fn test_render_size_known() {
        assert_eq!(render_size(Some(637_699_456)), "608.2MB");
    }

    #[test]
    fn test_render_size_unknown() {
        assert_eq!(render_size(None), "size unknown");
    }

    #[test]
    fn test_zero_models_hint_mentions_pull() {
        assert!(zero_models_hint().contains("ollama pull"));
    }
}
