//! Command-line interface definition for TinyChat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing the interactive chat command and model management.

use clap::{Parser, Subcommand};

/// TinyChat - chat with a local language model
///
/// Forwards your text to a locally running Ollama server and prints
/// the model's reply, keeping conversation state for the session.
#[derive(Parser, Debug, Clone)]
#[command(name = "tinychat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for TinyChat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Model name to generate with
        #[arg(short, long)]
        model: Option<String>,

        /// Generation timeout in seconds (10-300)
        ///
        /// Increase this if responses from larger models time out.
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Ollama server URL
        #[arg(long)]
        host: Option<String>,
    },

    /// Manage models on the Ollama server
    Models {
        /// Model management subcommand
        #[command(subcommand)]
        command: ModelCommand,
    },
}

/// Model management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ModelCommand {
    /// List locally pulled models
    List {
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Ollama server URL
        #[arg(long)]
        host: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["tinychat", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat {
            model,
            timeout,
            host,
        } = cli.command
        {
            assert_eq!(model, None);
            assert_eq!(timeout, None);
            assert_eq!(host, None);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_model() {
        let cli = Cli::try_parse_from(["tinychat", "chat", "--model", "phi3:mini"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { model, .. } = cli.command {
            assert_eq!(model, Some("phi3:mini".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_timeout() {
        let cli = Cli::try_parse_from(["tinychat", "chat", "--timeout", "60"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { timeout, .. } = cli.command {
            assert_eq!(timeout, Some(60));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_all_flags() {
        let cli = Cli::try_parse_from([
            "tinychat",
            "chat",
            "--model",
            "mistral:latest",
            "--timeout",
            "300",
            "--host",
            "http://127.0.0.1:11434",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat {
            model,
            timeout,
            host,
        } = cli.command
        {
            assert_eq!(model, Some("mistral:latest".to_string()));
            assert_eq!(timeout, Some(300));
            assert_eq!(host, Some("http://127.0.0.1:11434".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_rejects_non_numeric_timeout() {
        let cli = Cli::try_parse_from(["tinychat", "chat", "--timeout", "soon"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_models_list() {
        let cli = Cli::try_parse_from(["tinychat", "models", "list"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Models {
            command: ModelCommand::List { json, host },
        } = cli.command
        {
            assert!(!json);
            assert_eq!(host, None);
        } else {
            panic!("Expected Models List command");
        }
    }

    #[test]
    fn test_cli_parse_models_list_json() {
        let cli = Cli::try_parse_from(["tinychat", "models", "list", "--json"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Models {
            command: ModelCommand::List { json, .. },
        } = cli.command
        {
            assert!(json);
        } else {
            panic!("Expected Models List command");
        }
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["tinychat", "-v", "chat"]);
        assert!(cli.is_ok());
        assert!(cli.unwrap().verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["tinychat"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["tinychat", "invalid"]);
        assert!(cli.is_err());
    }
}
