//! Interactive chat session handler
//!
//! Runs a readline loop that submits user input to the Ollama server and
//! prints the reply. One request is in flight at a time: the loop blocks
//! on each generation call before accepting further input. Errors become
//! the assistant's message text for the current turn only; they never end
//! the session and never touch the continuation token.

use crate::client::OllamaClient;
use crate::commands::models;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::time::Instant;

/// Slash commands recognized inside the chat loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlashCommand {
    /// Reset the conversation: clear turns and drop the continuation token
    Clear,
    /// List models pulled on the server
    Models,
    /// Show available commands
    Help,
    /// Leave the session
    Exit,
    /// Not a slash command; submit as a prompt
    None,
}

/// Parse a trimmed input line into a slash command
fn parse_slash_command(input: &str) -> SlashCommand {
    match input {
        "/clear" => SlashCommand::Clear,
        "/models" => SlashCommand::Models,
        "/help" => SlashCommand::Help,
        "/quit" | "/exit" => SlashCommand::Exit,
        _ => SlashCommand::None,
    }
}

/// Start an interactive chat session
///
/// # Arguments
///
/// * `config` - Validated configuration (consumed)
///
/// # Errors
///
/// Returns an error only for setup failures (HTTP client, readline);
/// per-turn inference failures are rendered into the conversation.
pub async fn run_chat(config: Config) -> Result<()> {
    tracing::info!(
        "Starting chat session: host={}, model={}, timeout={}s",
        config.host,
        config.model,
        config.timeout_seconds
    );

    let client = OllamaClient::new(&config.host)?;
    let mut session = Session::new();
    let mut rl = DefaultEditor::new()?;

    print_welcome_banner(&config);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_slash_command(trimmed) {
                    SlashCommand::Clear => {
                        session.reset();
                        println!("{}\n", "Conversation cleared.".yellow());
                        continue;
                    }
                    SlashCommand::Models => {
                        models::print_inline_list(&client).await;
                        println!();
                        continue;
                    }
                    SlashCommand::Help => {
                        print_help();
                        continue;
                    }
                    SlashCommand::Exit => break,
                    SlashCommand::None => {}
                }

                rl.add_history_entry(trimmed)?;
                session.push_user(trimmed);

                // One outstanding generation call at a time; the loop blocks
                // here until the call completes or fails.
                let started = Instant::now();
                let outcome = client
                    .generate(
                        &config.model,
                        trimmed,
                        config.timeout(),
                        session.context(),
                    )
                    .await;
                let elapsed = started.elapsed();

                let (text, token) = match outcome {
                    Ok(reply) => (reply.text, reply.context),
                    Err(e) => {
                        tracing::warn!("Generation failed: {}", e);
                        (e.user_message(), None)
                    }
                };

                println!("{}", text.green());
                println!(
                    "{}\n",
                    format!("({} turns, {:.2}s)", session.len() + 1, elapsed.as_secs_f64()).dimmed()
                );
                session.push_assistant(text, token);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        }
    }

    println!("{}", "Goodbye.".cyan());
    Ok(())
}

/// Display the welcome banner with the active settings
fn print_welcome_banner(config: &Config) {
    println!("{}", "TinyChat — chat with a local language model".bold());
    println!(
        "Model: {}  Timeout: {}s  Server: {}",
        config.model.cyan(),
        config.timeout_seconds,
        config.host
    );
    println!("Type /help for commands.\n");
}

/// Display available slash commands
fn print_help() {
    println!("Commands:");
    println!("  /clear   Clear the conversation and start fresh");
    println!("  /models  List models pulled on the server");
    println!("  /help    Show this help");
    println!("  /quit    Exit (also /exit, Ctrl-C, Ctrl-D)");
    println!();
}
