//! Interactive chat demo handler
//!
//! Runs a readline-based loop over a [`ChatSession`]. Replies come from the
//! canned-reply mock engine by default, or from the backend `/chat`
//! endpoint with `--remote`.

use crate::api::ApiClient;
use crate::chat::message::Role;
use crate::chat::{ChatSession, ChatState};
use crate::config::Config;
use crate::error::{Result, SeobotError};
use crate::responder::{MockResponder, RemoteResponder, Responder};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

/// Start the interactive chat demo
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `remote` - Answer from the backend instead of canned replies
/// * `session_id` - Backend session id (required with `remote`)
/// * `seed` - Optional RNG seed override for deterministic behavior
pub async fn run_chat(
    config: Config,
    remote: bool,
    session_id: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut chat_config = config.chat.clone();
    if seed.is_some() {
        chat_config.seed = seed;
    }

    let responder: Arc<dyn Responder> = if remote {
        let api = ApiClient::from_config(&config.backend)?;
        let session_id = session_id.ok_or_else(|| {
            SeobotError::Config(
                "chat --remote requires --session <id> from a previous analyze".to_string(),
            )
        })?;
        tracing::info!("Using remote responder for session {}", session_id);
        Arc::new(RemoteResponder::new(api, session_id))
    } else {
        match chat_config.seed {
            Some(seed) => Arc::new(MockResponder::with_seed(seed)?),
            None => Arc::new(MockResponder::new()?),
        }
    };

    let session = ChatSession::new(responder, &chat_config);
    let mut rx = session.subscribe();
    let mut rl = DefaultEditor::new()?;

    // Welcome banner: the session's initial system messages
    let mut printed = 0;
    printed += print_new_messages(&session.snapshot(), printed);
    println!("{}", "Type /help for commands, /quit to leave.".dimmed());
    println!();

    loop {
        match rl.readline(&format!("{} >> ", "you".green())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match trimmed {
                    "/quit" | "/exit" => break,
                    "/help" => {
                        print_help();
                        continue;
                    }
                    "/history" => {
                        print_history(&session.snapshot());
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(trimmed);
                session.send_message(trimmed);
                printed += 1; // the user message we just typed

                println!("{}", "seobot is typing...".dimmed());
                let state = rx.wait_for(|s| !s.is_typing()).await?.clone();

                if let Some(error) = session.take_error() {
                    println!("{} {}", "error:".red().bold(), error);
                }
                printed += print_new_messages(&state, printed);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Print transcript entries past `printed`, skipping user messages
/// (readline already echoed those). Returns how many were printed or
/// skipped so the caller can advance its cursor.
fn print_new_messages(state: &ChatState, printed: usize) -> usize {
    let new_messages = &state.messages[printed.min(state.messages.len())..];
    for message in new_messages {
        if message.role != Role::User {
            println!("{} {}", message.role.colored_tag(), message.content);
        }
    }
    new_messages.len()
}

fn print_history(state: &ChatState) {
    for message in &state.messages {
        println!("{} {}", message.role.colored_tag(), message.content);
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  /history  Show the full transcript");
    println!("  /help     Show this help");
    println!("  /quit     Leave the chat");
}
