//! Interactive terminal chat loop.
//!
//! The synchronous transport shape: a session is created eagerly at
//! startup (a failure here aborts the run, not the process tree), then
//! each line is a blocking call/response turn through the relay. Replies
//! arrive as markdown and are rendered with termimad; `image:` messages
//! print the synthesized URL.

use std::io::Write;

use anyhow::Context;
use console::style;
use rustyline_async::{Readline, ReadlineEvent};
use termimad::MadSkin;
use uuid::Uuid;

use parley_core::relay::RelayReply;

use crate::state::AppState;

/// Run the chat loop until EOF or Ctrl+C.
pub async fn run(state: &AppState, model: Option<String>) -> anyhow::Result<()> {
    // One correlation key per run; the mapping dies with the process.
    let key = Uuid::now_v7().to_string();
    let session_id = state
        .relay
        .ensure_session(&key)
        .await
        .context("failed to create chat session")?;

    let config = state.relay.config();
    println!();
    println!(
        "  {} Connected to {}",
        style("✦").bold(),
        style(&config.api_base_url).cyan()
    );
    println!("  {} Session {}", style("•").dim(), style(&session_id).dim());
    println!(
        "  {}",
        style("Type a message, `image: <prompt>` for an image URL, Ctrl+D to quit").dim()
    );
    println!();

    let (mut rl, mut stdout) = Readline::new("you> ".to_string())?;
    let skin = MadSkin::default_dark();

    loop {
        match rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.clone());

                match state.relay.handle(&key, &line, model.as_deref()).await {
                    Ok(Some(RelayReply::Chat { markdown, .. })) => {
                        writeln!(stdout, "{}", skin.term_text(&markdown))?;
                    }
                    Ok(Some(RelayReply::Image { url, .. })) => {
                        writeln!(stdout, "{} {url}", style("[image]").magenta())?;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        // Surface and keep the loop alive so the user can retry.
                        writeln!(stdout, "{} {err}", style("error:").red().bold())?;
                    }
                }
            }
            Ok(ReadlineEvent::Eof) | Ok(ReadlineEvent::Interrupted) => break,
            Err(err) => {
                tracing::debug!("Readline error: {err}");
                break;
            }
        }
    }

    rl.flush()?;
    println!("\n  Bye.");
    Ok(())
}
