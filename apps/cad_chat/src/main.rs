//! Console chat front end for the CAD assistant.
//!
//! Reads user turns from stdin, relays each to the language-model backend,
//! interprets the raw reply through the command protocol, and dispatches the
//! result to the viewer bridge. One turn at a time: the next line is not
//! read until the previous dispatch has reported its outcome.

mod backend;
mod transcript;

use anyhow::{Context, Result};
use backend::{BackendClient, BackendConfig};
use cad_command_core::{Session, TurnError};
use cad_viewer_bridge::{ViewerClient, ViewerConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let backend = BackendClient::connect(BackendConfig::from_env())
        .context("failed to build backend client")?;
    let viewer = ViewerClient::connect(ViewerConfig::from_env())
        .context("failed to build viewer client")?;
    let session = Session::new(viewer);

    println!("CAD assistant ready. Type a command or question; 'quit' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("stdin closed")? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        transcript::print_user(input);
        run_turn(&backend, &session, input).await;
    }

    Ok(())
}

async fn run_turn(backend: &BackendClient, session: &Session<ViewerClient>, input: &str) {
    let raw_reply = match backend.get_reply(input).await {
        Ok(reply) => reply,
        Err(err) => {
            // Transport failure is terminal for the turn and never retried
            // here; the user sees it, the process stays up.
            log::warn!("backend request failed: {err}");
            transcript::print_system("backend unavailable");
            return;
        }
    };

    match session.submit(&raw_reply).await {
        Ok(outcome) => {
            log::debug!(
                "turn complete: action={} ok={}",
                outcome.command.action_name(),
                outcome.result.ok()
            );
            for line in &outcome.transcript {
                transcript::print_line(line);
            }
        }
        Err(TurnError::Busy) => {
            transcript::print_system("a command is still running; input dropped");
        }
    }
}
