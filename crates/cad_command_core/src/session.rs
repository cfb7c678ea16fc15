//! Per-turn orchestration with a single-slot in-flight guard.
//!
//! Turns are processed strictly in submission order: a second reply must not
//! be dispatched while a prior dispatch is outstanding, or interleaved
//! engine mutations could land on the wrong object. Interpretation itself is
//! pure and cheap to discard; once dispatch begins it runs to completion.

use crate::command::Command;
use crate::decode::interpret;
use crate::dispatch::{dispatch, DispatchResult};
use crate::engine::CadEngine;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
    System,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "AI",
            Self::System => "System",
        }
    }
}

/// One `{sender, text}` pair for the user-facing transcript. The core does
/// not format or style this output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub command: Command,
    pub result: DispatchResult,
    pub transcript: Vec<TranscriptLine>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// A prior turn's dispatch is still outstanding.
    #[error("a command is already in flight; try again in a moment")]
    Busy,
}

pub struct Session<E> {
    engine: E,
    turn_slot: Mutex<()>,
}

impl<E: CadEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            turn_slot: Mutex::new(()),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Interpret one raw model reply and dispatch it. Rejects with
    /// `TurnError::Busy` while a previous dispatch is outstanding rather
    /// than queueing; any queueing policy belongs to the UI collaborator.
    pub async fn submit(&self, raw_reply: &str) -> Result<TurnOutcome, TurnError> {
        let _slot = self.turn_slot.try_lock().map_err(|_| TurnError::Busy)?;

        let command = interpret(raw_reply);
        tracing::debug!(action = command.action_name(), "interpreted reply");

        let result = dispatch(&command, &self.engine).await;
        let transcript = transcript_for(&command, &result);

        Ok(TurnOutcome {
            command,
            result,
            transcript,
        })
    }
}

fn transcript_for(command: &Command, result: &DispatchResult) -> Vec<TranscriptLine> {
    let mut lines = Vec::new();
    match command {
        Command::Conversational { text } => lines.push(TranscriptLine {
            sender: Sender::Assistant,
            text: text.clone(),
        }),
        Command::Error { reason } => lines.push(TranscriptLine {
            sender: Sender::Assistant,
            text: reason.clone(),
        }),
        other => lines.push(TranscriptLine {
            sender: Sender::System,
            text: format!("Received command: {}", other.to_wire()),
        }),
    }
    if let DispatchResult::Failed { reason } = result {
        lines.push(TranscriptLine {
            sender: Sender::System,
            text: reason.clone(),
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Axis, MaterialParams, ToggleAction, TransformMode};
    use crate::engine::{EngineError, EngineResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct SlowEngine {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CadEngine for SlowEngine {
        async fn rotate_axis(&self, _axis: Axis, _degrees: f64) -> EngineResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(())
        }
        async fn scale(&self, _factor: f64) -> EngineResult {
            Ok(())
        }
        async fn translate(&self, _x: f64, _y: f64, _z: f64) -> EngineResult {
            Ok(())
        }
        async fn set_color(&self, _hex: &str) -> EngineResult {
            Ok(())
        }
        async fn select_part(&self, _name: &str) -> EngineResult {
            Err(EngineError::rejected("no such part"))
        }
        async fn set_transform_mode(&self, _mode: TransformMode) -> EngineResult {
            Ok(())
        }
        async fn set_material(&self, _params: MaterialParams) -> EngineResult {
            Ok(())
        }
        async fn toggle(&self, _action: ToggleAction) -> EngineResult {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_submit_interprets_and_dispatches() {
        let session = Session::new(SlowEngine {
            calls: AtomicUsize::new(0),
        });
        let outcome = session
            .submit("{\"action\":\"rotateAxis\",\"value\":{\"axis\":\"x\"}}")
            .await
            .unwrap();
        assert_eq!(
            outcome.command,
            Command::RotateAxis {
                axis: Axis::X,
                degrees: 90.0
            }
        );
        assert_eq!(outcome.result, DispatchResult::Completed);
        assert_eq!(session.engine().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_second_submit_rejected_while_in_flight() {
        let session = Arc::new(Session::new(SlowEngine {
            calls: AtomicUsize::new(0),
        }));

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("{\"action\":\"rotateAxis\"}").await })
        };
        // Let the first turn take the slot and park inside the engine call.
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(
            session.submit("{\"action\":\"resetView\"}").await,
            Err(TurnError::Busy)
        );

        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome.result, DispatchResult::Completed);

        // Slot released after completion; the next turn goes through.
        assert!(session.submit("{\"action\":\"show\"}").await.is_ok());
    }

    #[tokio::test]
    async fn test_chat_turn_produces_assistant_line() {
        let session = Session::new(SlowEngine {
            calls: AtomicUsize::new(0),
        });
        let outcome = session.submit("Happy to help!").await.unwrap();
        assert_eq!(outcome.result, DispatchResult::Skipped);
        assert_eq!(
            outcome.transcript,
            vec![TranscriptLine {
                sender: Sender::Assistant,
                text: "Happy to help!".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_dispatch_reported_in_transcript() {
        let session = Session::new(SlowEngine {
            calls: AtomicUsize::new(0),
        });
        let outcome = session
            .submit("{\"action\":\"selectPart\",\"value\":\"flange\"}")
            .await
            .unwrap();
        assert_eq!(
            outcome.result,
            DispatchResult::Failed {
                reason: "no such part".to_string()
            }
        );
        assert_eq!(outcome.transcript.len(), 2);
        assert_eq!(outcome.transcript[1].sender, Sender::System);
        assert_eq!(outcome.transcript[1].text, "no such part");
    }
}
