//! Maps a validated `Command` to its single engine capability call.

use crate::command::Command;
use crate::engine::{CadEngine, EngineError};

/// Outcome of dispatching one command. `Skipped` covers the no-op variants
/// (`Conversational`, `Error`), which are surfaced to the transcript instead
/// of the engine. Engine failures are folded into `Failed`, never allowed to
/// propagate as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Completed,
    Skipped,
    Failed { reason: String },
}

impl DispatchResult {
    pub fn ok(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Invoke the one engine method matching `command`, awaiting completion.
/// Holds no dedup state: the same command dispatched twice performs two
/// independent effects.
pub async fn dispatch(command: &Command, engine: &dyn CadEngine) -> DispatchResult {
    let call = match command {
        Command::Conversational { .. } | Command::Error { .. } => {
            return DispatchResult::Skipped;
        }
        Command::RotateAxis { axis, degrees } => engine.rotate_axis(*axis, *degrees).await,
        Command::Scale { factor } => engine.scale(*factor).await,
        Command::Translate { x, y, z } => engine.translate(*x, *y, *z).await,
        Command::Color { hex } => engine.set_color(hex).await,
        Command::SelectPart { name } => engine.select_part(name).await,
        Command::SetTransformMode { mode } => engine.set_transform_mode(*mode).await,
        Command::SetMaterial(params) => engine.set_material(*params).await,
        Command::Toggle(action) => engine.toggle(*action).await,
    };

    match call {
        Ok(()) => {
            tracing::debug!(action = command.action_name(), "dispatched");
            DispatchResult::Completed
        }
        Err(EngineError::Rejected { reason }) => {
            tracing::warn!(action = command.action_name(), reason = %reason, "engine rejected command");
            DispatchResult::Failed { reason }
        }
        Err(err @ EngineError::Unavailable(_)) => {
            tracing::warn!(action = command.action_name(), "engine unavailable");
            DispatchResult::Failed {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::command::{Axis, MaterialParams, ToggleAction, TransformMode};
    use crate::engine::EngineResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every capability invocation; optionally rejects everything.
    pub struct RecordingEngine {
        pub calls: Mutex<Vec<String>>,
        pub reject_with: Option<String>,
    }

    impl RecordingEngine {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }

        pub fn rejecting(reason: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reject_with: Some(reason.to_string()),
            }
        }

        fn record(&self, call: String) -> EngineResult {
            self.calls.lock().unwrap().push(call);
            match &self.reject_with {
                Some(reason) => Err(EngineError::rejected(reason.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CadEngine for RecordingEngine {
        async fn rotate_axis(&self, axis: Axis, degrees: f64) -> EngineResult {
            self.record(format!("rotate_axis({}, {degrees})", axis.as_str()))
        }
        async fn scale(&self, factor: f64) -> EngineResult {
            self.record(format!("scale({factor})"))
        }
        async fn translate(&self, x: f64, y: f64, z: f64) -> EngineResult {
            self.record(format!("translate({x}, {y}, {z})"))
        }
        async fn set_color(&self, hex: &str) -> EngineResult {
            self.record(format!("set_color({hex})"))
        }
        async fn select_part(&self, name: &str) -> EngineResult {
            self.record(format!("select_part({name})"))
        }
        async fn set_transform_mode(&self, mode: TransformMode) -> EngineResult {
            self.record(format!("set_transform_mode({})", mode.as_str()))
        }
        async fn set_material(&self, params: MaterialParams) -> EngineResult {
            self.record(format!("set_material({params:?})"))
        }
        async fn toggle(&self, action: ToggleAction) -> EngineResult {
            self.record(format!("toggle({})", action.as_str()))
        }
    }
}
