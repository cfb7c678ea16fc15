//! The capability seam between the protocol and the CAD engine collaborator.

use crate::command::{Axis, MaterialParams, ToggleAction, TransformMode};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by an engine capability. Domain refusals (e.g. an
/// action that needs a selection when nothing is selected) are `Rejected`;
/// connectivity problems are `Unavailable`.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{reason}")]
    Rejected { reason: String },

    #[error("CAD engine unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

pub type EngineResult = std::result::Result<(), EngineError>;

/// One capability method per command family. The dispatcher awaits each call
/// to completion, so implementations may be as asynchronous as they like
/// underneath without the protocol observing interleaving.
#[async_trait]
pub trait CadEngine: Send + Sync {
    async fn rotate_axis(&self, axis: Axis, degrees: f64) -> EngineResult;
    async fn scale(&self, factor: f64) -> EngineResult;
    async fn translate(&self, x: f64, y: f64, z: f64) -> EngineResult;
    async fn set_color(&self, hex: &str) -> EngineResult;
    async fn select_part(&self, name: &str) -> EngineResult;
    async fn set_transform_mode(&self, mode: TransformMode) -> EngineResult;
    async fn set_material(&self, params: MaterialParams) -> EngineResult;
    async fn toggle(&self, action: ToggleAction) -> EngineResult;
}
