//! CAD Command Core
//!
//! Deterministic interpretation of language-model replies for a 3D CAD
//! viewer. A raw reply flows strictly forward — normalized candidate,
//! decoded command, validated command, dispatched effect — and every input
//! maps to exactly one variant of the closed `Command` union. The HTTP
//! transport to the model and the CAD engine itself are collaborators behind
//! narrow seams (an opaque reply string in, the `CadEngine` trait out).

pub mod command;
pub mod decode;
pub mod dispatch;
pub mod engine;
pub mod normalize;
pub mod session;
pub mod validate;

// Re-export the types one turn touches.
pub use command::{Axis, Command, MaterialParams, ToggleAction, TransformMode};
pub use decode::{decode, interpret};
pub use dispatch::{dispatch, DispatchResult};
pub use engine::{CadEngine, EngineError, EngineResult};
pub use normalize::normalize;
pub use session::{Sender, Session, TranscriptLine, TurnError, TurnOutcome};
pub use validate::validate;
