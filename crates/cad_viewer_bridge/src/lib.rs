//! CAD Viewer Bridge
//!
//! Async JSON-RPC client for a running CAD viewer process, and the concrete
//! `CadEngine` capability the command protocol dispatches into. Structured
//! config, error handling, and one RPC method per viewer capability.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;

pub use client::ViewerClient;
pub use config::ViewerConfig;
pub use error::BridgeError;

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
