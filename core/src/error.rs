//! Error types for the zoning core.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the zoning core.
///
/// Lifecycle events never fail: they degrade to silent no-ops or to
/// `handled = false` outcomes. `ZonerError` is reserved for genuine contract
/// violations that callers can act on.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum ZonerError {
    /// An algorithm id was registered twice; the original stays in place.
    #[error("algorithm already registered: {0}")]
    DuplicateAlgorithm(String),

    /// A layout references an algorithm id missing from the registry.
    #[error("unknown tiling algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Model (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ZonerError {
    fn from(err: serde_json::Error) -> Self { Self::Serialization(err.to_string()) }
}
