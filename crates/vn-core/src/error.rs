//! Base error type shared by the roster and the simulation layer.
//!
//! Sub-crates define their own enums (`SpatialError`, `MobilityError`, …) and
//! `vn-sim` wraps all of them with `#[from]` conversions.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no agent named {0:?}")]
    UnknownAgent(String),

    #[error("an agent named {0:?} already exists")]
    DuplicateAgent(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vn-core` and the roster.
pub type CoreResult<T> = Result<T, CoreError>;
