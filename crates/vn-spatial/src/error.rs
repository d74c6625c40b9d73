//! Spatial-subsystem error type.

use thiserror::Error;

use vn_core::LocationId;

/// Errors produced by `vn-spatial`.
///
/// "No admissible path" is deliberately *not* an error: routers return
/// `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no location named {0:?}")]
    UnknownLocation(String),

    #[error("location {0} not found in graph")]
    LocationNotFound(LocationId),

    #[error("{from} is on floor {from_floor} but {to} is on floor {to_floor}; cross-floor travel is unsupported")]
    CrossFloor {
        from:       LocationId,
        to:         LocationId,
        from_floor: u32,
        to_floor:   u32,
    },

    #[error("location {0} is not a private room and cannot have an owner")]
    NotPrivateRoom(LocationId),

    #[error("invalid location graph: {0}")]
    Config(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
