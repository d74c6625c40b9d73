//! `vn-spatial` — location graph, access control, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Location`, `LocationSpec`, `LocationGraph`, builder        |
//! | [`access`]  | `AccessPolicy` trait, `PrivateRoomPolicy`                   |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`                        |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Routing model
//!
//! Routes never leave the starting floor and never pass through a location
//! the requesting agent may not enter.  Both constraints are checked while the
//! BFS frontier is expanded, so a forbidden waypoint is never queued.  A
//! request spanning floors is rejected up front with
//! [`SpatialError::CrossFloor`]; a request with no admissible path returns
//! `Ok(None)`.

pub mod access;
pub mod error;
pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

pub use access::{AccessPolicy, PrivateRoomPolicy};
pub use error::{SpatialError, SpatialResult};
pub use graph::{Location, LocationGraph, LocationGraphBuilder, LocationSpec};
pub use router::{BfsRouter, Route, Router};
