//! `vn-core` — foundational types for the venue simulation engine.
//!
//! This crate is a dependency of every other `vn-*` crate.  It has no `vn-*`
//! dependencies and only two external ones (`rand` and `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `LocationId`                               |
//! | [`time`]        | `Tick`, `TickClock`, `SimConfig`                      |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seeded `SmallRng`)    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, LocationId};
pub use rng::{RandomSource, SimRng};
pub use time::{SimConfig, Tick, TickClock};
