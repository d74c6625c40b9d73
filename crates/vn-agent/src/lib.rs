//! `vn-agent` — agent roster for the venue simulation engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `Agent` (per-agent record), `AgentSpec` (input)           |
//! | [`roster`]  | `Roster` — ordered id map with name index                 |
//!
//! Movement state is not stored here: it lives in `vn-mobility`'s
//! `MobilityStore`, keyed by the same `AgentId`, so the roster can be borrowed
//! immutably while movement is mutated.

pub mod agent;
pub mod roster;


pub use agent::{Agent, AgentSpec};
pub use roster::Roster;
