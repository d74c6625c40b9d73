//! `vn-mobility` — agent movement state, route installation, and hop
//! advancement.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MovementState` — `Idle` or `EnRoute { destination, path }`       |
//! | [`event`]   | `MovementEvent`, `MovementKind` (`Hop`, `Arrival`)                |
//! | [`store`]   | `MobilityStore` — per-agent movement state keyed by `AgentId`     |
//! | [`engine`]  | `MobilityEngine<R>` — `request_move` + `advance_one_hop`          |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (one hop per processed tick)
//!
//! 1. `MobilityEngine::request_move` asks the [`Router`][vn_spatial::Router]
//!    for a path, drops its first element (the agent's current location) and
//!    installs the rest as the agent's remaining path.
//! 2. Each tick the agent is selected, `advance_one_hop` pops one location and
//!    moves the agent there, emitting a `Hop` event.
//! 3. The hop that empties the path moves the agent onto its destination,
//!    returns it to `Idle` and emits a single `Arrival` event instead.
//!
//! An N-hop journey therefore takes exactly N ticks on which the agent is
//! selected.  Ticks on which it is not selected (or is inactive) leave it
//! where it is.

pub mod engine;
pub mod error;
pub mod event;
pub mod state;
pub mod store;


pub use engine::{MobilityEngine, MoveOutcome};
pub use error::{MobilityError, MobilityResult};
pub use event::{MovementEvent, MovementKind};
pub use state::MovementState;
pub use store::MobilityStore;
