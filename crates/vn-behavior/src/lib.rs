//! `vn-behavior` — the agent-turn callback contract.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`context`] | `TurnContext<'a>` — read-only view handed to one agent's turn   |
//! | [`outcome`] | `TurnOutcome` enum (`Stay`, `MoveTo`)                           |
//! | [`model`]   | `TurnModel` trait                                               |
//! | [`noop`]    | `NoopTurns` — placeholder that always stays put                 |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! A selected agent that is neither travelling nor diverting gets a turn.
//! vn-sim calls `TurnModel::take_turn` synchronously, one agent at a time, in
//! selection order.  The returned outcome is applied immediately: `MoveTo`
//! becomes a movement request through the mobility engine, so the agent starts
//! travelling on its next selected tick.
//!
//! A turn that returns `Err` is logged and skipped.  Movement state is never
//! touched by a failing turn.

pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod outcome;


pub use context::TurnContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::TurnModel;
pub use noop::NoopTurns;
pub use outcome::TurnOutcome;
