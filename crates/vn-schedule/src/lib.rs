//! `vn-schedule` — which agents act on a tick, and when they take a break.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`selector`]   | `TickScheduler`, `SelectorConfig`, `SelectionTier`          |
//! | [`diversion`]  | `DiversionPolicy` — cooldown plus probability gate          |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                        |
//!
//! # Fairness
//!
//! The candidate list is rotated by `tick mod |A|` before truncation, so over
//! any `|A|` consecutive ticks (with a fixed roster) every active agent heads
//! the rotation exactly once.  When the inclusion filter rejects everyone,
//! the head of the rotation is still returned, so no tick with active agents
//! goes without a turn.

pub mod diversion;
pub mod error;
pub mod selector;

#[cfg(test)]
mod tests;

pub use diversion::DiversionPolicy;
pub use error::{ScheduleError, ScheduleResult};
pub use selector::{SelectionTier, SelectorConfig, TickScheduler};
