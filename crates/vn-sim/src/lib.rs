//! `vn-sim` — tick loop orchestrator for the venue simulation engine.
//!
//! # Tick loop
//!
//! ```text
//! loop until budget spent or observer.should_stop():
//!   ① Select   — TickScheduler advances the clock and picks agents from the
//!                active roster (rotated, windowed, probabilistically filtered).
//!   ② Process  — for each selected agent, in selection order:
//!                  en route          → advance_one_hop   (Hop | Arrival)
//!                  due for diversion → request_move(diversion destination)
//!                  otherwise         → TurnModel::take_turn
//!                                       MoveTo(dest) → request_move(dest)
//!   ③ Report   — observer.on_tick_end(TickReport)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vn_behavior::NoopTurns;
//! use vn_sim::{NoopObserver, SimBuilder, load_config_json};
//! use vn_spatial::BfsRouter;
//!
//! let venue = load_config_json(Path::new("venue.json"))?;
//! let mut sim = SimBuilder::from_config(&venue, NoopTurns, BfsRouter::new())?
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{VenueConfig, load_config_json, load_config_reader};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimView, TickReport};
pub use sim::Sim;
