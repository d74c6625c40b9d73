//! `vn-output` — simulation output writers for the venue simulation engine.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `movement_events.csv`, `tick_summaries.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `vn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vn_output::{CsvEventWriter, EventLogObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output"))?;
//! let mut obs = EventLogObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{MovementEventRow, TickSummaryRow};
pub use writer::OutputWriter;
