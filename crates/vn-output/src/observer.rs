//! `EventLogObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;
use vn_core::Tick;
use vn_mobility::MovementEvent;
use vn_sim::{SimObserver, SimView, TickReport};

use crate::row::{MovementEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every movement event, plus a tick summary
/// every `summary_every` ticks, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:        W,
    summary_every: u64,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    /// Summarise every tick.
    pub fn new(writer: W) -> Self {
        Self::with_summary_interval(writer, 1)
    }

    /// Summarise ticks that are a multiple of `every`; `0` disables summaries.
    pub fn with_summary_interval(writer: W, every: u64) -> Self {
        Self { writer, summary_every: every, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for EventLogObserver<W> {
    fn on_movement(&mut self, event: &MovementEvent, view: SimView<'_>) {
        let row = MovementEventRow::from_event(event, view);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        if self.summary_every == 0 || !report.tick.0.is_multiple_of(self.summary_every) {
            return;
        }
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
