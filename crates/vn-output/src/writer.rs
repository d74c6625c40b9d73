//! The `OutputWriter` trait implemented by backend writers.

use crate::{MovementEventRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by [`EventLogObserver`][crate::EventLogObserver] and
/// retrieved with its `take_error`, since observer hooks return nothing.
pub trait OutputWriter {
    fn write_event(&mut self, row: &MovementEventRow) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
