//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `movement_events.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MovementEventRow, OutputResult, TickSummaryRow};

pub const EVENTS_FILE: &str = "movement_events.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvEventWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvEventWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["tick", "agent_id", "agent", "from_id", "from", "to_id", "to", "kind"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick", "active", "selected", "hops", "arrivals", "diversions", "turns", "failed_turns",
        ])?;

        Ok(Self { events, summaries, finished: false })
    }
}

impl OutputWriter for CsvEventWriter {
    fn write_event(&mut self, row: &MovementEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            row.agent.clone(),
            row.from_id.to_string(),
            row.from.clone(),
            row.to_id.to_string(),
            row.to.clone(),
            row.kind.as_str().to_owned(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.active.to_string(),
            row.selected.to_string(),
            row.hops.to_string(),
            row.arrivals.to_string(),
            row.diversions.to_string(),
            row.turns.to_string(),
            row.failed_turns.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
