//! Plain data row types written by output backends.

use vn_mobility::{MovementEvent, MovementKind};
use vn_sim::{SimView, TickReport};

/// One hop or arrival, with names resolved at the time it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementEventRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub agent:    String,
    pub from_id:  u32,
    pub from:     String,
    pub to_id:    u32,
    pub to:       String,
    pub kind:     MovementKind,
}

impl MovementEventRow {
    pub fn from_event(event: &MovementEvent, view: SimView<'_>) -> Self {
        Self {
            tick:     event.tick.0,
            agent_id: event.agent.0,
            agent:    view.agent_name(event.agent).to_owned(),
            from_id:  event.from.0,
            from:     view.location_name(event.from).to_owned(),
            to_id:    event.to.0,
            to:       view.location_name(event.to).to_owned(),
            kind:     event.kind,
        }
    }
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub active:       u64,
    pub selected:     u64,
    pub hops:         u64,
    pub arrivals:     u64,
    pub diversions:   u64,
    pub turns:        u64,
    pub failed_turns: u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:         r.tick.0,
            active:       r.active as u64,
            selected:     r.selected as u64,
            hops:         r.hops as u64,
            arrivals:     r.arrivals as u64,
            diversions:   r.diversions as u64,
            turns:        r.turns as u64,
            failed_turns: r.failed_turns as u64,
        }
    }
}
