//! Simulation observer trait for progress reporting and data collection.

use vn_agent::Roster;
use vn_core::{AgentId, LocationId, Tick};
use vn_mobility::MovementEvent;
use vn_spatial::LocationGraph;

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: Tick,

    /// Active agents at selection time.
    pub active: usize,

    /// Agents selected to act.
    pub selected: usize,

    pub hops:     usize,
    pub arrivals: usize,

    /// Diversions that actually started a journey.
    pub diversions: usize,

    /// Turn callbacks that returned `Ok`.
    pub turns: usize,

    /// Turn callbacks that returned `Err` (logged and skipped).
    pub failed_turns: usize,
}

/// Read-only view of names, for observers that record human-readable output.
#[derive(Clone, Copy)]
pub struct SimView<'a> {
    pub graph:  &'a LocationGraph,
    pub roster: &'a Roster,
}

impl<'a> SimView<'a> {
    /// Agent name, or `""` for an agent no longer in the roster.
    pub fn agent_name(&self, id: AgentId) -> &'a str {
        self.roster.get(id).map_or("", |a| a.name.as_str())
    }

    pub fn location_name(&self, id: LocationId) -> &'a str {
        self.graph.name(id).unwrap_or("")
    }
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct Arrivals;
///
/// impl SimObserver for Arrivals {
///     fn on_movement(&mut self, event: &MovementEvent, view: SimView<'_>) {
///         if event.is_arrival() {
///             println!("{} reached {}", view.agent_name(event.agent), view.location_name(event.to));
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after selection, before any selected agent is processed.
    fn on_tick_start(&mut self, _tick: Tick, _selected: &[AgentId]) {}

    /// Called for every hop and arrival, in processing order.
    fn on_movement(&mut self, _event: &MovementEvent, _view: SimView<'_>) {}

    /// Called when a diversion starts a journey.
    fn on_diversion(&mut self, _tick: Tick, _agent: AgentId, _destination: LocationId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Checked by [`Sim::run`][crate::Sim::run] between ticks; returning
    /// `true` ends the run before the next tick starts.
    fn should_stop(&self, _tick: Tick) -> bool {
        false
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
