//! Read-only state passed to every turn callback.

use vn_core::{AgentId, LocationId, Tick};
use vn_spatial::LocationGraph;

/// What an agent's turn gets to see.
///
/// Built by vn-sim for each agent that takes a turn.  Names are resolved up
/// front so collaborators that only produce text never need to touch the
/// graph; `graph` is there for models that want to pick a destination.
pub struct TurnContext<'a> {
    pub agent: AgentId,

    /// The agent's unique name.
    pub name: &'a str,

    /// Where the agent is standing.
    pub location: LocationId,

    /// Name of `location`.
    pub location_name: &'a str,

    /// Current simulation tick.
    pub tick: Tick,

    /// The venue.
    pub graph: &'a LocationGraph,
}

impl<'a> TurnContext<'a> {
    #[inline]
    pub fn new(
        agent:         AgentId,
        name:          &'a str,
        location:      LocationId,
        location_name: &'a str,
        tick:          Tick,
        graph:         &'a LocationGraph,
    ) -> Self {
        Self { agent, name, location, location_name, tick, graph }
    }

    /// Neighbours of the agent's current location, in stored edge order.
    pub fn exits(&self) -> &'a [LocationId] {
        self.graph.neighbors(self.location).unwrap_or(&[])
    }
}
