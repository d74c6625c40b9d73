//! Per-agent record.

use vn_core::{AgentId, LocationId, Tick};

/// Input for [`Roster::add`](crate::Roster::add).
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub name: String,

    /// Job-implied home location; also the initial position.
    pub home: LocationId,

    pub active: bool,

    /// Whether the periodic diversion policy applies to this agent.
    pub diversion_eligible: bool,
}

impl AgentSpec {
    /// An active, non-diverting agent starting at `home`.
    pub fn new(name: impl Into<String>, home: LocationId) -> Self {
        Self { name: name.into(), home, active: true, diversion_eligible: false }
    }

    pub fn diverting(mut self) -> Self {
        self.diversion_eligible = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// One agent in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub home: LocationId,

    /// Where the agent is now.  Updated one hop at a time by the mobility
    /// engine; always a location that exists in the graph.
    pub location: LocationId,

    /// Inactive agents are never selected, so their movement is frozen.
    pub active: bool,

    pub diversion_eligible: bool,

    /// Tick of the last diversion attempt.  Never decreases.
    pub last_diversion: Tick,
}

impl Agent {
    pub(crate) fn from_spec(id: AgentId, spec: AgentSpec) -> Self {
        Self {
            id,
            name: spec.name,
            home: spec.home,
            location: spec.home,
            active: spec.active,
            diversion_eligible: spec.diversion_eligible,
            last_diversion: Tick::ZERO,
        }
    }

    /// Stamp the diversion cooldown.  Earlier ticks are ignored so the stamp
    /// stays monotonic.
    pub fn stamp_diversion(&mut self, now: Tick) {
        self.last_diversion = self.last_diversion.max(now);
    }
}
