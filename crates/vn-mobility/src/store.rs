//! The `MobilityStore`: movement state for every registered agent.

use std::collections::HashMap;

use vn_core::AgentId;

use crate::{MobilityError, MobilityResult, MovementState};

/// Movement state keyed by agent.
///
/// Agents are registered `Idle` when they join the roster and unregistered
/// when they leave.  Deactivating an agent does not touch its entry, so a
/// journey is frozen in place and resumes on reactivation.
#[derive(Debug, Default)]
pub struct MobilityStore {
    states: HashMap<AgentId, MovementState>,
}

impl MobilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` as `Idle`.  Re-registering resets it to `Idle`.
    pub fn register(&mut self, agent: AgentId) {
        self.states.insert(agent, MovementState::Idle);
    }

    /// Drop `agent`'s state, returning it if it was registered.
    pub fn unregister(&mut self, agent: AgentId) -> Option<MovementState> {
        self.states.remove(&agent)
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.states.contains_key(&agent)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, agent: AgentId) -> MobilityResult<&MovementState> {
        self.states.get(&agent).ok_or(MobilityError::NotRegistered(agent))
    }

    pub fn get_mut(&mut self, agent: AgentId) -> MobilityResult<&mut MovementState> {
        self.states.get_mut(&agent).ok_or(MobilityError::NotRegistered(agent))
    }

    /// Number of agents currently travelling.
    pub fn en_route_count(&self) -> usize {
        self.states.values().filter(|s| s.is_en_route()).count()
    }
}
