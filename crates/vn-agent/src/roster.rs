//! The `Roster`: every agent, enumerable in a stable order.
//!
//! Agents are kept in a `BTreeMap` keyed by `AgentId`.  Ids are handed out
//! sequentially and never reused, so ascending-id order is also insertion
//! order and stays stable across removals.  The scheduler relies on this for
//! its rotation.

use std::collections::{BTreeMap, HashMap};

use vn_core::{AgentId, CoreError, CoreResult};

use crate::{Agent, AgentSpec};

#[derive(Debug, Default)]
pub struct Roster {
    agents:  BTreeMap<AgentId, Agent>,
    by_name: HashMap<String, AgentId>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new agent.
    ///
    /// The caller is responsible for checking that `spec.home` exists in the
    /// location graph; the roster does not know about locations.
    pub fn add(&mut self, spec: AgentSpec) -> CoreResult<AgentId> {
        if self.by_name.contains_key(&spec.name) {
            return Err(CoreError::DuplicateAgent(spec.name));
        }
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.by_name.insert(spec.name.clone(), id);
        self.agents.insert(id, Agent::from_spec(id, spec));
        Ok(id)
    }

    /// Remove an agent, returning its final record.
    pub fn remove(&mut self, id: AgentId) -> CoreResult<Agent> {
        let agent = self.agents.remove(&id).ok_or(CoreError::AgentNotFound(id))?;
        self.by_name.remove(&agent.name);
        Ok(agent)
    }

    pub fn get(&self, id: AgentId) -> CoreResult<&Agent> {
        self.agents.get(&id).ok_or(CoreError::AgentNotFound(id))
    }

    pub fn get_mut(&mut self, id: AgentId) -> CoreResult<&mut Agent> {
        self.agents.get_mut(&id).ok_or(CoreError::AgentNotFound(id))
    }

    pub fn id_of(&self, name: &str) -> CoreResult<AgentId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownAgent(name.to_owned()))
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Ids of active agents in ascending id order.
    pub fn active_ids(&self) -> Vec<AgentId> {
        self.agents
            .values()
            .filter(|a| a.active)
            .map(|a| a.id)
            .collect()
    }

    pub fn set_active(&mut self, id: AgentId, active: bool) -> CoreResult<()> {
        self.get_mut(id)?.active = active;
        Ok(())
    }

    pub fn set_diversion_eligible(&mut self, id: AgentId, eligible: bool) -> CoreResult<()> {
        self.get_mut(id)?.diversion_eligible = eligible;
        Ok(())
    }
}
