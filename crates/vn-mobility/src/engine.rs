//! High-level mobility engine: installs routes and advances agents one hop at
//! a time.

use std::collections::VecDeque;

use tracing::{debug, info};
use vn_core::{AgentId, LocationId, Tick};
use vn_spatial::{LocationGraph, Router, SpatialError};

use crate::{MobilityResult, MobilityStore, MovementEvent, MovementKind, MovementState};

/// Result of a movement request that did not fail outright.
///
/// Only `Started` changes state.  The other three are normal refusals and
/// leave the agent exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A route was installed; the agent arrives after `steps` processed ticks.
    Started { steps: usize },
    /// The agent is already standing on the destination.
    AlreadyThere,
    /// The agent is already travelling; its current route is untouched.
    Busy,
    /// No admissible path on this floor for this agent.
    Unreachable,
}

impl MoveOutcome {
    #[inline]
    pub fn started(&self) -> bool {
        matches!(self, MoveOutcome::Started { .. })
    }
}

/// Wraps a [`Router`] and [`MobilityStore`] to provide the movement API used
/// by vn-sim.
///
/// # Type parameter
///
/// `R` must implement [`Router`] (e.g. [`vn_spatial::BfsRouter`]).  Swap it
/// at compile time for a different search or access policy.
pub struct MobilityEngine<R: Router> {
    /// The routing algorithm.
    pub router: R,

    /// All per-agent movement state.
    pub store: MobilityStore,
}

impl<R: Router> MobilityEngine<R> {
    pub fn new(router: R) -> Self {
        Self { router, store: MobilityStore::new() }
    }

    pub fn register(&mut self, agent: AgentId) {
        self.store.register(agent);
    }

    pub fn unregister(&mut self, agent: AgentId) -> Option<MovementState> {
        self.store.unregister(agent)
    }

    pub fn state(&self, agent: AgentId) -> MobilityResult<&MovementState> {
        self.store.get(agent)
    }

    pub fn is_en_route(&self, agent: AgentId) -> MobilityResult<bool> {
        Ok(self.store.get(agent)?.is_en_route())
    }

    /// Start `agent` travelling from `from` (its current location) to
    /// `destination`.
    ///
    /// Checks run in this order: the agent is registered, both locations
    /// exist and share a floor, the agent is not already travelling (`Busy`),
    /// the destination differs from `from` (`AlreadyThere`), and a route
    /// exists (`Unreachable`).  Malformed requests fail even for a busy agent.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` for an unknown agent.
    /// - `Routing(LocationNotFound)` for an unknown location.
    /// - `Routing(CrossFloor)` when the destination is on another floor.
    pub fn request_move(
        &mut self,
        agent:       AgentId,
        from:        LocationId,
        destination: LocationId,
        graph:       &LocationGraph,
    ) -> MobilityResult<MoveOutcome> {
        let en_route = self.store.get(agent)?.is_en_route();
        let (from_floor, to_floor) = (graph.floor(from)?, graph.floor(destination)?);
        if from_floor != to_floor {
            return Err(SpatialError::CrossFloor { from, to: destination, from_floor, to_floor }.into());
        }
        if en_route {
            debug!(%agent, "move request refused: already en route");
            return Ok(MoveOutcome::Busy);
        }
        if from == destination {
            return Ok(MoveOutcome::AlreadyThere);
        }

        let Some(route) = self.router.route(graph, from, destination, agent)? else {
            debug!(%agent, %from, %destination, "no admissible path");
            return Ok(MoveOutcome::Unreachable);
        };

        let remaining_path: VecDeque<LocationId> = route.locations.into_iter().skip(1).collect();
        let steps = remaining_path.len();
        debug!(%agent, %from, %destination, steps, "route installed");

        *self.store.get_mut(agent)? = MovementState::EnRoute { destination, remaining_path };
        Ok(MoveOutcome::Started { steps })
    }

    /// Move an en-route agent one hop and report it.
    ///
    /// `location` is the agent's current location and is updated in place.
    /// Returns `Ok(None)` for an idle agent.  The hop that consumes the last
    /// path element sets `location` to the recorded destination, returns the
    /// agent to `Idle`, and is reported as a single `Arrival`.
    ///
    /// The next location is re-checked against the router's access rules
    /// first.  If the agent may no longer enter it (an ownership change
    /// between ticks), the journey is abandoned: the agent settles `Idle`
    /// where it stands and no event is emitted.
    pub fn advance_one_hop(
        &mut self,
        agent:    AgentId,
        location: &mut LocationId,
        graph:    &LocationGraph,
        now:      Tick,
    ) -> MobilityResult<Option<MovementEvent>> {
        let state = self.store.get_mut(agent)?;
        let MovementState::EnRoute { destination, remaining_path } = state else {
            return Ok(None);
        };
        let Some(&next) = remaining_path.front() else {
            // An empty EnRoute path is never installed; recover by settling.
            *state = MovementState::Idle;
            return Ok(None);
        };
        if !self.router.admits(agent, graph.location(next)?) {
            info!(%agent, at = %location, blocked = %next, tick = %now, "route blocked; journey abandoned");
            *state = MovementState::Idle;
            return Ok(None);
        }
        remaining_path.pop_front();

        let from = *location;
        let event = if remaining_path.is_empty() {
            let destination = *destination;
            *location = destination;
            *state = MovementState::Idle;
            info!(%agent, %destination, tick = %now, "arrived");
            MovementEvent { agent, tick: now, from, to: destination, kind: MovementKind::Arrival }
        } else {
            *location = next;
            debug!(%agent, %from, to = %next, steps_left = remaining_path.len(), "hop");
            MovementEvent { agent, tick: now, from, to: next, kind: MovementKind::Hop }
        };
        Ok(Some(event))
    }
}
