//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! `vn-mobility` calls routing via the [`Router`] trait, so applications can
//! swap in a different search (weighted corridors, staff-only enforcement)
//! without touching the movement state machine.  The default [`BfsRouter`]
//! minimises hop count, which is the only cost the engine measures.

use std::collections::VecDeque;

use vn_core::{AgentId, LocationId};

use crate::{AccessPolicy, Location, LocationGraph, PrivateRoomPolicy, SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of locations from source to destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub locations: Vec<LocationId>,
}

impl Route {
    /// Number of edge traversals (one tick each).
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.hops() == 0
    }

    pub fn destination(&self) -> Option<LocationId> {
        self.locations.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` on behalf of `agent`.
    ///
    /// - `Ok(Some(route))`: an admissible path; `[to]` when `from == to`.
    /// - `Ok(None)`: no admissible path under floor and access constraints.
    /// - `Err(CrossFloor)`: the endpoints are on different floors.
    /// - `Err(LocationNotFound)`: either endpoint is unknown.
    fn route(
        &self,
        graph: &LocationGraph,
        from:  LocationId,
        to:    LocationId,
        agent: AgentId,
    ) -> SpatialResult<Option<Route>>;

    /// Whether `agent` may step into `location` right now, under the same
    /// rules [`route`](Self::route) applies to waypoints.  Movement re-checks
    /// this before every hop.
    fn admits(&self, agent: AgentId, location: &Location) -> bool;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search bounded to the starting floor and filtered by an
/// [`AccessPolicy`].
#[derive(Debug, Clone, Default)]
pub struct BfsRouter<P: AccessPolicy = PrivateRoomPolicy> {
    pub policy: P,
}

impl BfsRouter {
    pub fn new() -> Self {
        Self { policy: PrivateRoomPolicy }
    }
}

impl<P: AccessPolicy> BfsRouter<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }
}

impl<P: AccessPolicy> Router for BfsRouter<P> {
    fn route(
        &self,
        graph: &LocationGraph,
        from:  LocationId,
        to:    LocationId,
        agent: AgentId,
    ) -> SpatialResult<Option<Route>> {
        bfs(graph, from, to, agent, &self.policy)
    }

    #[inline]
    fn admits(&self, agent: AgentId, location: &Location) -> bool {
        self.policy.can_enter(agent, location)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs<P: AccessPolicy>(
    graph:  &LocationGraph,
    from:   LocationId,
    to:     LocationId,
    agent:  AgentId,
    policy: &P,
) -> SpatialResult<Option<Route>> {
    let from_floor = graph.floor(from)?;
    let to_floor = graph.floor(to)?;

    if from == to {
        return Ok(Some(Route { locations: vec![to] }));
    }
    if from_floor != to_floor {
        return Err(SpatialError::CrossFloor { from, to, from_floor, to_floor });
    }

    let n = graph.len();
    let mut visited = vec![false; n];
    // prev[v] = location v was discovered from; INVALID for undiscovered.
    let mut prev = vec![LocationId::INVALID; n];

    visited[from.index()] = true;
    let mut frontier = VecDeque::from([from]);

    while let Some(current) = frontier.pop_front() {
        for &next in graph.neighbors(current)? {
            if visited[next.index()] {
                continue;
            }
            // Filter at expansion: a forbidden location is never queued, so it
            // can never appear as a waypoint.
            let candidate = graph.location(next)?;
            if candidate.floor != from_floor || !policy.can_enter(agent, candidate) {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()] = current;

            if next == to {
                return Ok(Some(reconstruct(&prev, to)));
            }
            frontier.push_back(next);
        }
    }

    Ok(None)
}

fn reconstruct(prev: &[LocationId], to: LocationId) -> Route {
    let mut locations = vec![to];
    let mut cur = to;
    while prev[cur.index()] != LocationId::INVALID {
        cur = prev[cur.index()];
        locations.push(cur);
    }
    locations.reverse();
    Route { locations }
}
