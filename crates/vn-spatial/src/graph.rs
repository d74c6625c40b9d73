//! Location graph representation and builder.
//!
//! # Data layout
//!
//! Locations are stored in a `Vec` indexed by [`LocationId`]; each one keeps
//! its outgoing adjacency as an ordered `Vec<LocationId>`.  The order is the
//! order edges were declared, and it is the order BFS expands neighbours in,
//! so route tie-breaking is stable for a given configuration.
//!
//! Adjacency is directed.  A corridor that can be walked both ways must be
//! declared from both ends (or with [`LocationGraphBuilder::add_passage`]).
//!
//! Names are interned once at build time; afterwards the graph is immutable
//! except for the two administrative fields, `owner` and `locked`.

use std::collections::HashMap;

use vn_core::{AgentId, LocationId};

use crate::{SpatialError, SpatialResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named place in the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,

    /// Floor number, starting at 1.
    pub floor: u32,

    /// Carried for extension; does not gate movement.
    pub staff_only: bool,

    pub is_private_room: bool,

    pub description: String,

    /// Outgoing edges, in declaration order.
    pub connections: Vec<LocationId>,

    /// Carried for extension; does not gate movement.
    pub locked: bool,

    /// Owning agent.  Only ever `Some` when `is_private_room` is true.
    owner: Option<AgentId>,
}

impl Location {
    #[inline]
    pub fn owner(&self) -> Option<AgentId> {
        self.owner
    }
}

// ── LocationSpec ──────────────────────────────────────────────────────────────

/// Input description of one location, with connections given by name.
#[derive(Debug, Clone, Default)]
pub struct LocationSpec {
    pub name:            String,
    pub floor:           u32,
    pub staff_only:      bool,
    pub is_private_room: bool,
    pub description:     String,
    pub connections:     Vec<String>,
    pub locked:          bool,
    pub owner:           Option<AgentId>,
}

impl LocationSpec {
    /// A public location on `floor` with no connections.
    pub fn new(name: impl Into<String>, floor: u32) -> Self {
        Self { name: name.into(), floor, ..Self::default() }
    }

    /// Mark as a private room owned by `owner` (or unowned if `None`).
    pub fn private(mut self, owner: Option<AgentId>) -> Self {
        self.is_private_room = true;
        self.owner = owner;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn connect(mut self, to: impl Into<String>) -> Self {
        self.connections.push(to.into());
        self
    }
}

// ── LocationGraph ─────────────────────────────────────────────────────────────

/// Directed location graph with name lookup.
///
/// Do not construct directly; use [`LocationGraphBuilder`].
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: Vec<Location>,
    by_name:   HashMap<String, LocationId>,
}

impl LocationGraph {
    /// A graph with no locations.  Every lookup against it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `true` if a location called `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> SpatialResult<LocationId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SpatialError::UnknownLocation(name.to_owned()))
    }

    pub fn location(&self, id: LocationId) -> SpatialResult<&Location> {
        self.locations
            .get(id.index())
            .ok_or(SpatialError::LocationNotFound(id))
    }

    pub fn name(&self, id: LocationId) -> SpatialResult<&str> {
        self.location(id).map(|l| l.name.as_str())
    }

    /// Outgoing neighbours of `id`, in declaration order.
    pub fn neighbors(&self, id: LocationId) -> SpatialResult<&[LocationId]> {
        self.location(id).map(|l| l.connections.as_slice())
    }

    pub fn floor(&self, id: LocationId) -> SpatialResult<u32> {
        self.location(id).map(|l| l.floor)
    }

    /// Iterate `(LocationId, &Location)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i as u32), l))
    }

    // ── Administrative mutation ───────────────────────────────────────────

    /// Assign (or clear) the owner of a private room.
    ///
    /// Fails with [`SpatialError::NotPrivateRoom`] when `owner` is `Some` and
    /// the location is public.  Clearing is always allowed.
    pub fn set_owner(&mut self, id: LocationId, owner: Option<AgentId>) -> SpatialResult<()> {
        let location = self
            .locations
            .get_mut(id.index())
            .ok_or(SpatialError::LocationNotFound(id))?;
        if owner.is_some() && !location.is_private_room {
            return Err(SpatialError::NotPrivateRoom(id));
        }
        location.owner = owner;
        Ok(())
    }

    pub fn set_locked(&mut self, id: LocationId, locked: bool) -> SpatialResult<()> {
        let location = self
            .locations
            .get_mut(id.index())
            .ok_or(SpatialError::LocationNotFound(id))?;
        location.locked = locked;
        Ok(())
    }
}

// ── LocationGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`LocationGraph`] incrementally, then call [`build`](Self::build).
///
/// Locations may reference each other in any order; names are resolved in
/// `build()`.
///
/// # Example
///
/// ```
/// use vn_spatial::{LocationGraphBuilder, LocationSpec};
///
/// let mut b = LocationGraphBuilder::new();
/// b.add_location(LocationSpec::new("lobby", 1));
/// b.add_location(LocationSpec::new("hall", 1));
/// b.add_passage("lobby", "hall");
/// let graph = b.build().unwrap();
/// assert_eq!(graph.len(), 2);
/// assert!(graph.exists("hall"));
/// ```
#[derive(Default)]
pub struct LocationGraphBuilder {
    specs:       Vec<LocationSpec>,
    extra_edges: Vec<(String, String)>,
}

impl LocationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location.  Ids are assigned in insertion order from 0.
    pub fn add_location(&mut self, spec: LocationSpec) -> LocationId {
        let id = LocationId(self.specs.len() as u32);
        self.specs.push(spec);
        id
    }

    /// Add a **directed** edge `from → to`, appended after any connections
    /// listed in `from`'s spec.
    pub fn add_directed(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.extra_edges.push((from.into(), to.into()));
    }

    /// Convenience: add edges in **both directions**.
    pub fn add_passage(&mut self, a: &str, b: &str) {
        self.add_directed(a, b);
        self.add_directed(b, a);
    }

    /// Validate and produce the graph.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::Config`] for duplicate names or floor 0.
    /// - [`SpatialError::UnknownLocation`] for a connection to an undeclared
    ///   name.
    /// - [`SpatialError::NotPrivateRoom`] for an owner on a public location.
    pub fn build(self) -> SpatialResult<LocationGraph> {
        let mut by_name: HashMap<String, LocationId> = HashMap::with_capacity(self.specs.len());
        for (i, spec) in self.specs.iter().enumerate() {
            if spec.floor == 0 {
                return Err(SpatialError::Config(format!(
                    "location {:?} has floor 0; floors start at 1",
                    spec.name
                )));
            }
            if by_name.insert(spec.name.clone(), LocationId(i as u32)).is_some() {
                return Err(SpatialError::Config(format!(
                    "duplicate location name {:?}",
                    spec.name
                )));
            }
        }

        let resolve = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| SpatialError::UnknownLocation(name.to_owned()))
        };

        let mut locations: Vec<Location> = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.into_iter().enumerate() {
            if spec.owner.is_some() && !spec.is_private_room {
                return Err(SpatialError::NotPrivateRoom(LocationId(i as u32)));
            }
            let connections = spec
                .connections
                .iter()
                .map(|c| resolve(c.as_str()))
                .collect::<SpatialResult<Vec<_>>>()?;
            locations.push(Location {
                name: spec.name,
                floor: spec.floor,
                staff_only: spec.staff_only,
                is_private_room: spec.is_private_room,
                description: spec.description,
                connections,
                locked: spec.locked,
                owner: spec.owner,
            });
        }

        for (from, to) in &self.extra_edges {
            let from = resolve(from.as_str())?;
            let to = resolve(to.as_str())?;
            locations[from.index()].connections.push(to);
        }

        Ok(LocationGraph { locations, by_name })
    }
}
