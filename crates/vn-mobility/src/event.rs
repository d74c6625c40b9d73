//! Movement events emitted as agents advance.

use std::fmt;

use vn_core::{AgentId, LocationId, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    /// Entered an intermediate location.
    Hop,
    /// Entered the journey's destination and became idle.
    Arrival,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Hop     => "hop",
            MovementKind::Arrival => "arrival",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edge traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEvent {
    pub agent: AgentId,
    pub tick:  Tick,
    pub from:  LocationId,
    pub to:    LocationId,
    pub kind:  MovementKind,
}

impl MovementEvent {
    #[inline]
    pub fn is_arrival(&self) -> bool {
        self.kind == MovementKind::Arrival
    }
}
