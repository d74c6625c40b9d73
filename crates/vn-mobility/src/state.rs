//! Per-agent movement state.

use std::collections::VecDeque;

use vn_core::LocationId;

/// The movement state for a single agent.
///
/// `EnRoute` always holds a non-empty `remaining_path`: the engine replaces it
/// with `Idle` in the same step that consumes the last hop.  The number of
/// steps left is the path length, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Idle,

    EnRoute {
        /// Where the journey ends.  Equal to the last element of
        /// `remaining_path`.
        destination: LocationId,

        /// Locations still to be entered, in order.  Excludes the location
        /// the agent is currently standing on.
        remaining_path: VecDeque<LocationId>,
    },
}

impl MovementState {
    #[inline]
    pub fn is_en_route(&self) -> bool {
        matches!(self, MovementState::EnRoute { .. })
    }

    /// Hops left before arrival; zero when `Idle`.
    #[inline]
    pub fn steps_remaining(&self) -> usize {
        match self {
            MovementState::Idle => 0,
            MovementState::EnRoute { remaining_path, .. } => remaining_path.len(),
        }
    }

    pub fn destination(&self) -> Option<LocationId> {
        match self {
            MovementState::Idle => None,
            MovementState::EnRoute { destination, .. } => Some(*destination),
        }
    }

    /// The location the agent will enter on its next processed tick.
    pub fn next_hop(&self) -> Option<LocationId> {
        match self {
            MovementState::Idle => None,
            MovementState::EnRoute { remaining_path, .. } => remaining_path.front().copied(),
        }
    }
}
