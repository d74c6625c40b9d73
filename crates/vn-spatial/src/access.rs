//! Access control: may an agent enter a location?

use vn_core::AgentId;

use crate::Location;

/// Pluggable entry predicate consulted by routers for every candidate
/// location, waypoints included.
pub trait AccessPolicy: Send + Sync {
    fn can_enter(&self, agent: AgentId, location: &Location) -> bool;
}

/// Public locations are open to everyone; a private room admits only its
/// owner, and an unowned private room admits nobody.
///
/// `staff_only` and `locked` are not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivateRoomPolicy;

impl AccessPolicy for PrivateRoomPolicy {
    #[inline]
    fn can_enter(&self, agent: AgentId, location: &Location) -> bool {
        !location.is_private_room || location.owner() == Some(agent)
    }
}
