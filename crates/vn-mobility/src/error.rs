use thiserror::Error;
use vn_core::AgentId;
use vn_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0} has no movement state registered")]
    NotRegistered(AgentId),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
