use thiserror::Error;
use vn_core::CoreError;
use vn_mobility::MobilityError;
use vn_schedule::ScheduleError;
use vn_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error("scheduler configuration error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
