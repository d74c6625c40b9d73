use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("selection tiers are empty or all have zero weight")]
    NoTiers,

    #[error("tier share {0} is outside (0, 1]")]
    BadShare(f64),

    #[error("probability {0} is outside [0, 1]")]
    BadProbability(f64),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
