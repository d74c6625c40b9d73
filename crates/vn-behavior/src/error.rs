use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The external collaborator (text generator, chat sink, …) failed.
    #[error("turn collaborator failed: {0}")]
    Collaborator(String),

    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
