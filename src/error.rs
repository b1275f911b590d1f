use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Duplicate id on board: {0}")]
    DuplicateId(String),

    #[error("Unknown id: {0}")]
    UnknownId(String),

    #[error("Invalid grid size: {0} (must be positive)")]
    InvalidGridSize(f64),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
