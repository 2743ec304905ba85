use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backing store refused the operation. The in-memory store never
    /// produces this; other repository implementations may.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn storage(msg: impl Into<String>) -> Self { Self::Storage(msg.into()) }
}
