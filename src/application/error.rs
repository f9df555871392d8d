// Error taxonomy for the billing use cases
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BillError>;

#[derive(Debug, Error)]
pub enum BillError {
    /// The requested computation is undefined for the given input.
    #[error("{0}")]
    InvalidOperation(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl BillError {
    pub fn validation(message: impl Into<String>) -> Self {
        BillError::Validation(vec![message.into()])
    }
}
