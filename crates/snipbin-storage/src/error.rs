use thiserror::Error;
use uuid::Uuid;

/// Low-level failures from the S3 object layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}

/// Errors from [`SnippetRepository::insert`](crate::repository::SnippetRepository::insert).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("{0}")]
    Failure(String),
}

/// Errors from [`SnippetRepository::get`](crate::repository::SnippetRepository::get).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetError {
    #[error("Snippet with id '{0}' not found")]
    NotFound(Uuid),

    #[error("{0}")]
    Failure(String),
}
