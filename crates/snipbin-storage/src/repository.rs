use async_trait::async_trait;
use snipbin_core::models::snippet::Snippet;
use uuid::Uuid;

use crate::error::{GetError, InsertError};

/// Durable storage for snippets.
///
/// Each call is a single independent operation against the backing store.
/// Implementations must keep "no such record" ([`GetError::NotFound`])
/// distinct from backend trouble ([`GetError::Failure`]); handlers answer
/// 404 for one and 500 for the other. Retries, if any, happen inside the
/// implementation.
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Store a snippet. Callers always supply a freshly generated id.
    async fn insert(&self, snippet: &Snippet) -> Result<(), InsertError>;

    async fn get(&self, id: Uuid) -> Result<Snippet, GetError>;
}
