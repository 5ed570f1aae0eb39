use std::collections::HashMap;

use async_trait::async_trait;
use snipbin_core::models::snippet::Snippet;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{GetError, InsertError};
use crate::repository::SnippetRepository;

/// In-process [`SnippetRepository`]. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySnippetRepository {
    snippets: RwLock<HashMap<Uuid, Snippet>>,
}

impl MemorySnippetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.snippets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snippets.read().await.is_empty()
    }
}

#[async_trait]
impl SnippetRepository for MemorySnippetRepository {
    async fn insert(&self, snippet: &Snippet) -> Result<(), InsertError> {
        self.snippets
            .write()
            .await
            .insert(snippet.id, snippet.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Snippet, GetError> {
        self.snippets
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(GetError::NotFound(id))
    }
}
