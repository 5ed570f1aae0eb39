use async_trait::async_trait;
use aws_sdk_s3::Client;
use snipbin_core::keys;
use snipbin_core::models::snippet::Snippet;
use uuid::Uuid;

use crate::error::{GetError, InsertError, StorageError};
use crate::objects;
use crate::repository::SnippetRepository;

/// [`SnippetRepository`] backed by S3, one JSON object per snippet.
#[derive(Clone)]
pub struct S3SnippetRepository {
    client: Client,
    bucket: String,
}

impl S3SnippetRepository {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn put(&self, snippet: &Snippet) -> Result<(), StorageError> {
        let key = keys::snippet(snippet.id);
        let body = serde_json::to_vec(snippet)?;
        objects::put_object(&self.client, &self.bucket, &key, body, "application/json").await
    }

    async fn fetch(&self, id: Uuid) -> Result<Snippet, StorageError> {
        let key = keys::snippet(id);
        let body = objects::get_object(&self.client, &self.bucket, &key).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SnippetRepository for S3SnippetRepository {
    async fn insert(&self, snippet: &Snippet) -> Result<(), InsertError> {
        self.put(snippet).await.map_err(|e| {
            tracing::warn!(snippet_id = %snippet.id, error = %e, "snippet insert failed");
            InsertError::Failure(e.to_string())
        })
    }

    async fn get(&self, id: Uuid) -> Result<Snippet, GetError> {
        self.fetch(id).await.map_err(|e| match e {
            StorageError::NotFound { .. } => GetError::NotFound(id),
            other => {
                tracing::warn!(snippet_id = %id, error = %other, "snippet fetch failed");
                GetError::Failure(other.to_string())
            }
        })
    }
}
