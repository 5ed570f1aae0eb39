use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored text snippet.
///
/// `id` and `created_at` are stamped by the service at creation and never
/// taken from client input. Timestamps are serialized as epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    pub contents: String,
    #[serde(with = "jiff::fmt::serde::timestamp::second::required")]
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "jiff::fmt::serde::timestamp::second::optional"
    )]
    pub expires_at: Option<Timestamp>,
}

impl Snippet {
    /// Whether the snippet should be treated as gone at `now`.
    ///
    /// Expired snippets may still be physically stored; expiry is only
    /// enforced when they are read.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }
}

/// Body of a create request.
///
/// Has no `id` or `createdAt`; same-named fields in a request body are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnippetRequest {
    #[serde(default)]
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, with = "jiff::fmt::serde::timestamp::second::optional")]
    pub expires_at: Option<Timestamp>,
}

impl CreateSnippetRequest {
    pub fn into_snippet(self, id: Uuid, created_at: Timestamp) -> Snippet {
        Snippet {
            id,
            title: self.title,
            contents: self.contents,
            created_at,
            format: self.format,
            expires_at: self.expires_at,
        }
    }
}
