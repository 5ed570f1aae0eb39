//! Storage key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of snippet objects in the backing key-value store.

use uuid::Uuid;

pub const SNIPPETS_PREFIX: &str = "snippets/";

pub fn snippet(id: Uuid) -> String {
    format!("{SNIPPETS_PREFIX}{id}.json")
}
