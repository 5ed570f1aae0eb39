use std::sync::Arc;

use snipbin_core::validation::SnippetValidator;
use snipbin_storage::repository::SnippetRepository;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn SnippetRepository>,
    pub validator: SnippetValidator,
}

impl AppState {
    pub fn new(repository: Arc<dyn SnippetRepository>, validator: SnippetValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }
}
