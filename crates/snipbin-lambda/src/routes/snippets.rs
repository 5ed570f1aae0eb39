use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, RawPathParamsRejection};
use axum::extract::{RawPathParams, State};
use axum::http::StatusCode;
use jiff::Timestamp;
use uuid::Uuid;

use snipbin_core::clock;
use snipbin_core::models::snippet::{CreateSnippetRequest, Snippet};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the path parameter holding the snippet id.
pub const SNIPPET_ID_PARAM: &str = "id";

pub async fn get_snippet(
    State(state): State<AppState>,
    params: Result<RawPathParams, RawPathParamsRejection>,
) -> Result<Json<Snippet>, ApiError> {
    let raw = params
        .ok()
        .and_then(|params| {
            params
                .iter()
                .find(|(name, _)| *name == SNIPPET_ID_PARAM)
                .map(|(_, value)| value.to_string())
        })
        .ok_or_else(|| ApiError::MissingPathParam(SNIPPET_ID_PARAM.to_string()))?;

    let id = Uuid::parse_str(&raw).map_err(|_| ApiError::InvalidSnippetId(raw.clone()))?;

    let snippet = state.repository.get(id).await?;

    // Expired records stay in storage; they just stop being served. Compared
    // at full precision so a snippet goes away the instant it expires.
    if snippet.is_expired_at(Timestamp::now()) {
        tracing::debug!(snippet_id = %id, "snippet expired");
        return Err(ApiError::NotFound(id));
    }

    Ok(Json(snippet))
}

pub async fn create_snippet(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Snippet>), ApiError> {
    let body = body.map_err(|e| {
        tracing::debug!(error = %e, "unreadable snippet body");
        ApiError::InvalidSnippetJson
    })?;

    let request: CreateSnippetRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "malformed snippet JSON");
        ApiError::InvalidSnippetJson
    })?;

    let created_at = clock::now();
    let snippet = request.into_snippet(Uuid::new_v4(), created_at);

    let snippet = state.validator.validate_at(snippet, created_at).map_err(|errors| {
        ApiError::InvalidSnippet(errors.iter().map(ToString::to_string).collect())
    })?;

    state.repository.insert(&snippet).await?;
    tracing::info!(snippet_id = %snippet.id, "snippet created");

    Ok((StatusCode::CREATED, Json(snippet)))
}
