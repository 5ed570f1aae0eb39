use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use snipbin_storage::error::{GetError, InsertError};

/// Unified API error type for all route handlers.
///
/// Rendered as `{"error": <code>, "status": <http status>, "message": ...}`;
/// `InvalidSnippet` adds an `errors` array. Ids and parameter names carried
/// by the variants only feed the message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Snippet not found with id: {0}")]
    NotFound(Uuid),

    #[error("{0}")]
    InternalServerError(String),

    #[error("Missing path parameter: {0}")]
    MissingPathParam(String),

    #[error("Invalid snippet ID: {0}")]
    InvalidSnippetId(String),

    #[error("Invalid snippet JSON")]
    InvalidSnippetJson,

    #[error("Invalid snippet")]
    InvalidSnippet(Vec<String>),
}

impl ApiError {
    /// Wire discriminant, the `error` field of the body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "snippet_not_found",
            ApiError::InternalServerError(_) => "internal_server_error",
            ApiError::MissingPathParam(_) => "missing_path_param",
            ApiError::InvalidSnippetId(_) => "invalid_snippet_id",
            ApiError::InvalidSnippetJson => "invalid_snippet_json",
            ApiError::InvalidSnippet(_) => "invalid_snippet",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingPathParam(_)
            | ApiError::InvalidSnippetId(_)
            | ApiError::InvalidSnippetJson
            | ApiError::InvalidSnippet(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::InternalServerError(msg) = &self {
            tracing::error!("internal error: {msg}");
        }

        let body = ErrorBody {
            error: self.code(),
            status: status.as_u16(),
            message: self.to_string(),
            errors: match &self {
                ApiError::InvalidSnippet(errors) => Some(errors.as_slice()),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<GetError> for ApiError {
    fn from(e: GetError) -> Self {
        match e {
            GetError::NotFound(id) => ApiError::NotFound(id),
            GetError::Failure(message) => ApiError::InternalServerError(message),
        }
    }
}

impl From<InsertError> for ApiError {
    fn from(e: InsertError) -> Self {
        match e {
            InsertError::Failure(message) => ApiError::InternalServerError(message),
        }
    }
}
