use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Turn a handler panic into an `internal_server_error` response carrying the
/// panic message.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };

    tracing::error!(panic = %message, "handler panicked");
    ApiError::InternalServerError(message).into_response()
}
