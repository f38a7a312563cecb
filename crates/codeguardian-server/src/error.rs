//! HTTP error types for the landing site server.
//!
//! Browsers that wander off the site get the HTML not-found page; anything
//! else produces a JSON body with a machine-readable `error` field and a
//! human-readable `message`.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use codeguardian_core::not_found_page;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No route matches the requested path.
    NotFound(String),
    /// The path exists but does not accept this method.
    MethodNotAllowed { method: Method, path: String },
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(path) => {
                (StatusCode::NOT_FOUND, not_found_page(Some(&path))).into_response()
            }
            Self::MethodNotAllowed { method, path } => {
                let body = ErrorBody {
                    error: "method_not_allowed",
                    message: format!("{method} is not supported on {path}"),
                };
                (StatusCode::METHOD_NOT_ALLOWED, axum::Json(body)).into_response()
            }
        }
    }
}
