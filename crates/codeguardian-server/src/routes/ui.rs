//! Landing page routes.
//!
//! Serves the pre-rendered landing page at `/` (and `/index.html`, which is
//! what static hosting resolves to) plus the favicon. Unknown paths get the
//! HTML not-found page.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::error::AppError;
use crate::state::AppState;

/// Browsers re-request the favicon constantly; let them keep it for a day.
const FAVICON_CACHE_CONTROL: &str = "public, max-age=86400";

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing_page))
        .route("/index.html", get(landing_page))
        .route("/favicon.ico", get(favicon))
}

async fn landing_page(State(state): State<Arc<AppState>>) -> Html<Bytes> {
    Html(state.landing_html.clone())
}

async fn favicon(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/x-icon"),
            (header::CACHE_CONTROL, FAVICON_CACHE_CONTROL),
        ],
        state.favicon.clone(),
    )
}

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route for path");
    AppError::NotFound(uri.path().to_owned())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method,
        path: uri.path().to_owned(),
    }
}
