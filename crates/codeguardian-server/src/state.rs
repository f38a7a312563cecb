//! Shared application state for the landing site server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. The page never changes while the process runs,
//! so it is rendered once here and handlers only clone cheap byte buffers.

use axum::body::Bytes;

use codeguardian_core::LandingPage;
use codeguardian_core::favicon::favicon_ico;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// The page model, kept for logging and health output.
    pub page: LandingPage,
    /// Pre-rendered landing page HTML.
    pub landing_html: Bytes,
    /// Encoded `favicon.ico`.
    pub favicon: Bytes,
}

impl AppState {
    /// Render the page and favicon once.
    pub fn new(page: LandingPage) -> Self {
        let landing_html = Bytes::from(page.to_html());
        let favicon = Bytes::from(favicon_ico());
        Self {
            page,
            landing_html,
            favicon,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("install_url", &self.page.install_url().as_str())
            .field("landing_html_len", &self.landing_html.len())
            .finish_non_exhaustive()
    }
}
