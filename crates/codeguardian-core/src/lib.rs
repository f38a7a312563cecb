//! Core library for the `CodeGuardian AI` landing site.
//!
//! Holds the landing page model and its markup, the validated GitHub App
//! install URL the call-to-action points at, and the favicon encoder. Rendering
//! is pure: nothing here performs I/O, so the server and the CLI share it
//! unchanged.

pub mod error;
pub mod favicon;
pub mod install_url;
pub mod page;
pub mod style;

pub use error::InstallUrlError;
pub use install_url::{InstallUrl, PLACEHOLDER_INSTALL_URL};
pub use page::{CallToAction, LandingPage, PageMeta, not_found_page};
