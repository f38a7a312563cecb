//! Error types for `codeguardian-core`.
//!
//! Rendering itself never fails. The only fallible step is turning operator
//! input (a URL or an app slug) into an [`InstallUrl`](crate::InstallUrl).

/// Errors from building or validating a GitHub App install URL.
#[derive(Debug, thiserror::Error)]
pub enum InstallUrlError {
    /// The value is not an absolute URL.
    #[error("invalid install URL '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Only `http` and `https` links can be followed from the page.
    #[error("unsupported scheme '{scheme}' in install URL (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// The raw value does not start with `http://` or `https://`, or contains
    /// a backslash, so a browser would resolve it differently.
    #[error("install URL '{input}' must start with http:// or https:// and contain no backslashes")]
    NotAbsolute { input: String },

    /// The URL has no host component.
    #[error("install URL '{input}' has no host")]
    MissingHost { input: String },

    /// The GitHub App slug contains characters GitHub never issues.
    #[error("invalid GitHub App slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: &'static str },
}
