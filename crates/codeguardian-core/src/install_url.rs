//! GitHub App installation URL.
//!
//! The landing page's only dynamic value. [`InstallUrl`] keeps the string
//! exactly as the operator supplied it, so the rendered `href` matches the
//! configured value byte for byte, while still rejecting values that a
//! browser could not follow.

use std::fmt;

use url::Url;

use crate::error::InstallUrlError;

/// Default install URL used until a real GitHub App is configured.
pub const PLACEHOLDER_INSTALL_URL: &str =
    "https://github.com/apps/YOUR_APP_NAME/installations/new";

/// App slug in the unconfigured placeholder.
const PLACEHOLDER_SLUG: &str = "YOUR_APP_NAME";

/// GitHub caps app slugs at 34 characters.
const MAX_SLUG_LEN: usize = 34;

/// A validated, absolute `http(s)` URL that starts the GitHub App install flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallUrl(String);

impl InstallUrl {
    /// Validate an explicit install URL.
    ///
    /// # Errors
    ///
    /// Returns [`InstallUrlError`] if `input` is not an absolute URL, uses a
    /// scheme other than `http`/`https`, lacks the `//` authority marker,
    /// contains a backslash, or has no host.
    pub fn parse(input: &str) -> Result<Self, InstallUrlError> {
        let input = input.trim();
        let parsed = Url::parse(input).map_err(|source| InstallUrlError::Parse {
            input: input.to_owned(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InstallUrlError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        }

        // Browsers resolve `https:host/x` against the current page, and treat
        // `\` as `/` in web URLs, so the raw string must already be canonical.
        if !has_authority_prefix(input) || input.contains('\\') {
            return Err(InstallUrlError::NotAbsolute {
                input: input.to_owned(),
            });
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(InstallUrlError::MissingHost {
                input: input.to_owned(),
            });
        }

        Ok(Self(input.to_owned()))
    }

    /// Build the public install URL for the GitHub App with the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`InstallUrlError::InvalidSlug`] if the slug is empty, too long,
    /// contains anything but lowercase ASCII letters, digits and hyphens, or
    /// starts/ends with a hyphen.
    pub fn for_app(slug: &str) -> Result<Self, InstallUrlError> {
        validate_slug(slug)?;
        Ok(Self(format!("https://github.com/apps/{slug}/installations/new")))
    }

    /// Pick the install URL from operator input.
    ///
    /// An explicit URL wins over a slug; with neither, the placeholder is used.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`InstallUrl::parse`] and
    /// [`InstallUrl::for_app`].
    pub fn resolve(url: Option<&str>, slug: Option<&str>) -> Result<Self, InstallUrlError> {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let slug = slug.map(str::trim).filter(|s| !s.is_empty());

        match (url, slug) {
            (Some(url), _) => Self::parse(url),
            (None, Some(slug)) => Self::for_app(slug),
            (None, None) => Ok(Self::placeholder()),
        }
    }

    /// The unconfigured placeholder URL.
    #[must_use]
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_INSTALL_URL.to_owned())
    }

    /// Whether this still points at the placeholder app that needs replacing.
    ///
    /// Only the `/apps/{slug}/` path segment counts; the marker appearing in a
    /// query or fragment does not.
    pub fn is_placeholder(&self) -> bool {
        Url::parse(&self.0).is_ok_and(|url| {
            url.host_str() == Some("github.com")
                && url.path_segments().is_some_and(|mut segments| {
                    segments.next() == Some("apps") && segments.next() == Some(PLACEHOLDER_SLUG)
                })
        })
    }

    /// The URL exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstallUrl {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for InstallUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstallUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn has_authority_prefix(input: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

fn validate_slug(slug: &str) -> Result<(), InstallUrlError> {
    let invalid = |reason| {
        Err(InstallUrlError::InvalidSlug {
            slug: slug.to_owned(),
            reason,
        })
    };

    if slug.is_empty() {
        return invalid("slug is empty");
    }
    if slug.len() > MAX_SLUG_LEN {
        return invalid("slug is longer than 34 characters");
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return invalid("only lowercase letters, digits and '-' are allowed");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return invalid("slug cannot start or end with '-'");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_detected() {
        let url = InstallUrl::placeholder();
        assert!(url.is_placeholder());
        assert_eq!(url.as_str(), PLACEHOLDER_INSTALL_URL);
    }

    #[test]
    fn parse_keeps_input_verbatim() {
        let raw = "https://github.com/apps/codeguardian-ai/installations/new?state=abc&x=1";
        let url = InstallUrl::parse(raw).unwrap();
        assert_eq!(url.as_str(), raw);
        assert!(!url.is_placeholder());
    }

    #[test]
    fn parse_trims_whitespace() {
        let url = InstallUrl::parse("  https://example.com/install \n").unwrap();
        assert_eq!(url.as_str(), "https://example.com/install");
    }

    #[test]
    fn parse_rejects_relative_url() {
        let err = InstallUrl::parse("/apps/foo/installations/new").unwrap_err();
        assert!(matches!(err, InstallUrlError::Parse { .. }));
    }

    #[test]
    fn parse_rejects_javascript_scheme() {
        let err = InstallUrl::parse("javascript:alert(1)").unwrap_err();
        assert!(matches!(
            err,
            InstallUrlError::UnsupportedScheme { ref scheme } if scheme == "javascript"
        ));
    }

    #[test]
    fn parse_rejects_non_web_scheme_with_host() {
        let err = InstallUrl::parse("ftp://github.com/apps/foo").unwrap_err();
        assert!(matches!(err, InstallUrlError::UnsupportedScheme { .. }));
    }

    #[test]
    fn parse_rejects_scheme_without_slashes() {
        for raw in ["https:evil.example/x", "http:/evil.example", "https:/\\evil.example"] {
            let err = InstallUrl::parse(raw).unwrap_err();
            assert!(
                matches!(err, InstallUrlError::NotAbsolute { .. }),
                "{raw:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_backslashes() {
        let err = InstallUrl::parse("https://github.com\\@evil.example/").unwrap_err();
        assert!(matches!(err, InstallUrlError::NotAbsolute { .. }));
    }

    #[test]
    fn parse_accepts_uppercase_scheme() {
        let url = InstallUrl::parse("HTTPS://github.com/apps/foo/installations/new").unwrap();
        assert_eq!(url.as_str(), "HTTPS://github.com/apps/foo/installations/new");
    }

    #[test]
    fn marker_outside_app_segment_is_not_placeholder() {
        let url =
            InstallUrl::parse("https://github.com/apps/real/installations/new?ref=YOUR_APP_NAME")
                .unwrap();
        assert!(!url.is_placeholder());

        let url = InstallUrl::parse(&format!("{PLACEHOLDER_INSTALL_URL}?state=abc")).unwrap();
        assert!(url.is_placeholder());
    }

    #[test]
    fn for_app_builds_github_url() {
        let url = InstallUrl::for_app("codeguardian-ai").unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/apps/codeguardian-ai/installations/new"
        );
    }

    #[test]
    fn for_app_rejects_bad_slugs() {
        let too_long = "x".repeat(35);
        for slug in ["", "Upper", "with space", "-lead", "trail-", "a/b", too_long.as_str()] {
            let err = InstallUrl::for_app(slug).unwrap_err();
            assert!(
                matches!(err, InstallUrlError::InvalidSlug { .. }),
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn resolve_prefers_explicit_url() {
        let url = InstallUrl::resolve(Some("https://example.com/go"), Some("ignored")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/go");
    }

    #[test]
    fn resolve_falls_back_to_slug_then_placeholder() {
        let url = InstallUrl::resolve(None, Some("my-app")).unwrap();
        assert_eq!(url.as_str(), "https://github.com/apps/my-app/installations/new");

        let url = InstallUrl::resolve(Some("   "), None).unwrap();
        assert!(url.is_placeholder());
    }
}
