//! Landing page model and markup.
//!
//! [`LandingPage`] is plain data: head metadata, marketing copy and the
//! call-to-action pointing at the GitHub App install URL. [`LandingPage::render`]
//! turns it into a complete HTML5 document. All text and attribute values go
//! through maud's escaping, so operator-supplied values cannot break out of
//! the markup.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::install_url::InstallUrl;
use crate::style::STYLESHEET;

/// Product name shown in the heading and footer copy.
pub const BRAND: &str = "CodeGuardian AI";

const TITLE: &str = "CodeGuardian AI - Automated Security Reviews";
const DESCRIPTION: &str =
    "Get AI-powered security reviews directly in your GitHub Pull Requests.";
const FAVICON_HREF: &str = "/favicon.ico";
const TAGLINE: [&str; 2] = [
    "Supercharge your code reviews with AI-driven security analysis.",
    "Get instant feedback on potential vulnerabilities directly in your GitHub Pull Requests.",
];
const CTA_LABEL: &str = "Install GitHub App";
const CTA_NOTE: &str = "Start securing your Python projects today!";
const FOOTER: &str = "Powered by AI";

/// Document-level metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Contents of `<title>`.
    pub title: String,
    /// Contents of `<meta name="description">`.
    pub description: String,
    /// Target of `<link rel="icon">`.
    pub favicon_href: String,
}

/// The install button and the note under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    /// Button text.
    pub label: String,
    /// Link target; opens in a new tab.
    pub href: InstallUrl,
    /// Small print under the button.
    pub note: String,
}

/// The marketing landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    /// Head metadata.
    pub meta: PageMeta,
    /// Product name linked from the heading.
    pub brand: String,
    /// Description paragraph, one entry per visual line.
    pub tagline_lines: Vec<String>,
    /// Install button and its note.
    pub cta: CallToAction,
    /// Footer line.
    pub footer: String,
}

impl LandingPage {
    /// Build the landing page with the standard copy and the given install URL.
    #[must_use]
    pub fn new(install_url: InstallUrl) -> Self {
        Self {
            meta: PageMeta {
                title: TITLE.to_owned(),
                description: DESCRIPTION.to_owned(),
                favicon_href: FAVICON_HREF.to_owned(),
            },
            brand: BRAND.to_owned(),
            tagline_lines: TAGLINE.iter().map(|&line| line.to_owned()).collect(),
            cta: CallToAction {
                label: CTA_LABEL.to_owned(),
                href: install_url,
                note: CTA_NOTE.to_owned(),
            },
            footer: FOOTER.to_owned(),
        }
    }

    /// The URL the call-to-action links to.
    pub fn install_url(&self) -> &InstallUrl {
        &self.cta.href
    }

    /// Render the full HTML document.
    pub fn render(&self) -> Markup {
        let body = html! {
            div.container {
                main.main {
                    h1.title {
                        "Welcome to "
                        a href="#" { (self.brand) }
                    }
                    p.description {
                        @for (i, line) in self.tagline_lines.iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                    div."cta-container" {
                        a."cta-button"
                            href=(self.cta.href.as_str())
                            target="_blank"
                            rel="noopener noreferrer" {
                            (self.cta.label)
                        }
                        p."subtle-text" { (self.cta.note) }
                    }
                }
                footer.footer {
                    p { (self.footer) }
                }
            }
        };
        document(&self.meta, &body)
    }

    /// Render the full HTML document to a string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new(InstallUrl::placeholder())
    }
}

/// Page served for unknown paths, and exported as `404.html`.
///
/// Static hosts serve the same error document for every path, so the path is
/// optional.
pub fn not_found_page(path: Option<&str>) -> Markup {
    let meta = PageMeta {
        title: format!("Page not found - {BRAND}"),
        description: DESCRIPTION.to_owned(),
        favicon_href: FAVICON_HREF.to_owned(),
    };
    let body = html! {
        div.container {
            main.main."not-found" {
                h1.title { "Page not found" }
                p.description {
                    @if let Some(path) = path {
                        "Nothing lives at " code { (path) } "."
                    } @else {
                        "The page you are looking for does not exist."
                    }
                }
                div."cta-container" {
                    a."cta-button" href="/" { "Back to " (BRAND) }
                }
            }
            footer.footer {
                p { (FOOTER) }
            }
        }
    };
    document(&meta, &body)
}

fn document(meta: &PageMeta, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                link rel="icon" href=(meta.favicon_href);
                style { (PreEscaped(STYLESHEET)) }
            }
            body { (body) }
        }
    }
}
