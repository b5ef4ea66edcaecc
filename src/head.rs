//! Head-tag descriptors.
//!
//! The pipeline's output boundary is an ordered list of `HeadEntry`
//! descriptors (link/meta/script) that the host serializes into the
//! rendered page's `<head>`. Entries carry plain data; `render` produces
//! the HTML form with attribute escaping.

use serde::Serialize;

// ============================================================================
// Head Entries
// ============================================================================

/// A single head-tag descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadEntry {
    /// `<link rel="..." href="...">`
    Link { rel: String, href: String },

    /// `<meta property="..." content="...">`
    Meta { property: String, content: String },

    /// `<script type="...">...</script>`
    Script {
        #[serde(rename = "type")]
        mime: String,
        body: String,
    },
}

impl HeadEntry {
    /// Canonical link tag pointing at the page's authoritative URL.
    pub fn canonical(href: impl Into<String>) -> Self {
        Self::Link {
            rel: "canonical".into(),
            href: href.into(),
        }
    }

    /// Open Graph (or other `property`-keyed) meta tag.
    pub fn meta(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            property: property.into(),
            content: content.into(),
        }
    }

    /// Embedded JSON-LD structured-data block.
    pub fn json_ld(body: impl Into<String>) -> Self {
        Self::Script {
            mime: "application/ld+json".into(),
            body: body.into(),
        }
    }

    /// Render the entry as an HTML tag.
    ///
    /// Attribute values are escaped; script bodies are emitted verbatim
    /// (the pipeline only ever puts serialized JSON there).
    pub fn render(&self) -> String {
        match self {
            Self::Link { rel, href } => {
                format!(
                    r#"<link rel="{}" href="{}">"#,
                    escape_attr(rel),
                    escape_attr(href)
                )
            }
            Self::Meta { property, content } => {
                format!(
                    r#"<meta property="{}" content="{}">"#,
                    escape_attr(property),
                    escape_attr(content)
                )
            }
            Self::Script { mime, body } => {
                format!(r#"<script type="{}">{}</script>"#, escape_attr(mime), body)
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special characters for HTML attribute values.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
