//! Per-page routing and front-matter facts.
//!
//! `PageContext` is the **sole per-render input** to the pipeline, supplied
//! by the host once per page. It is immutable: every derived value
//! (canonical URL, breadcrumbs, graph) is computed fresh from it and
//! discarded after the head patch is serialized.
//!
//! # Fields
//!
//! | Field           | Example                    | Used By             |
//! |-----------------|----------------------------|---------------------|
//! | `relative_path` | `guide/installation.md`    | url, breadcrumb     |
//! | `title`         | `Installation`             | og:title, graph     |
//! | `description`   | `How to install the tool`  | og:description      |
//! | `last_updated`  | `1735689600000` (epoch ms) | article timestamps  |

use serde::Deserialize;

/// Routing and front-matter facts for a single page render.
///
/// Deserializable from host front-matter; missing optional fields are
/// substituted with site-level defaults during synthesis, never rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageContext {
    /// Slash-separated source path, e.g. `guide/installation.md`.
    pub relative_path: String,

    /// Page title from front-matter (site title if absent).
    pub title: Option<String>,

    /// Page description from front-matter (site description if absent).
    pub description: Option<String>,

    /// Last-updated timestamp in epoch milliseconds
    /// (current time if absent).
    pub last_updated: Option<i64>,
}

impl PageContext {
    /// Create a context from a relative path alone.
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            ..Self::default()
        }
    }

    /// Whether this page is the site home (`index.md` at the content root).
    pub fn is_home(&self) -> bool {
        self.relative_path == "index.md"
    }
}
