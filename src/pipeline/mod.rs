//! The per-page metadata transformation pipeline.
//!
//! Three pure sub-steps executed once per page render:
//!
//! ```text
//! transform_page(config, page)
//!     │
//!     ├── url::resolve()        ──► canonical URL
//!     ├── breadcrumb::build()   ──► Home → … → page trail
//!     └── graph::synthesize()   ──► JSON-LD graph + head entries
//!                                        │
//!                                        ▼
//!                              PageTransform (head patch)
//! ```
//!
//! Every invocation is a pure function over its own `PageContext`; the host
//! may render pages in parallel without any cross-invocation ordering.

pub mod breadcrumb;
pub mod graph;
pub mod url;

use crate::{config::SiteConfig, head::HeadEntry, page::PageContext};
use breadcrumb::Crumb;

// ============================================================================
// Public API
// ============================================================================

/// The metadata patch produced for a single page.
///
/// Returned by value so ownership is explicit: the host either extends its
/// own head list via [`PageTransform::apply_to`] or consumes the entries
/// directly.
#[derive(Debug, Clone)]
pub struct PageTransform {
    /// Canonical absolute URL of the page.
    pub canonical_url: String,
    /// Breadcrumb trail, Home first.
    pub breadcrumbs: Vec<Crumb>,
    /// Ordered head entries: canonical link, `og:` tags, JSON-LD script.
    pub head: Vec<HeadEntry>,
}

impl PageTransform {
    /// Append this patch's head entries to a host-owned head list.
    pub fn apply_to(&self, head: &mut Vec<HeadEntry>) {
        head.extend(self.head.iter().cloned());
    }
}

/// Run the full pipeline for one page.
///
/// Pure and infallible: derives the canonical URL, builds the breadcrumb
/// trail, and synthesizes the structured-data graph plus head entries.
pub fn transform_page(config: &SiteConfig, page: &PageContext) -> PageTransform {
    let site_url = config.site_url();

    let canonical_url = url::resolve(site_url, &page.relative_path);
    let breadcrumbs = breadcrumb::build(site_url, &page.relative_path, &canonical_url);

    let mut head = Vec::with_capacity(8);
    graph::synthesize(config, page, &canonical_url, &breadcrumbs, &mut head);

    PageTransform {
        canonical_url,
        breadcrumbs,
        head,
    }
}

// ============================================================================
// Tests
// ============================================================================
