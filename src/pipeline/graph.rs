//! Structured-data graph synthesis.
//!
//! Assembles the JSON-LD document describing a page for search engines and
//! social previews, and appends it together with canonical/Open-Graph tags
//! to the page's head patch.
//!
//! # Graph Shape
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@graph": [
//!     { "@type": "WebSite", ... },            // home page only
//!     { "@type": "SoftwareApplication", ... } // home, or TechArticle otherwise
//!     { "@type": "BreadcrumbList", ... }      // always
//!   ]
//! }
//! ```
//!
//! Invariants: exactly one WebSite node iff the page is home, exactly one
//! primary content node always, exactly one BreadcrumbList node always.

use crate::{
    config::SiteConfig,
    head::HeadEntry,
    page::PageContext,
    pipeline::breadcrumb::{Crumb, display_name},
    utils::date,
};
use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// JSON-LD context identifier
const SCHEMA_CONTEXT: &str = "https://schema.org";

// ============================================================================
// Public API
// ============================================================================

/// Synthesize the structured-data graph for a page and append the resulting
/// head entries (canonical link, `og:` tags, JSON-LD script) to `head`.
///
/// All inputs are either present or substituted with computed defaults
/// (current time, derived section label); this never fails.
pub fn synthesize(
    config: &SiteConfig,
    page: &PageContext,
    canonical_url: &str,
    breadcrumbs: &[Crumb],
    head: &mut Vec<HeadEntry>,
) {
    synthesize_at(config, page, canonical_url, breadcrumbs, date::now_ms(), head);
}

/// `synthesize` with an explicit clock, so callers (and tests) control the
/// timestamp fallback.
fn synthesize_at(
    config: &SiteConfig,
    page: &PageContext,
    canonical_url: &str,
    breadcrumbs: &[Crumb],
    now_ms: i64,
    head: &mut Vec<HeadEntry>,
) {
    let title = page.title.as_deref().unwrap_or(&config.base.title);
    let description = page
        .description
        .as_deref()
        .unwrap_or(&config.base.description);

    head.push(HeadEntry::canonical(canonical_url));
    head.push(HeadEntry::meta("og:title", title));
    head.push(HeadEntry::meta("og:description", description));
    head.push(HeadEntry::meta("og:url", canonical_url));
    head.push(HeadEntry::meta(
        "og:type",
        if page.is_home() { "website" } else { "article" },
    ));
    if let Some(image) = &config.seo.image {
        head.push(HeadEntry::meta("og:image", image));
    }

    let document = build_graph(config, page, canonical_url, breadcrumbs, now_ms);
    head.push(HeadEntry::json_ld(
        serde_json::to_string(&document).unwrap_or_default(),
    ));
}

// ============================================================================
// Graph Assembly
// ============================================================================

/// Build the ordered node list for a page.
fn build_graph(
    config: &SiteConfig,
    page: &PageContext,
    canonical_url: &str,
    breadcrumbs: &[Crumb],
    now_ms: i64,
) -> JsonLdDocument {
    let author = Person::new(&config.base.author, config.base.author_url.clone());
    let publisher = Organization::new(&config.base.title, config.seo.image.clone());

    let title = page.title.as_deref().unwrap_or(&config.base.title);
    let description = page
        .description
        .as_deref()
        .unwrap_or(&config.base.description);

    let mut graph = Vec::with_capacity(3);

    if page.is_home() {
        graph.push(Node::WebSite(WebSite {
            name: config.base.title.clone(),
            url: canonical_url.to_string(),
            description: config.base.description.clone(),
            author: author.clone(),
        }));
        graph.push(Node::SoftwareApplication(SoftwareApplication {
            name: title.to_string(),
            description: description.to_string(),
            url: canonical_url.to_string(),
            image: config.seo.image.clone(),
            author,
            publisher,
            application_category: config.seo.application_category.clone(),
            operating_system: config.seo.operating_system.clone(),
            license: config.seo.license.clone(),
            offers: Offer::new(&config.seo.price, &config.seo.currency),
        }));
    } else {
        let timestamp = date::iso8601_from_millis(page.last_updated.unwrap_or(now_ms))
            .unwrap_or_default();
        graph.push(Node::TechArticle(TechArticle {
            headline: title.to_string(),
            description: description.to_string(),
            url: canonical_url.to_string(),
            image: config.seo.image.clone(),
            author,
            publisher,
            article_section: section_label(&page.relative_path),
            date_published: timestamp.clone(),
            date_modified: timestamp,
        }));
    }

    graph.push(Node::BreadcrumbList(BreadcrumbList::from_trail(breadcrumbs)));

    JsonLdDocument {
        context: SCHEMA_CONTEXT,
        graph,
    }
}

/// Section label from the first path segment, capitalized.
fn section_label(relative_path: &str) -> String {
    let segment = relative_path
        .split('/')
        .find(|s| !s.is_empty())
        .unwrap_or_default();
    let segment = segment.strip_suffix(".md").unwrap_or(segment);
    display_name(segment)
}

// ============================================================================
// JSON-LD Nodes
// ============================================================================

/// The serialized linked-data document: a context identifier plus the
/// ordered `@graph` node array.
#[derive(Debug, Serialize)]
struct JsonLdDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: Vec<Node>,
}

/// A typed node in the `@graph` array.
///
/// The variant name is the schema.org `@type` discriminator; the primary
/// content entity is `SoftwareApplication` on home and `TechArticle`
/// elsewhere.
#[derive(Debug, Serialize)]
#[serde(tag = "@type")]
enum Node {
    WebSite(WebSite),
    SoftwareApplication(SoftwareApplication),
    TechArticle(TechArticle),
    BreadcrumbList(BreadcrumbList),
}

/// Site identity node, emitted on the home page only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebSite {
    name: String,
    url: String,
    description: String,
    author: Person,
}

/// Primary content node for the home page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SoftwareApplication {
    name: String,
    description: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    author: Person,
    publisher: Organization,
    application_category: String,
    operating_system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    offers: Offer,
}

/// Primary content node for every non-home page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TechArticle {
    headline: String,
    description: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    author: Person,
    publisher: Organization,
    article_section: String,
    date_published: String,
    date_modified: String,
}

/// Breadcrumb trail node, wrapping the trail computed by
/// [`crate::pipeline::breadcrumb::build`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreadcrumbList {
    item_list_element: Vec<ListItem>,
}

impl BreadcrumbList {
    fn from_trail(trail: &[Crumb]) -> Self {
        Self {
            item_list_element: trail
                .iter()
                .map(|crumb| ListItem {
                    kind: "ListItem",
                    position: crumb.position,
                    name: crumb.name.clone(),
                    item: crumb.url.clone(),
                })
                .collect(),
        }
    }
}

/// One entry of a BreadcrumbList.
#[derive(Debug, Serialize)]
struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: String,
    item: String,
}

/// schema.org Person, used for author identity.
#[derive(Debug, Clone, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Person {
    fn new(name: &str, url: Option<String>) -> Self {
        Self {
            kind: "Person",
            name: name.to_string(),
            url,
        }
    }
}

/// schema.org Organization, used for publisher identity.
#[derive(Debug, Clone, Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
}

impl Organization {
    fn new(name: &str, logo: Option<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.to_string(),
            logo,
        }
    }
}

/// schema.org Offer for the software-application node.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: String,
    price_currency: String,
}

impl Offer {
    fn new(price: &str, currency: &str) -> Self {
        Self {
            kind: "Offer",
            price: price.to_string(),
            price_currency: currency.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
