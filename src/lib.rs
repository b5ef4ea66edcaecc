//! Docmeta - a page-metadata pipeline for documentation sites.
//!
//! For every rendered page the pipeline derives a canonical URL, a
//! breadcrumb trail and a JSON-LD structured-data graph, and emits them as
//! an ordered head-tag patch the host framework splices into the document
//! head. The pipeline is pure and synchronous: one invocation per page, no
//! I/O, no shared mutable state, safe under arbitrary parallel rendering.
//!
//! # Usage
//!
//! ```ignore
//! let config: &SiteConfig = /* loaded once per build */;
//! let page = PageContext::new("guide/installation.md");
//!
//! let patch = transform_page(config, &page);
//! // patch.canonical_url: "https://example.com/guide/installation"
//! // patch.breadcrumbs:   Home / Guide / Installation
//! // patch.head:          canonical link, og: tags, JSON-LD script
//! ```

pub mod config;
pub mod head;
pub mod page;
pub mod pipeline;
pub mod utils;

pub use config::SiteConfig;
pub use head::HeadEntry;
pub use page::PageContext;
pub use pipeline::{PageTransform, breadcrumb::Crumb, transform_page};
