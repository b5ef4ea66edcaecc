//! `[seo]` section configuration.
//!
//! Facts that only surface inside the structured-data graph: the
//! representative image, licensing, and the software-application shape of
//! the home page (category, operating system, offer).

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[seo]` section in docmeta.toml - structured-data facts.
///
/// # Example
/// ```toml
/// [seo]
/// image = "https://example.com/logo.png"
/// application_category = "DeveloperApplication"
/// operating_system = "Windows, macOS, Linux"
/// license = "https://opensource.org/licenses/MIT"
/// price = "0"
/// currency = "USD"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Representative image URL for og:image and graph nodes.
    #[serde(default)]
    pub image: Option<String>,

    /// schema.org applicationCategory for the home-page node.
    #[serde(default = "defaults::seo::application_category")]
    #[educe(Default = defaults::seo::application_category())]
    pub application_category: String,

    /// schema.org operatingSystem for the home-page node.
    #[serde(default = "defaults::seo::operating_system")]
    #[educe(Default = defaults::seo::operating_system())]
    pub operating_system: String,

    /// License URL for the home-page node.
    #[serde(default)]
    pub license: Option<String>,

    /// Offer price for the home-page node ("0" for free software).
    #[serde(default = "defaults::seo::price")]
    #[educe(Default = defaults::seo::price())]
    pub price: String,

    /// Offer price currency.
    #[serde(default = "defaults::seo::currency")]
    #[educe(Default = defaults::seo::currency())]
    pub currency: String,
}
