//! `[base]` section configuration.
//!
//! Contains basic site identity like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in docmeta.toml - basic site identity.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Tool"
/// description = "Documentation for my tool"
/// author = "Alice"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as WebSite name and og:title fallback.
    pub title: String,

    /// Author name for Person nodes in the structured-data graph.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author homepage URL for Person nodes.
    #[serde(default = "defaults::base::author_url")]
    #[educe(Default = defaults::base::author_url())]
    pub author_url: Option<String>,

    /// Site description for SEO meta tags and the WebSite node.
    pub description: String,

    /// Base URL for canonical links.
    /// Required for canonical URL generation.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US", "zh-Hans").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Docmeta"
            description = "Docmeta docs"
            author = "Alice"
            author_url = "https://alice.dev"
            url = "https://docmeta.dev"
            language = "en-US"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Docmeta");
        assert_eq!(config.base.description, "Docmeta docs");
        assert_eq!(config.base.author, "Alice");
        assert_eq!(config.base.author_url, Some("https://alice.dev".to_string()));
        assert_eq!(config.base.url, Some("https://docmeta.dev".to_string()));
        assert_eq!(config.base.language, "en-US");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test docs"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "<YOUR_NAME>");
        assert_eq!(config.base.author_url, None);
        assert_eq!(config.base.language, "en-US");
        assert_eq!(config.base.url, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test docs"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_url_with_path() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test docs"
            url = "https://example.com/docs"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.url, Some("https://example.com/docs".to_string()));
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "My Docs 🚀"
            description = "Docs with unicode"
            author = "René"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Docs 🚀");
        assert_eq!(config.base.author, "René");
    }
}
