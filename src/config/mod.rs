//! Site configuration management for `docmeta.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `[base]`  | Site identity (title, author, description, url) |
//! | `[seo]`   | Structured-data facts (image, license, offer)   |
//! | `[extra]` | User-defined custom fields (analytics ids, …)   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Tool"
//! description = "Documentation for my tool"
//! author = "Alice"
//! url = "https://example.com"
//!
//! [seo]
//! image = "https://example.com/logo.png"
//! license = "https://opensource.org/licenses/MIT"
//!
//! [extra]
//! analytics_id = "G-12345"
//! ```
//!
//! Configuration is loaded once per build and treated as immutable for the
//! run; every pipeline invocation only reads from it.

mod base;
pub mod defaults;
mod error;
mod seo;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use seo::SeoConfig;

use crate::log;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docmeta.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Structured-data facts for the JSON-LD graph
    #[serde(default)]
    pub seo: SeoConfig,

    /// User-defined extra fields (analytics/ads identifiers and the like).
    /// Opaque to the pipeline; consumed by the host.
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        log!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Site URL without trailing slash (empty string if unset).
    ///
    /// The pipeline joins page paths onto this with exactly one slash.
    pub fn site_url(&self) -> &str {
        self.base
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
    }

    /// Validate configuration before the first page render.
    pub fn validate(&self) -> Result<()> {
        if self.base.title.is_empty() {
            bail!(ConfigError::Validation(
                "[base.title] must not be empty".into()
            ));
        }

        match &self.base.url {
            None => bail!(ConfigError::Validation(
                "[base.url] is required for canonical URL generation".into()
            )),
            Some(url) if !url.starts_with("http") => bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            )),
            Some(_) => {}
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
