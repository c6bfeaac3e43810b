//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for link generation.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::content::ContentNode;
use crate::links::options::UrlOptions;
use crate::links::policy::SameSitePolicy;
use crate::sites::SiteInfo;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LinkConfig {
    /// Global site-resolving and rendering settings.
    pub settings: LinkSettings,

    /// Default URL options used when a caller passes none.
    pub url_options: UrlOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Registered sites, in resolution priority order.
    pub sites: Vec<SiteInfo>,

    /// Content items known to the in-memory repository.
    pub items: Vec<ItemConfig>,
}

/// Global link settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Prefer the current site when the item lives under its start path.
    pub match_current_site: bool,

    /// Take item language into account when resolving sites.
    pub match_current_language: bool,

    /// Language used for sites that do not pin one.
    pub default_language: String,

    /// Lowercase every generated URL.
    pub lowercase_urls: bool,

    /// When to leave out the server part for links into the current site.
    pub same_site_policy: SameSitePolicy,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            match_current_site: true,
            match_current_language: false,
            default_language: "en".to_string(),
            lowercase_urls: false,
            same_site_policy: SameSitePolicy::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A content item declared in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    /// Full path in raw-name form.
    pub path: String,

    /// Full path in display-name form. Defaults to `path`.
    #[serde(default)]
    pub display_path: Option<String>,

    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "master".to_string()
}

impl ItemConfig {
    /// Convert into a content node in the given language.
    pub fn to_node(&self, language: &str) -> ContentNode {
        let node = ContentNode::new(&self.path, language, &self.database);
        match &self.display_path {
            Some(display) => node.with_display_path(display),
            None => node,
        }
    }
}
