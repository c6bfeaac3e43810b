//! Site definitions.
//!
//! # Responsibilities
//! - Hold the routing facts of one configured site
//! - Derive the effective outbound host name
//! - Decide whether a site may take part in site resolving

use serde::{Deserialize, Serialize};

use crate::links::path::make_path;
use crate::sites::matcher::HostPattern;

/// A configured routing target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Unique site identifier.
    pub name: String,

    /// Host pattern the site answers on. May contain `*` and `|`.
    pub host_name: String,

    /// Host name to use for outbound links.
    pub target_host_name: String,

    /// URL scheme. Empty means "same as the current request".
    pub scheme: String,

    /// Port. `0` means "same as the current request".
    pub port: u16,

    /// Content tree root of the site.
    pub root_path: String,

    /// Start item, relative to `root_path`.
    pub start_item: String,

    /// Path prefix the site is served under.
    pub virtual_folder: String,

    /// Pinned site language. May be empty.
    pub language: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            host_name: String::new(),
            target_host_name: String::new(),
            scheme: String::new(),
            port: 0,
            root_path: String::new(),
            start_item: String::new(),
            virtual_folder: "/".to_string(),
            language: String::new(),
        }
    }
}

impl SiteInfo {
    /// Create a site with the given name and defaults for everything else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Effective host name for outbound links.
    ///
    /// Wildcard and alternation hosts cannot be emitted literally, so they
    /// only count when an explicit `target_host_name` backs them.
    pub fn target_host_name(&self) -> &str {
        if !self.target_host_name.is_empty() {
            return &self.target_host_name;
        }
        if self.host_name.contains(['*', '|']) {
            return "";
        }
        &self.host_name
    }

    /// Full content path of the site's start item.
    pub fn start_path(&self) -> String {
        make_path(&self.root_path, &self.start_item)
    }

    /// This site's host pattern.
    pub fn host_pattern(&self) -> HostPattern<'_> {
        HostPattern::new(&self.host_name)
    }

    /// Returns true if `host` is accepted by this site's host pattern.
    pub fn matches_host(&self, host: &str) -> bool {
        self.host_pattern().matches(host)
    }

    /// Cookie key scoped to this site.
    pub fn cookie_key(&self, name: &str) -> String {
        format!("{}#{}", self.name, name)
    }

    /// Returns true if the site cannot take part in site resolving.
    pub fn cannot_be_resolved(&self) -> bool {
        let target_host = self.target_host_name();
        if !self.host_name.is_empty() && target_host.is_empty() {
            tracing::warn!(
                site = %self.name,
                host_name = %self.host_name,
                "Site should define 'target_host_name' in order to take part in site resolving"
            );
            return true;
        }
        if !target_host.is_empty() && !self.root_path.is_empty() {
            return self.start_item.is_empty();
        }
        true
    }
}
