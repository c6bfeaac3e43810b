//! Process-wide site registry.
//!
//! # Responsibilities
//! - Hold the ordered list of registered sites
//! - Publish a new list atomically on reload
//!
//! # Design Decisions
//! - Each published list is an immutable `Arc` snapshot
//! - Readers detect reloads by pointer identity, never by content
//! - Registration order is preserved (first site wins on key collisions)

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::sites::site::SiteInfo;

/// An immutable snapshot of the registered sites.
pub type SiteList = Arc<Vec<Arc<SiteInfo>>>;

/// Registry of all configured sites.
#[derive(Debug)]
pub struct SiteRegistry {
    sites: ArcSwap<Vec<Arc<SiteInfo>>>,
}

impl SiteRegistry {
    /// Create a registry from an ordered list of sites.
    pub fn new(sites: Vec<SiteInfo>) -> Self {
        Self {
            sites: ArcSwap::from_pointee(sites.into_iter().map(Arc::new).collect()),
        }
    }

    /// Current snapshot. Stable until the next [`SiteRegistry::replace`].
    pub fn sites(&self) -> SiteList {
        self.sites.load_full()
    }

    /// Look up a site by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<SiteInfo>> {
        self.sites
            .load()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Publish a new site list.
    pub fn replace(&self, sites: Vec<SiteInfo>) {
        let count = sites.len();
        self.sites
            .store(Arc::new(sites.into_iter().map(Arc::new).collect()));
        tracing::info!(sites = count, "Site registry reloaded");
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
