//! Site resolving table.
//!
//! # Responsibilities
//! - Index eligible sites by (start path, language)
//! - Find the site owning a content path, walking up the tree on a miss
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, read without locks)
//! - O(1) exact lookup via HashMap, O(n) path-only scan in registration order
//! - First registered site wins on key collisions

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::LinkSettings;
use crate::links::path::{make_path, parent_path};
use crate::observability::metrics;
use crate::resolving::key::SiteKey;
use crate::sites::SiteInfo;

/// Index from normalized (path, language) to the owning site.
#[derive(Debug, Default)]
pub struct SiteResolvingTable {
    entries: Vec<(SiteKey, Arc<SiteInfo>)>,
    index: HashMap<SiteKey, usize>,
}

impl SiteResolvingTable {
    /// Build the table from the registered sites, skipping ineligible ones.
    pub fn build(sites: &[Arc<SiteInfo>], settings: &LinkSettings) -> Self {
        let mut table = Self::default();

        for site in sites {
            if site.cannot_be_resolved() {
                metrics::record_site_skipped();
                continue;
            }
            let key = SiteKey::build(
                &make_path(&site.root_path, &site.start_item),
                &site.language,
                settings,
            );
            table.insert(key, site.clone());
        }

        tracing::debug!(entries = table.len(), sites = sites.len(), "Site resolving table built");
        table
    }

    fn insert(&mut self, key: SiteKey, site: Arc<SiteInfo>) {
        if let Some(&existing) = self.index.get(&key) {
            tracing::debug!(
                site = %site.name,
                owner = %self.entries[existing].1.name,
                path = %key.path(),
                "Duplicate resolving key, keeping first site"
            );
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, site));
    }

    /// Exact lookup.
    pub fn get(&self, key: &SiteKey) -> Option<&Arc<SiteInfo>> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Find the site for `key`, stripping trailing path segments on a miss.
    ///
    /// A key without language is matched on path alone.
    pub fn find_matching_site(&self, key: &SiteKey) -> Option<Arc<SiteInfo>> {
        if key.language().is_empty() {
            return self.find_matching_site_by_path(key.path());
        }

        let mut probe = key.clone();
        loop {
            if let Some(site) = self.get(&probe) {
                return Some(site.clone());
            }
            probe = probe.with_path(parent_path(probe.path())?);
        }
    }

    /// Find a site by path only, ignoring languages.
    pub fn find_matching_site_by_path(&self, path: &str) -> Option<Arc<SiteInfo>> {
        let mut current = path;
        loop {
            let hit = self
                .entries
                .iter()
                .find(|(key, _)| key.path().eq_ignore_ascii_case(current));
            if let Some((_, site)) = hit {
                return Some(site.clone());
            }
            current = parent_path(current)?;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SiteKey, &Arc<SiteInfo>)> {
        self.entries.iter().map(|(k, s)| (k, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
