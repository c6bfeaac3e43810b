//! Cached site resolving table.
//!
//! # Responsibilities
//! - Hand out the resolving table for the current site list
//! - Rebuild it when the site list snapshot changes
//!
//! # Design Decisions
//! - Fast path is a lock-free `ArcSwapOption` load plus a pointer comparison
//! - One mutex guards rebuild (double-checked locking),
//!   so at most one thread builds while others keep reading the old table
//! - Identity is `Arc::ptr_eq` on the registry snapshot, never content equality,
//!   so `SiteRegistry::replace` is the only invalidation needed

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;

use crate::config::LinkSettings;
use crate::observability::metrics;
use crate::resolving::table::SiteResolvingTable;
use crate::sites::SiteList;

/// A table together with the site list it was built from.
#[derive(Debug)]
struct CachedTable {
    sites: SiteList,
    table: Arc<SiteResolvingTable>,
}

/// Lazily built, identity-invalidated resolving table.
#[derive(Debug, Default)]
pub struct ResolvingTableCache {
    current: ArcSwapOption<CachedTable>,
    rebuild_lock: Mutex<()>,
}

impl ResolvingTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `sites`, rebuilding it if `sites` is a new snapshot.
    pub fn get_or_rebuild(&self, sites: &SiteList, settings: &LinkSettings) -> Arc<SiteResolvingTable> {
        if let Some(table) = self.cached_for(sites) {
            return table;
        }

        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another thread may have rebuilt while we waited.
        if let Some(table) = self.cached_for(sites) {
            return table;
        }

        let table = Arc::new(SiteResolvingTable::build(sites, settings));
        self.current.store(Some(Arc::new(CachedTable {
            sites: sites.clone(),
            table: table.clone(),
        })));
        metrics::record_table_rebuild(table.len());
        tracing::info!(entries = table.len(), "Site resolving table rebuilt");
        table
    }

    fn cached_for(&self, sites: &SiteList) -> Option<Arc<SiteResolvingTable>> {
        self.current
            .load_full()
            .filter(|cached| Arc::ptr_eq(&cached.sites, sites))
            .map(|cached| cached.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::{SiteInfo, SiteRegistry};

    fn registry() -> SiteRegistry {
        SiteRegistry::new(vec![SiteInfo {
            host_name: "www.example.com".into(),
            root_path: "/sitecore/content".into(),
            start_item: "/home".into(),
            ..SiteInfo::new("website")
        }])
    }

    #[test]
    fn test_reuses_table_for_same_snapshot() {
        let registry = registry();
        let cache = ResolvingTableCache::new();
        let settings = LinkSettings::default();

        let a = cache.get_or_rebuild(&registry.sites(), &settings);
        let b = cache.get_or_rebuild(&registry.sites(), &settings);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_rebuilds_after_replace() {
        let registry = registry();
        let cache = ResolvingTableCache::new();
        let settings = LinkSettings::default();

        let a = cache.get_or_rebuild(&registry.sites(), &settings);
        assert_eq!(a.len(), 1);

        registry.replace(Vec::new());
        let b = cache.get_or_rebuild(&registry.sites(), &settings);
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(b.is_empty());
    }

    #[test]
    fn test_concurrent_readers_share_one_table() {
        let registry = Arc::new(registry());
        let cache = Arc::new(ResolvingTableCache::new());
        let sites = registry.sites();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let sites = sites.clone();
                std::thread::spawn(move || cache.get_or_rebuild(&sites, &LinkSettings::default()))
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
