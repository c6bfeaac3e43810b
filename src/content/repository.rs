//! Content repository access.
//!
//! # Responsibilities
//! - Look up items by path for display-name projection
//! - Provide an in-memory store for tools and tests
//!
//! # Design Decisions
//! - Lookups never fail loudly; a miss is `None`
//! - Security checks are out of scope, every item is readable

use dashmap::DashMap;

use crate::content::node::ContentNode;

/// Read access to the content tree.
pub trait ContentRepository: Send + Sync {
    /// Fetch the latest version of the item at `path`.
    fn get_item(&self, path: &str, language: &str, database: &str) -> Option<ContentNode>;
}

/// A thread-safe in-memory content store.
///
/// Items are keyed by database and lowercased path. The stored language is
/// replaced by the requested one on lookup.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    items: DashMap<(String, String), ContentNode>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item.
    pub fn insert(&self, node: ContentNode) {
        let key = (node.database.to_lowercase(), node.path.to_lowercase());
        self.items.insert(key, node);
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContentRepository for MemoryRepository {
    fn get_item(&self, path: &str, language: &str, database: &str) -> Option<ContentNode> {
        let key = (database.to_lowercase(), path.to_lowercase());
        self.items.get(&key).map(|entry| ContentNode {
            language: language.to_string(),
            ..entry.value().clone()
        })
    }
}
