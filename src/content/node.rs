//! Content node references.

use serde::{Deserialize, Serialize};

/// Name of the administrative database that never takes part in site resolving.
pub const CORE_DATABASE: &str = "core";

/// Which projection of an item's path to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPathType {
    /// Raw item names.
    #[default]
    Name,
    /// Display names.
    DisplayName,
}

/// An addressable unit in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentNode {
    /// Full content-tree path in raw-name form.
    pub path: String,
    /// Full content-tree path in display-name form.
    pub display_path: String,
    /// Language of this version of the item.
    pub language: String,
    /// Database the item lives in.
    pub database: String,
}

impl ContentNode {
    /// Create a node whose display path equals its raw path.
    pub fn new(path: impl Into<String>, language: impl Into<String>, database: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            display_path: path.clone(),
            path,
            language: language.into(),
            database: database.into(),
        }
    }

    /// Override the display-name projection.
    pub fn with_display_path(mut self, display_path: impl Into<String>) -> Self {
        self.display_path = display_path.into();
        self
    }

    /// Full path in raw-name form.
    pub fn full_path(&self) -> &str {
        &self.path
    }

    pub fn path_of(&self, kind: ItemPathType) -> &str {
        match kind {
            ItemPathType::Name => &self.path,
            ItemPathType::DisplayName => &self.display_path,
        }
    }

    /// Returns true for items of the administrative database.
    pub fn is_core(&self) -> bool {
        self.database.eq_ignore_ascii_case(CORE_DATABASE)
    }
}
