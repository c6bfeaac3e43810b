//! Resolving table keys.

use serde::Serialize;

use crate::config::LinkSettings;

/// Lookup key of the site resolving table.
///
/// The path is lowercased on construction, so equality is case-insensitive on
/// the path and exact on the language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SiteKey {
    path: String,
    language: String,
}

impl SiteKey {
    pub fn new(path: &str, language: impl Into<String>) -> Self {
        Self {
            path: path.to_lowercase(),
            language: language.into(),
        }
    }

    /// Build a key honoring the language settings.
    ///
    /// With language matching disabled the key matches any language. Otherwise
    /// an empty language falls back to the default language.
    pub fn build(path: &str, language: &str, settings: &LinkSettings) -> Self {
        let language = if !settings.match_current_language {
            ""
        } else if language.is_empty() {
            settings.default_language.as_str()
        } else {
            language
        };
        Self::new(path, language)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Same language, path with `path` replaced.
    pub fn with_path(&self, path: &str) -> Self {
        Self::new(path, self.language.clone())
    }
}
