//! Per-request URL options.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::sites::SiteInfo;

/// When to put a language marker into generated URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageEmbedding {
    Always,
    Never,
    #[default]
    AsNeeded,
}

/// Where the language marker goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLocation {
    /// `/{language}/path`
    #[default]
    FilePath,
    /// `path?sc_lang={language}`
    QueryString,
}

/// Options controlling how a single URL is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Language to embed. Empty means the current request language.
    pub language: String,
    pub language_embedding: LanguageEmbedding,
    pub language_location: LanguageLocation,
    /// Percent-encode path segments.
    pub encode_names: bool,
    pub add_aspx_extension: bool,
    pub always_include_server_url: bool,
    /// Build the path from display names instead of item names.
    pub use_display_name: bool,
    /// Look up the owning site instead of using the current one.
    pub site_resolving: bool,
    /// Explicit target site. Always wins over resolution.
    #[serde(skip)]
    pub site: Option<Arc<SiteInfo>>,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            language: String::new(),
            language_embedding: LanguageEmbedding::AsNeeded,
            language_location: LanguageLocation::FilePath,
            encode_names: false,
            add_aspx_extension: true,
            always_include_server_url: false,
            use_display_name: false,
            site_resolving: true,
            site: None,
        }
    }
}

impl UrlOptions {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_language_embedding(mut self, embedding: LanguageEmbedding) -> Self {
        self.language_embedding = embedding;
        self
    }

    pub fn with_language_location(mut self, location: LanguageLocation) -> Self {
        self.language_location = location;
        self
    }

    pub fn with_encode_names(mut self, encode: bool) -> Self {
        self.encode_names = encode;
        self
    }

    pub fn with_aspx_extension(mut self, add: bool) -> Self {
        self.add_aspx_extension = add;
        self
    }

    pub fn with_server_url(mut self, always: bool) -> Self {
        self.always_include_server_url = always;
        self
    }

    pub fn with_display_name(mut self, use_display_name: bool) -> Self {
        self.use_display_name = use_display_name;
        self
    }

    pub fn with_site_resolving(mut self, resolve: bool) -> Self {
        self.site_resolving = resolve;
        self
    }

    pub fn with_site(mut self, site: Arc<SiteInfo>) -> Self {
        self.site = Some(site);
        self
    }

    /// Language to embed, falling back to `current_language`.
    pub fn effective_language<'a>(&'a self, current_language: &'a str) -> &'a str {
        if self.language.is_empty() {
            current_language
        } else {
            &self.language
        }
    }

    /// Whether these options ask for a language marker given the request language.
    ///
    /// `AsNeeded` embeds only when the link language differs from `current_language`.
    pub fn embed_language_for(&self, current_language: &str) -> bool {
        match self.language_embedding {
            LanguageEmbedding::Always => true,
            LanguageEmbedding::Never => false,
            LanguageEmbedding::AsNeeded => !self
                .effective_language(current_language)
                .eq_ignore_ascii_case(current_language),
        }
    }
}
