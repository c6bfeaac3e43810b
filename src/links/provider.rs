//! Link provider.
//!
//! Entry point for callers: owns the site registry, content repository, global
//! settings and the resolving table cache, and hands out URLs.

use std::sync::Arc;

use crate::config::{LinkConfig, LinkSettings};
use crate::content::{ContentNode, ContentRepository, MemoryRepository};
use crate::context::RequestContext;
use crate::links::builder::LinkBuilder;
use crate::links::options::UrlOptions;
use crate::links::resolver::SiteResolver;
use crate::resolving::{ResolvingTableCache, SiteResolvingTable};
use crate::sites::{SiteInfo, SiteRegistry};

pub struct LinkProvider {
    registry: Arc<SiteRegistry>,
    repository: Arc<dyn ContentRepository>,
    settings: LinkSettings,
    default_options: UrlOptions,
    cache: ResolvingTableCache,
}

impl LinkProvider {
    pub fn new(registry: Arc<SiteRegistry>, repository: Arc<dyn ContentRepository>, settings: LinkSettings) -> Self {
        Self {
            registry,
            repository,
            settings,
            default_options: UrlOptions::default(),
            cache: ResolvingTableCache::new(),
        }
    }

    /// Build a provider backed by an in-memory repository of the configured items.
    pub fn from_config(config: &LinkConfig) -> Self {
        let repository = MemoryRepository::new();
        for item in &config.items {
            repository.insert(item.to_node(""));
        }

        Self::new(
            Arc::new(SiteRegistry::new(config.sites.clone())),
            Arc::new(repository),
            config.settings.clone(),
        )
        .with_default_options(config.url_options.clone())
    }

    /// Options used by [`LinkProvider::get_item_url`].
    pub fn with_default_options(mut self, options: UrlOptions) -> Self {
        self.default_options = options;
        self
    }

    pub fn registry(&self) -> &Arc<SiteRegistry> {
        &self.registry
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    pub fn default_options(&self) -> &UrlOptions {
        &self.default_options
    }

    /// URL of `node` using the default options.
    pub fn get_item_url(&self, node: &ContentNode, ctx: &dyn RequestContext) -> String {
        self.get_item_url_with(node, &self.default_options, ctx)
    }

    /// URL of `node` using `options`.
    pub fn get_item_url_with(&self, node: &ContentNode, options: &UrlOptions, ctx: &dyn RequestContext) -> String {
        let url = self.builder(options, ctx).get_item_url(node);
        if self.settings.lowercase_urls {
            url.to_lowercase()
        } else {
            url
        }
    }

    /// The site `node` would be linked through with the default options.
    pub fn get_target_site(&self, node: &ContentNode, ctx: &dyn RequestContext) -> Option<Arc<SiteInfo>> {
        self.builder(&self.default_options, ctx).get_target_site(node)
    }

    /// The resolving table for the current site list.
    pub fn resolving_table(&self) -> Arc<SiteResolvingTable> {
        self.cache.get_or_rebuild(&self.registry.sites(), &self.settings)
    }

    fn builder<'a>(&'a self, options: &'a UrlOptions, ctx: &'a dyn RequestContext) -> LinkBuilder<'a> {
        LinkBuilder::new(
            options,
            ctx,
            SiteResolver::new(&self.settings, &self.registry, &self.cache),
            self.repository.as_ref(),
            self.settings.same_site_policy,
        )
    }
}
