//! Target site resolution.
//!
//! # Responsibilities
//! - Pick the site a content node belongs to
//! - Honor explicit site overrides and the current site
//! - Fall back to the resolving table
//!
//! # Design Decisions
//! - An explicit site that differs from the current one always wins
//! - Staying inside the current site skips the table lookup entirely
//! - No match is not an error; the current site (or none) is returned

use std::sync::Arc;

use crate::config::LinkSettings;
use crate::content::ContentNode;
use crate::context::RequestContext;
use crate::links::options::UrlOptions;
use crate::links::path::strip_descendant;
use crate::observability::metrics::{self, ResolutionOutcome};
use crate::resolving::{ResolvingTableCache, SiteKey};
use crate::sites::{SiteInfo, SiteRegistry};

/// Resolves the owning site of content nodes.
#[derive(Debug, Clone, Copy)]
pub struct SiteResolver<'a> {
    settings: &'a LinkSettings,
    registry: &'a SiteRegistry,
    cache: &'a ResolvingTableCache,
}

impl<'a> SiteResolver<'a> {
    pub fn new(settings: &'a LinkSettings, registry: &'a SiteRegistry, cache: &'a ResolvingTableCache) -> Self {
        Self {
            settings,
            registry,
            cache,
        }
    }

    /// Resolve the site `node` should be linked through.
    pub fn resolve_target_site(
        &self,
        node: &ContentNode,
        options: &UrlOptions,
        ctx: &dyn RequestContext,
    ) -> Option<Arc<SiteInfo>> {
        let ambient = ctx.current_site();
        let effective = options.site.clone().or_else(|| ambient.clone());

        if !options.site_resolving || node.is_core() {
            metrics::record_resolution(ResolutionOutcome::Skipped);
            return effective;
        }

        if let Some(explicit) = &options.site {
            let differs = ambient.as_ref().map_or(true, |a| a.name != explicit.name);
            if differs {
                metrics::record_resolution(ResolutionOutcome::Explicit);
                return Some(explicit.clone());
            }
        }

        if let Some(site) = &effective {
            if self.matches_current_site(node, site) {
                metrics::record_resolution(ResolutionOutcome::CurrentSite);
                return effective;
            }
        }

        let table = self.cache.get_or_rebuild(&self.registry.sites(), self.settings);
        let path = node.full_path().to_lowercase();
        let key = SiteKey::build(&path, &node.language, self.settings);

        match table
            .find_matching_site(&key)
            .or_else(|| table.find_matching_site_by_path(&path))
        {
            Some(site) => {
                tracing::trace!(path = %path, site = %site.name, "Resolved target site");
                metrics::record_resolution(ResolutionOutcome::Table);
                Some(site)
            }
            None => {
                metrics::record_resolution(ResolutionOutcome::Fallback);
                effective
            }
        }
    }

    /// Returns true if `node` can stay on `site` without a table lookup.
    pub fn matches_current_site(&self, node: &ContentNode, site: &SiteInfo) -> bool {
        if !self.settings.match_current_site {
            return false;
        }
        if self.settings.match_current_language && !node.language.eq_ignore_ascii_case(&site.language) {
            return false;
        }
        strip_descendant(node.full_path(), &site.start_path()).is_some()
    }
}
