//! URL assembly.
//!
//! # Responsibilities
//! - Compute the item path element relative to the resolved site
//! - Compute the server element (`scheme://host[:port]`) when needed
//! - Apply language embedding, encoding and the `.aspx` extension
//!
//! # Design Decisions
//! - Empty path element → empty URL, nothing else is computed
//! - Same-site tie-break delegated to an injected `SameSitePolicy`
//! - Display-name lookups that miss degrade to an empty root path

use std::sync::Arc;

use crate::content::{ContentNode, ContentRepository, ItemPathType};
use crate::context::{format_server_url, RequestContext};
use crate::links::options::{LanguageEmbedding, LanguageLocation, UrlOptions};
use crate::links::path::{encode_path, make_path, remove_postfix, starts_with_ignore_case, strip_root};
use crate::links::policy::SameSitePolicy;
use crate::links::resolver::SiteResolver;
use crate::sites::SiteInfo;

const ASPX_EXTENSION: &str = "aspx";
const LANGUAGE_QUERY_KEY: &str = "sc_lang";
const LANGUAGE_COOKIE: &str = "lang";

/// Builds item URLs for one set of options and one request.
pub struct LinkBuilder<'a> {
    options: &'a UrlOptions,
    ctx: &'a dyn RequestContext,
    resolver: SiteResolver<'a>,
    repository: &'a dyn ContentRepository,
    policy: SameSitePolicy,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(
        options: &'a UrlOptions,
        ctx: &'a dyn RequestContext,
        resolver: SiteResolver<'a>,
        repository: &'a dyn ContentRepository,
        policy: SameSitePolicy,
    ) -> Self {
        Self {
            options,
            ctx,
            resolver,
            repository,
            policy,
        }
    }

    /// Build the URL of `node`.
    pub fn get_item_url(&self, node: &ContentNode) -> String {
        let site = self.get_target_site(node);
        let item_path = self.item_path_element(node, site.as_deref());
        if item_path.is_empty() {
            return String::new();
        }

        let server_url = self.server_url_element(site.as_deref());
        let virtual_folder = site.as_ref().map_or("/", |s| s.virtual_folder.as_str());
        self.assemble(&server_url, &item_path, virtual_folder)
    }

    /// The site `node` is linked through.
    pub fn get_target_site(&self, node: &ContentNode) -> Option<Arc<SiteInfo>> {
        self.resolver.resolve_target_site(node, self.options, self.ctx)
    }

    fn assemble(&self, server_url: &str, item_path: &str, virtual_folder: &str) -> String {
        let mut path = if server_url.ends_with('/') {
            String::new()
        } else {
            "/".to_string()
        };

        let embed = self.embed_language();
        let language = self.options.effective_language(self.ctx.current_language());
        if embed && self.options.language_location == LanguageLocation::FilePath {
            path = make_path(&path, language);
        }

        path = make_path(&path, item_path);
        if path.len() > 1 {
            path = remove_postfix(&path).to_string();
        }

        if self.options.encode_names {
            path = encode_path(&path);
        }

        if self.options.add_aspx_extension
            && path != remove_postfix(virtual_folder)
            && remove_postfix(&path) != remove_postfix(server_url)
            && path != "/"
        {
            path.push('.');
            path.push_str(ASPX_EXTENSION);
        }

        if embed && self.options.language_location == LanguageLocation::QueryString {
            path.push_str(&format!("?{}={}", LANGUAGE_QUERY_KEY, language));
        }

        format!("{}{}", server_url, path)
    }

    fn embed_language(&self) -> bool {
        match self.options.language_embedding {
            LanguageEmbedding::Always => true,
            LanguageEmbedding::Never => false,
            LanguageEmbedding::AsNeeded => match self.ctx.current_site() {
                None => true,
                Some(site) => {
                    self.ctx
                        .original_cookie_value(&site.cookie_key(LANGUAGE_COOKIE))
                        .is_none()
                        || self.options.embed_language_for(self.ctx.current_language())
                }
            },
        }
    }

    /// Item path with the site root stripped and the virtual folder prepended.
    fn item_path_element(&self, node: &ContentNode, site: Option<&SiteInfo>) -> String {
        let kind = if self.options.use_display_name {
            ItemPathType::DisplayName
        } else {
            ItemPathType::Name
        };
        let mut path = node.path_of(kind).to_string();

        let Some(site) = site else {
            return path;
        };

        let start = self.root_path(site, node, true);
        let stripped = match strip_root(&path, start.trim().trim_end_matches('/')) {
            Some(rest) => Some(rest.to_string()),
            None => {
                let root = self.root_path(site, node, false);
                strip_root(&path, root.trim().trim_end_matches('/')).map(str::to_string)
            }
        };
        if let Some(rest) = stripped {
            path = rest;
        }

        let virtual_folder = &site.virtual_folder;
        if !virtual_folder.is_empty() && !starts_with_ignore_case(&path, virtual_folder) {
            path = make_path(virtual_folder, &path);
        }
        path
    }

    /// Root path of `site`, projected to display names when the options ask for it.
    fn root_path(&self, site: &SiteInfo, node: &ContentNode, use_start_item: bool) -> String {
        let item_path = if use_start_item {
            site.start_path()
        } else {
            site.root_path.clone()
        };
        if !self.options.use_display_name || item_path.is_empty() {
            return item_path;
        }

        match self.repository.get_item(&item_path, &node.language, &node.database) {
            Some(item) => item.display_path,
            None => {
                tracing::debug!(path = %item_path, site = %site.name, "Root item not found for display name");
                String::new()
            }
        }
    }

    /// `scheme://host[:port]` when the link leaves the current site or host.
    fn server_url_element(&self, site: Option<&SiteInfo>) -> String {
        let always = self.options.always_include_server_url;
        let base = if always {
            self.ctx.server_url()
        } else {
            String::new()
        };
        let Some(site) = site else {
            return base;
        };

        let current_name = self
            .ctx
            .current_site()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let host = self.ctx.host_name();

        let target_host = if !site.host_name.is_empty() && !host.is_empty() && site.matches_host(host) {
            host
        } else {
            first_non_empty(site.target_host_name(), host)
        };

        if !always {
            let name_match = site.name.eq_ignore_ascii_case(&current_name);
            let host_match = host.eq_ignore_ascii_case(target_host);
            if self.policy.skip_server_url(name_match, host_match) {
                return base;
            }
        }

        if target_host.is_empty() || target_host.contains('*') {
            return base;
        }

        let scheme = first_non_empty(&site.scheme, self.ctx.scheme());
        let port = if site.port > 0 { site.port } else { self.ctx.port() };
        if target_host.eq_ignore_ascii_case(host)
            && port == self.ctx.port()
            && scheme.eq_ignore_ascii_case(self.ctx.scheme())
        {
            return base;
        }

        format_server_url(scheme, target_host, port)
    }
}

fn first_non_empty<'s>(first: &'s str, second: &'s str) -> &'s str {
    if first.is_empty() {
        second
    } else {
        first
    }
}
