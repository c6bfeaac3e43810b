//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use sitelink::config::LinkSettings;
use sitelink::content::{ContentNode, MemoryRepository};
use sitelink::context::RequestInfo;
use sitelink::links::LinkProvider;
use sitelink::sites::{SiteInfo, SiteRegistry};

/// Main site: www.example.com, start item /sitecore/content/home.
pub fn website() -> SiteInfo {
    SiteInfo {
        host_name: "www.example.com".into(),
        root_path: "/sitecore/content".into(),
        start_item: "/home".into(),
        language: "en".into(),
        ..SiteInfo::new("website")
    }
}

/// Shop site on its own host and port.
pub fn shop() -> SiteInfo {
    SiteInfo {
        host_name: "shop.example.com".into(),
        scheme: "https".into(),
        port: 8443,
        root_path: "/sitecore/content".into(),
        start_item: "/shop".into(),
        language: "en".into(),
        ..SiteInfo::new("shop")
    }
}

/// Danish site served under a virtual folder of the main host.
pub fn danish() -> SiteInfo {
    SiteInfo {
        host_name: "*.example.dk".into(),
        target_host_name: "www.example.dk".into(),
        root_path: "/sitecore/content".into(),
        start_item: "/dk".into(),
        virtual_folder: "/dk/".into(),
        language: "da".into(),
        ..SiteInfo::new("danish")
    }
}

pub fn sites() -> Vec<SiteInfo> {
    vec![website(), shop(), danish()]
}

pub fn provider_with(sites: Vec<SiteInfo>, settings: LinkSettings) -> LinkProvider {
    LinkProvider::new(
        Arc::new(SiteRegistry::new(sites)),
        Arc::new(MemoryRepository::new()),
        settings,
    )
}

pub fn provider() -> LinkProvider {
    provider_with(sites(), LinkSettings::default())
}

/// A request to `http://{host}` served by the named site.
pub fn request_on(provider: &LinkProvider, site: &str, host: &str) -> RequestInfo {
    let info = RequestInfo::new("http", host, 80);
    match provider.registry().get(site) {
        Some(site) => info.with_site(site),
        None => info,
    }
}

pub fn node(path: &str) -> ContentNode {
    ContentNode::new(path, "en", "master")
}
