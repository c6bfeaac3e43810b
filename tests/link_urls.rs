//! URL assembly tests.

use std::sync::Arc;

use sitelink::config::LinkSettings;
use sitelink::content::{ContentNode, MemoryRepository};
use sitelink::context::RequestInfo;
use sitelink::links::{LanguageEmbedding, LanguageLocation, LinkProvider, SameSitePolicy, UrlOptions};
use sitelink::sites::{SiteInfo, SiteRegistry};

mod common;
use common::{node, provider, provider_with, request_on, sites, website};

fn options() -> UrlOptions {
    UrlOptions::default().with_language_embedding(LanguageEmbedding::Never)
}

#[test]
fn test_site_root_without_start_item() {
    let home = SiteInfo {
        host_name: "www.example.com".into(),
        root_path: "/sitecore/content/home".into(),
        ..SiteInfo::new("home")
    };
    let provider = provider_with(vec![home], LinkSettings::default());
    let ctx = request_on(&provider, "home", "www.example.com");
    let page = node("/sitecore/content/home/page1");

    assert_eq!(provider.get_item_url_with(&page, &options(), &ctx), "/page1.aspx");

    let query = UrlOptions::default()
        .with_language_embedding(LanguageEmbedding::Always)
        .with_language_location(LanguageLocation::QueryString)
        .with_language("da");
    assert_eq!(provider.get_item_url_with(&page, &query, &ctx), "/page1.aspx?sc_lang=da");
}

#[test]
fn test_language_in_file_path() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    let opts = UrlOptions::default()
        .with_language_embedding(LanguageEmbedding::Always)
        .with_language("da");

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/home/page1"), &opts, &ctx),
        "/da/page1.aspx"
    );
}

#[test]
fn test_language_as_needed() {
    let provider = provider();
    let page = node("/sitecore/content/home/page1");
    let opts = UrlOptions::default();

    // No language cookie yet: embed.
    let ctx = request_on(&provider, "website", "www.example.com");
    assert_eq!(provider.get_item_url_with(&page, &opts, &ctx), "/en/page1.aspx");

    // Cookie present and same language: leave it out.
    let ctx = ctx.with_cookie("website#lang", "en");
    assert_eq!(provider.get_item_url_with(&page, &opts, &ctx), "/page1.aspx");

    // Cookie present but a different language is requested.
    let danish = opts.with_language("da");
    assert_eq!(provider.get_item_url_with(&page, &danish, &ctx), "/da/page1.aspx");

    // No current site: always embed.
    let anonymous = RequestInfo::new("http", "www.example.com", 80);
    assert_eq!(provider.get_item_url_with(&page, &UrlOptions::default(), &anonymous), "/en/page1.aspx");
}

#[test]
fn test_explicit_site_on_other_host() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    let shop = provider.registry().get("shop").unwrap();
    let opts = options().with_site(shop);

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/shop/cart"), &opts, &ctx),
        "https://shop.example.com:8443/cart.aspx"
    );
}

#[test]
fn test_resolved_site_on_other_host() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/shop/cart"), &options(), &ctx),
        "https://shop.example.com:8443/cart.aspx"
    );
}

#[test]
fn test_virtual_folder() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    let page = ContentNode::new("/sitecore/content/dk/om-os", "da", "master");
    let root = ContentNode::new("/sitecore/content/dk", "da", "master");

    assert_eq!(
        provider.get_item_url_with(&page, &options(), &ctx),
        "http://www.example.dk/dk/om-os.aspx"
    );
    // The virtual folder root never gets an extension.
    assert_eq!(provider.get_item_url_with(&root, &options(), &ctx), "http://www.example.dk/dk");
}

#[test]
fn test_wildcard_host_alias_stays_relative() {
    let provider = provider();
    let page = ContentNode::new("/sitecore/content/dk/om-os", "da", "master");

    for host in ["www.example.dk", "preview.example.dk"] {
        let ctx = request_on(&provider, "danish", host);
        assert_eq!(provider.get_item_url_with(&page, &options(), &ctx), "/dk/om-os.aspx");
    }
}

#[test]
fn test_empty_path_element_gives_empty_url() {
    let bare = SiteInfo {
        host_name: "bare.example.com".into(),
        root_path: "/sitecore/content/bare".into(),
        virtual_folder: String::new(),
        ..SiteInfo::new("bare")
    };
    let provider = provider_with(vec![bare], LinkSettings::default());
    let ctx = request_on(&provider, "bare", "bare.example.com");
    let root = node("/sitecore/content/bare");

    assert_eq!(provider.get_item_url_with(&root, &options(), &ctx), "");

    let loud = UrlOptions::default()
        .with_server_url(true)
        .with_language_embedding(LanguageEmbedding::Always);
    assert_eq!(provider.get_item_url_with(&root, &loud, &ctx), "");
}

#[test]
fn test_site_root_is_slash() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    assert_eq!(provider.get_item_url_with(&node("/sitecore/content/home"), &options(), &ctx), "/");
}

#[test]
fn test_extension_toggle_and_encoding() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    let page = node("/sitecore/content/home/about us");

    assert_eq!(
        provider.get_item_url_with(&page, &options().with_aspx_extension(false), &ctx),
        "/about us"
    );
    assert_eq!(
        provider.get_item_url_with(&page, &options().with_encode_names(true), &ctx),
        "/about%20us.aspx"
    );
}

#[test]
fn test_display_names() {
    let repository = MemoryRepository::new();
    repository.insert(
        ContentNode::new("/sitecore/content/home", "", "master")
            .with_display_path("/sitecore/content/Home Page"),
    );
    let provider = LinkProvider::new(
        Arc::new(SiteRegistry::new(sites())),
        Arc::new(repository),
        LinkSettings::default(),
    );
    let ctx = request_on(&provider, "website", "www.example.com");
    let team = node("/sitecore/content/home/team").with_display_path("/sitecore/content/Home Page/Our Team");
    let opts = options().with_display_name(true);

    assert_eq!(provider.get_item_url_with(&team, &opts, &ctx), "/Our Team.aspx");
    assert_eq!(
        provider.get_item_url_with(&team, &opts.clone().with_encode_names(true), &ctx),
        "/Our%20Team.aspx"
    );
}

#[test]
fn test_display_name_root_missing_keeps_full_path() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");
    let team = node("/sitecore/content/home/team").with_display_path("/sitecore/content/Home Page/Our Team");

    assert_eq!(
        provider.get_item_url_with(&team, &options().with_display_name(true), &ctx),
        "/sitecore/content/Home Page/Our Team.aspx"
    );
}

#[test]
fn test_always_include_server_url() {
    let provider = provider();
    let ctx = request_on(&provider, "website", "www.example.com");

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/home/page1"), &options().with_server_url(true), &ctx),
        "http://www.example.com/page1.aspx"
    );
}

#[test]
fn test_same_site_other_host() {
    // Current site matches by name, but the request came in on another host.
    let page = node("/sitecore/content/home/page1");

    let strict = provider();
    let ctx = RequestInfo::new("http", "preview.local", 80).with_site(strict.registry().get("website").unwrap());
    assert_eq!(
        strict.get_item_url_with(&page, &options(), &ctx),
        "http://www.example.com/page1.aspx"
    );

    let legacy = provider_with(
        sites(),
        LinkSettings {
            same_site_policy: SameSitePolicy::Either,
            ..LinkSettings::default()
        },
    );
    let ctx = RequestInfo::new("http", "preview.local", 80).with_site(legacy.registry().get("website").unwrap());
    assert_eq!(legacy.get_item_url_with(&page, &options(), &ctx), "/page1.aspx");
}

#[test]
fn test_other_site_same_host() {
    // Different site on the current host, but with another scheme.
    let secure = SiteInfo {
        host_name: "www.example.com".into(),
        scheme: "https".into(),
        root_path: "/sitecore/content".into(),
        start_item: "/secure".into(),
        ..SiteInfo::new("secure")
    };
    let login = node("/sitecore/content/secure/login");

    let strict = provider_with(vec![website(), secure.clone()], LinkSettings::default());
    let ctx = request_on(&strict, "website", "www.example.com");
    assert_eq!(
        strict.get_item_url_with(&login, &options(), &ctx),
        "https://www.example.com/login.aspx"
    );

    let legacy = provider_with(
        vec![website(), secure],
        LinkSettings {
            same_site_policy: SameSitePolicy::Either,
            ..LinkSettings::default()
        },
    );
    let ctx = request_on(&legacy, "website", "www.example.com");
    assert_eq!(legacy.get_item_url_with(&login, &options(), &ctx), "/login.aspx");
}

#[test]
fn test_lowercase_urls() {
    let provider = provider_with(
        sites(),
        LinkSettings {
            lowercase_urls: true,
            ..LinkSettings::default()
        },
    );
    let ctx = request_on(&provider, "website", "www.example.com");

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/home/About Us"), &options(), &ctx),
        "/about us.aspx"
    );
}

#[test]
fn test_core_database_is_not_resolved() {
    let provider = provider();
    let ctx = RequestInfo::new("http", "www.example.com", 80);
    let item = ContentNode::new("/sitecore/content/home/page1", "en", "core");

    assert_eq!(
        provider.get_item_url_with(&item, &options(), &ctx),
        "/sitecore/content/home/page1.aspx"
    );
}

#[test]
fn test_default_options() {
    let provider = provider().with_default_options(options().with_aspx_extension(false));
    let ctx = request_on(&provider, "website", "www.example.com");

    assert_eq!(provider.get_item_url(&node("/sitecore/content/home/page1"), &ctx), "/page1");
}

#[test]
fn test_start_item_with_non_ascii_case() {
    let german = SiteInfo {
        host_name: "www.example.de".into(),
        root_path: "/sitecore/content".into(),
        start_item: "/Über".into(),
        language: "de".into(),
        ..SiteInfo::new("german")
    };
    let provider = provider_with(vec![website(), german], LinkSettings::default());
    let page = ContentNode::new("/sitecore/content/über/seite", "de", "master");

    // Resolved through the table from another site.
    let ctx = request_on(&provider, "website", "www.example.com");
    assert_eq!(provider.get_target_site(&page, &ctx).unwrap().name, "german");
    assert_eq!(
        provider.get_item_url_with(&page, &options(), &ctx),
        "http://www.example.de/seite.aspx"
    );

    // Short-circuited on the current site.
    let ctx = request_on(&provider, "german", "www.example.de");
    assert_eq!(provider.get_item_url_with(&page, &options(), &ctx), "/seite.aspx");
}

#[test]
fn test_current_site_without_start_path_keeps_full_path() {
    let shell = SiteInfo::new("shell");
    let provider = provider_with(vec![website(), shell], LinkSettings::default());
    let ctx = request_on(&provider, "shell", "www.example.com");

    assert_eq!(
        provider.get_item_url_with(&node("/sitecore/content/home/page"), &options(), &ctx),
        "/sitecore/content/home/page.aspx"
    );
}
