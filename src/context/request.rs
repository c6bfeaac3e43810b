//! Ambient request context.
//!
//! # Responsibilities
//! - Expose the current site, language, host, scheme and port
//! - Expose original request cookies
//!
//! # Design Decisions
//! - Trait object seam so hosts can plug in their own request type
//! - `RequestInfo` is a plain value for tools and tests

use std::collections::HashMap;
use std::sync::Arc;

use crate::sites::SiteInfo;

/// Facts about the request a URL is being generated for.
pub trait RequestContext {
    /// The site the current request is served by.
    fn current_site(&self) -> Option<Arc<SiteInfo>>;

    /// The language of the current request.
    fn current_language(&self) -> &str;

    /// Host name of the current request.
    fn host_name(&self) -> &str;

    /// Scheme of the current request.
    fn scheme(&self) -> &str;

    /// Port of the current request.
    fn port(&self) -> u16;

    /// Cookie value as sent by the client, before any changes by this request.
    fn original_cookie_value(&self, key: &str) -> Option<&str>;

    /// Base URL of the current request: `scheme://host[:port]`.
    fn server_url(&self) -> String {
        format_server_url(self.scheme(), self.host_name(), self.port())
    }
}

/// Format `scheme://host[:port]`, omitting the port when it is `0` or `80`.
pub fn format_server_url(scheme: &str, host: &str, port: u16) -> String {
    if port > 0 && port != 80 {
        format!("{}://{}:{}", scheme, host, port)
    } else {
        format!("{}://{}", scheme, host)
    }
}

/// A static request description.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub site: Option<Arc<SiteInfo>>,
    pub language: String,
    pub host_name: String,
    pub scheme: String,
    pub port: u16,
    pub cookies: HashMap<String, String>,
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            site: None,
            language: "en".to_string(),
            host_name: "localhost".to_string(),
            scheme: "http".to_string(),
            port: 80,
            cookies: HashMap::new(),
        }
    }
}

impl RequestInfo {
    /// A request for `scheme://host:port` with no current site.
    pub fn new(scheme: impl Into<String>, host_name: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host_name: host_name.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_site(mut self, site: Arc<SiteInfo>) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(key.into(), value.into());
        self
    }
}

impl RequestContext for RequestInfo {
    fn current_site(&self) -> Option<Arc<SiteInfo>> {
        self.site.clone()
    }

    fn current_language(&self) -> &str {
        &self.language
    }

    fn host_name(&self) -> &str {
        &self.host_name
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn original_cookie_value(&self, key: &str) -> Option<&str> {
        self.cookies.get(key).map(String::as_str)
    }
}
