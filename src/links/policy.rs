//! Same-site short-circuit policy.
//!
//! Decides whether a link into the resolved site may leave out the
//! `scheme://host[:port]` part, given whether the resolved site is the current
//! site (by name) and whether its target host is the current request host.
//! The policy is only consulted when server URLs are not forced.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSitePolicy {
    /// Skip only when both the site name and the host match.
    #[default]
    RequireBoth,
    /// Skip when either the site name or the host matches.
    Either,
}

impl SameSitePolicy {
    /// Returns true if the server part can be omitted.
    pub fn skip_server_url(self, name_match: bool, host_match: bool) -> bool {
        match self {
            SameSitePolicy::RequireBoth => name_match && host_match,
            SameSitePolicy::Either => name_match || host_match,
        }
    }
}
