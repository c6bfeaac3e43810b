//! Site-aware URL resolution.
//!
//! Maps content nodes to the site that owns them and builds the public URL
//! for the node under that site.

pub mod config;
pub mod content;
pub mod context;
pub mod links;
pub mod observability;
pub mod resolving;
pub mod sites;

pub use config::LinkConfig;
pub use content::ContentNode;
pub use context::{RequestContext, RequestInfo};
pub use links::{LinkProvider, UrlOptions};
pub use sites::SiteInfo;
