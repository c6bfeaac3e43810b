//! Link generation subsystem.
//!
//! # Data Flow
//! ```text
//! (ContentNode, UrlOptions, RequestContext)
//!     → provider.rs (default options, lowercase post-processing)
//!     → builder.rs
//!         → resolver.rs (explicit site / current site / resolving table)
//!         → item path element (strip site root, add virtual folder)
//!         → server element (policy.rs decides same-site short-circuit)
//!         → assemble (language marker, encoding, .aspx)
//!     → URL string
//! ```
//!
//! # Design Decisions
//! - Building a URL never fails; unresolvable input degrades to "" or the current site
//! - One algorithm, parameterized by `SameSitePolicy`, instead of overridable hooks

pub mod builder;
pub mod options;
pub mod path;
pub mod policy;
pub mod provider;
pub mod resolver;

pub use builder::LinkBuilder;
pub use options::{LanguageEmbedding, LanguageLocation, UrlOptions};
pub use policy::SameSitePolicy;
pub use provider::LinkProvider;
pub use resolver::SiteResolver;
