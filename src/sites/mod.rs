//! Sites subsystem.
//!
//! # Data Flow
//! ```text
//! [[sites]] config entries
//!     → site.rs (SiteInfo, effective target host, eligibility)
//!     → registry.rs (ordered Arc snapshot, atomic swap on reload)
//!     → resolving table / link builder read the snapshot
//!
//! Host checks:
//!     request host → matcher.rs (HostPattern) → bool
//! ```
//!
//! # Design Decisions
//! - Sites are immutable once loaded; a reload publishes a new list
//! - Host patterns support `*` and `|` but never regex

pub mod matcher;
pub mod registry;
pub mod site;

pub use matcher::HostPattern;
pub use registry::{SiteList, SiteRegistry};
pub use site::SiteInfo;
