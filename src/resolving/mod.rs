//! Site resolving subsystem.
//!
//! # Data Flow
//! ```text
//! Table construction (lazy, on first lookup):
//!     SiteRegistry snapshot
//!     → skip sites that cannot be resolved
//!     → key.rs (lowercase start path + language fallback)
//!     → table.rs (first writer wins)
//!     → cache.rs (remember snapshot identity)
//!
//! Lookup:
//!     (lowercase item path, item language)
//!     → exact probe, strip last segment, repeat
//!     → path-only scan on miss
//!     → Return: owning site or None
//! ```
//!
//! # Design Decisions
//! - Table is rebuilt only when the site list reference changes
//! - Deterministic: same input always resolves to the same site

pub mod cache;
pub mod key;
pub mod table;

pub use cache::ResolvingTableCache;
pub use key::SiteKey;
pub use table::SiteResolvingTable;
