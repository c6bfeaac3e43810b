//! Content tree collaborators.
//!
//! Nodes are consumed read-only; storage is external. The repository is only
//! consulted to project a site's root path into display-name form.

pub mod node;
pub mod repository;

pub use node::{ContentNode, ItemPathType, CORE_DATABASE};
pub use repository::{ContentRepository, MemoryRepository};
