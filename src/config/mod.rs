//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LinkConfig (validated, immutable)
//!     → sites handed to SiteRegistry, settings to LinkProvider
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → SiteRegistry::replace (atomic swap)
//!     → resolving table rebuilt on next lookup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Only the site list is hot-reloaded; settings are fixed per provider

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ItemConfig, LinkConfig, LinkSettings, ObservabilityConfig};
pub use validation::ValidationError;
