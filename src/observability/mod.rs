//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stderr (CLI)
//!     → whatever recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted messages
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
