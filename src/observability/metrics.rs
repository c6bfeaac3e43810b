//! Metrics collection.
//!
//! # Metrics
//! - `sitelink_table_rebuilds_total` (counter): resolving table rebuilds
//! - `sitelink_table_entries` (gauge): entries in the current table
//! - `sitelink_sites_skipped_total` (counter): sites that cannot be resolved
//! - `sitelink_site_resolutions_total` (counter): resolutions by outcome
//!
//! # Design Decisions
//! - Facade only; the embedding application installs a recorder
//! - Without a recorder every call is a no-op

use metrics::{counter, gauge};

/// Outcome of a site resolution, used as a metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Resolving disabled or core database.
    Skipped,
    /// Explicit site from the options.
    Explicit,
    /// Item lives under the current site.
    CurrentSite,
    /// Found in the resolving table.
    Table,
    /// Nothing found, fell back to the current site.
    Fallback,
}

impl ResolutionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionOutcome::Skipped => "skipped",
            ResolutionOutcome::Explicit => "explicit",
            ResolutionOutcome::CurrentSite => "current_site",
            ResolutionOutcome::Table => "table",
            ResolutionOutcome::Fallback => "fallback",
        }
    }
}

pub fn record_table_rebuild(entries: usize) {
    counter!("sitelink_table_rebuilds_total").increment(1);
    gauge!("sitelink_table_entries").set(entries as f64);
}

pub fn record_site_skipped() {
    counter!("sitelink_sites_skipped_total").increment(1);
}

pub fn record_resolution(outcome: ResolutionOutcome) {
    counter!("sitelink_site_resolutions_total", "outcome" => outcome.as_str()).increment(1);
}
