//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check site identity (names present and unique)
//! - Validate value shapes (schemes, target hosts, virtual folders)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LinkConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::LinkConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site #{0} has no name")]
    EmptySiteName(usize),

    #[error("duplicate site name '{0}'")]
    DuplicateSiteName(String),

    #[error("site '{site}': virtual folder '{folder}' must start with '/'")]
    InvalidVirtualFolder { site: String, folder: String },

    #[error("site '{site}': unsupported scheme '{scheme}'")]
    UnsupportedScheme { site: String, scheme: String },

    #[error("site '{site}': invalid target host '{host}'")]
    InvalidTargetHost { site: String, host: String },

    #[error("default language must not be empty")]
    EmptyDefaultLanguage,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &LinkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.settings.default_language.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultLanguage);
    }

    let mut seen = HashSet::new();
    for (index, site) in config.sites.iter().enumerate() {
        if site.name.trim().is_empty() {
            errors.push(ValidationError::EmptySiteName(index));
        } else if !seen.insert(site.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateSiteName(site.name.clone()));
        }

        if !site.virtual_folder.is_empty() && !site.virtual_folder.starts_with('/') {
            errors.push(ValidationError::InvalidVirtualFolder {
                site: site.name.clone(),
                folder: site.virtual_folder.clone(),
            });
        }

        if !site.scheme.is_empty()
            && !site.scheme.eq_ignore_ascii_case("http")
            && !site.scheme.eq_ignore_ascii_case("https")
        {
            errors.push(ValidationError::UnsupportedScheme {
                site: site.name.clone(),
                scheme: site.scheme.clone(),
            });
        }

        let target = site.target_host_name();
        if !target.is_empty() && url::Host::parse(target).is_err() {
            errors.push(ValidationError::InvalidTargetHost {
                site: site.name.clone(),
                host: target.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
