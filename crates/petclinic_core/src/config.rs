//! Clinic store configuration.
//!
//! # Responsibility
//! - Hold the policy switches that the store leaves to the embedding
//!   application: last-name case policy and owner delete cascade.
//! - Load those switches from a JSON document.
//!
//! # Invariants
//! - `StoreConfig::default()` reproduces the baseline behavior: case-sensitive
//!   last-name search and record-only owner deletion.
//! - Unknown configuration keys are rejected, not ignored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Case policy for `find_all_by_last_name_like`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastNameMatch {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

/// What deleting an owner does to the owner's pets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerDeletePolicy {
    /// Remove the owner record only. Pets stay in the pet repository.
    #[default]
    RecordOnly,
    /// Also delete every pet still owned by the owner. Visits are untouched.
    CascadePets,
}

/// Policy switches applied when a clinic store is wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub last_name_match: LastNameMatch,
    pub owner_delete: OwnerDeletePolicy,
}

impl StoreConfig {
    /// Parses a JSON document. Missing keys fall back to defaults.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` for malformed JSON, unknown keys, or
    ///   unsupported values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid store configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LastNameMatch, OwnerDeletePolicy, StoreConfig};

    #[test]
    fn empty_document_yields_defaults() {
        let config = StoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.last_name_match, LastNameMatch::CaseSensitive);
        assert_eq!(config.owner_delete, OwnerDeletePolicy::RecordOnly);
    }

    #[test]
    fn parses_snake_case_policies() {
        let config = StoreConfig::from_json_str(
            r#"{"last_name_match": "case_insensitive", "owner_delete": "cascade_pets"}"#,
        )
        .unwrap();
        assert_eq!(config.last_name_match, LastNameMatch::CaseInsensitive);
        assert_eq!(config.owner_delete, OwnerDeletePolicy::CascadePets);
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        let unknown_key = StoreConfig::from_json_str(r#"{"persist": true}"#).unwrap_err();
        assert!(unknown_key.to_string().contains("invalid store configuration"));

        assert!(StoreConfig::from_json_str(r#"{"owner_delete": "everything"}"#).is_err());
    }
}
