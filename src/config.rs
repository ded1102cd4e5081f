use serde::{Deserialize, Serialize};

use crate::error::SubdomainError;

pub const DEFAULT_TLD: &str = "sol";
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_NAME_LENGTH: usize = 253;

/// Syntax rules a subdomain name must satisfy before anything is sent on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Top-level suffix appended to every name, without the dot.
    pub tld: String,
    pub max_label_length: usize,
    /// Limit for the whole name, tld included.
    pub max_name_length: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            tld: DEFAULT_TLD.to_string(),
            max_label_length: MAX_LABEL_LENGTH,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub rules: NameRules,
    /// `env_logger` filter directive, e.g. `"folio_subdomain=debug"`.
    pub log_filter: Option<String>,
}

impl ModalConfig {
    pub fn from_json(input: &str) -> Result<Self, SubdomainError> {
        let config: ModalConfig = serde_json::from_str(input)
            .map_err(|e| SubdomainError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SubdomainError> {
        let rules = &self.rules;
        if rules.tld.is_empty() || rules.tld.contains('.') {
            return Err(SubdomainError::InvalidConfig(format!(
                "tld `{}` must be a single non-empty label",
                rules.tld
            )));
        }
        if rules.max_label_length == 0 || rules.max_name_length == 0 {
            return Err(SubdomainError::InvalidConfig(
                "length limits must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
