//! Application configuration

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::{Currency, Timezone};
use domain_claims::DEFAULT_SEED_COUNT;
use infra_storage::DEFAULT_STORAGE_KEY;

use crate::error::AppError;

/// Prefix of the environment variables read by [`AppConfig::from_env`]
pub const ENV_PREFIX: &str = "CLAIMS";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Claims desk configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the saved snapshot
    pub storage_dir: PathBuf,
    /// Key the snapshot is saved under
    pub storage_key: String,
    /// Claims generated when nothing has been saved yet
    pub seed_count: usize,
    /// Seed for the mock generator; random when absent
    pub seed: Option<u64>,
    /// IANA name of the reporting timezone
    pub timezone: String,
    /// ISO code of the reporting currency
    pub currency: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".claims-data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_count: DEFAULT_SEED_COUNT,
            seed: None,
            timezone: "UTC".to_string(),
            currency: "CAD".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_environment(None)
    }

    /// Loads configuration from the given variables instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, AppError> {
        Self::from_environment(Some(vars))
    }

    fn from_environment(vars: Option<HashMap<String, String>>) -> Result<Self, AppError> {
        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that need parsing
    pub fn validate(&self) -> Result<(), AppError> {
        self.timezone()?;
        self.currency()?;
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key must not be blank".to_string()));
        }
        Ok(())
    }

    pub fn timezone(&self) -> Result<Timezone, AppError> {
        self.timezone
            .parse()
            .map_err(|e| AppError::Config(format!("timezone: {}", e)))
    }

    pub fn currency(&self) -> Result<Currency, AppError> {
        self.currency
            .parse()
            .map_err(|e| AppError::Config(format!("currency: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "zurich-claims-storage");
        assert_eq!(config.seed_count, 50);
    }

    #[test]
    fn test_prefixed_variables_override_defaults() {
        let config = AppConfig::from_vars(vars(&[
            ("CLAIMS_STORAGE_DIR", "/var/lib/claims"),
            ("CLAIMS_SEED_COUNT", "5"),
            ("CLAIMS_SEED", "42"),
            ("CLAIMS_TIMEZONE", "America/Toronto"),
            ("CLAIMS_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/claims"));
        assert_eq!(config.seed_count, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.timezone().unwrap(), "America/Toronto".parse().unwrap());
    }

    #[test]
    fn test_bad_timezone_is_rejected() {
        let error = AppConfig::from_vars(vars(&[("CLAIMS_TIMEZONE", "Mars/Olympus")])).unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
    }
}
