use crate::config::{FeedOptions, Settings, StorageOptions, DEFAULT_RPC_TIMEOUT};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// On-disk form of [`Settings`]:
///
/// ```toml
/// rpc_timeout_ms = 3000
///
/// [storage]
/// address = "${STORAGE_HOST}:8080"
///
/// [feed]
/// address = "localhost:8081"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub rpc_timeout_ms: Option<u64>,
    pub storage: Option<StorageOptions>,
    pub feed: Option<FeedOptions>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GatewayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GatewayError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn rpc_timeout(&self) -> Duration {
        self.rpc_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RPC_TIMEOUT)
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            rpc_timeout: self.rpc_timeout(),
            storage: self.storage,
            feed: self.feed,
        }
    }
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = TomlConfig::from_file(path)?.into_settings();
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
rpc_timeout_ms = 2500

[storage]
address = "localhost:8080"

[feed]
address = "http://localhost:8081"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_settings();

        assert_eq!(settings.rpc_timeout, Duration::from_millis(2500));
        assert_eq!(settings.storage.unwrap().address, "localhost:8080");
        assert_eq!(settings.feed.unwrap().address, "http://localhost:8081");
    }

    #[test]
    fn test_missing_sections_disable_backends() {
        let settings = TomlConfig::from_toml_str("[feed]\naddress = \"feed:9000\"\n")
            .unwrap()
            .into_settings();

        assert_eq!(settings.rpc_timeout, DEFAULT_RPC_TIMEOUT);
        assert!(settings.storage.is_none());
        assert!(settings.feed.is_some());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_LANDMARK_STORAGE_HOST", "storage.internal");

        let toml_content = r#"
[storage]
address = "${TEST_LANDMARK_STORAGE_HOST}:50051"

[feed]
address = "${TEST_LANDMARK_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.storage.unwrap().address, "storage.internal:50051");
        assert_eq!(
            config.feed.unwrap().address,
            "${TEST_LANDMARK_UNSET_VARIABLE}"
        );

        std::env::remove_var("TEST_LANDMARK_STORAGE_HOST");
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("rpc_timeout_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, GatewayError::ConfigError { .. }));
    }

    #[test]
    fn test_settings_from_file_validates() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"rpc_timeout_ms = 1000\n[storage]\naddress = \"localhost:8080\"\n")
            .unwrap();
        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.rpc_timeout, Duration::from_secs(1));

        let mut invalid = NamedTempFile::new().unwrap();
        invalid
            .write_all(b"rpc_timeout_ms = 0\n[storage]\naddress = \"localhost:8080\"\n")
            .unwrap();
        assert!(Settings::from_file(invalid.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_file("/definitely/not/here/landmark.toml").unwrap_err();
        assert!(matches!(err, GatewayError::IoError(_)));
    }
}
