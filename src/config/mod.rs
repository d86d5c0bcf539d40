pub mod toml_config;

use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_address, validate_positive_duration, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_RPC_TIMEOUT_MS: &str = "LANDMARK_RPC_TIMEOUT_MS";
pub const ENV_STORAGE_ADDRESS: &str = "LANDMARK_STORAGE_ADDRESS";
pub const ENV_FEED_ADDRESS: &str = "LANDMARK_FEED_ADDRESS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageOptions {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedOptions {
    pub address: String,
}

/// Gateway configuration. A backend is enabled iff its options are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Upper bound on dialing each backend at construction.
    pub rpc_timeout: Duration,
    pub storage: Option<StorageOptions>,
    pub feed: Option<FeedOptions>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_RPC_TIMEOUT)
    }
}

impl Settings {
    pub fn new(rpc_timeout: Duration) -> Self {
        Self {
            rpc_timeout,
            storage: None,
            feed: None,
        }
    }

    pub fn with_storage(mut self, address: impl Into<String>) -> Self {
        self.storage = Some(StorageOptions {
            address: address.into(),
        });
        self
    }

    pub fn with_feed(mut self, address: impl Into<String>) -> Self {
        self.feed = Some(FeedOptions {
            address: address.into(),
        });
        self
    }

    /// Reads `LANDMARK_RPC_TIMEOUT_MS`, `LANDMARK_STORAGE_ADDRESS` and
    /// `LANDMARK_FEED_ADDRESS`. Unset addresses leave that backend disabled.
    pub fn from_env() -> Result<Self> {
        let rpc_timeout = match env::var(ENV_RPC_TIMEOUT_MS) {
            Ok(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| GatewayError::InvalidConfigValueError {
                        field: ENV_RPC_TIMEOUT_MS.to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                Duration::from_millis(millis)
            }
            Err(_) => DEFAULT_RPC_TIMEOUT,
        };

        let mut settings = Settings::new(rpc_timeout);
        if let Some(address) = non_empty_var(ENV_STORAGE_ADDRESS) {
            settings = settings.with_storage(address);
        }
        if let Some(address) = non_empty_var(ENV_FEED_ADDRESS) {
            settings = settings.with_feed(address);
        }
        Ok(settings)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_positive_duration("rpc_timeout", self.rpc_timeout)?;

        if let Some(storage) = &self.storage {
            validate_address("storage.address", &storage.address)?;
        }
        if let Some(feed) = &self.feed {
            validate_address("feed.address", &feed.address)?;
        }

        Ok(())
    }
}
