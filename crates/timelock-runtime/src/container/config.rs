//! # Runtime Configuration
//!
//! Addresses of every component, role holders and trigger policy.
//!
//! ## Sources (later wins)
//!
//! 1. `RuntimeConfig::default()`
//! 2. JSON file named by `PT_CONFIG`
//! 3. `PT_OWNER`, `PT_MANAGER`, `PT_TIMELOCK_DURATION_SECS`
//!
//! Addresses are written as hex strings, with or without `0x`.

use pt_03_timelock_trigger::TriggerConfig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_types::{Address, AddressParseError};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_CONFIG_PATH: &str = "PT_CONFIG";
pub const ENV_OWNER: &str = "PT_OWNER";
pub const ENV_MANAGER: &str = "PT_MANAGER";
pub const ENV_TIMELOCK_DURATION_SECS: &str = "PT_TIMELOCK_DURATION_SECS";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Address of the draw timelock.
    #[serde(with = "hex_address")]
    pub timelock_address: Address,
    /// Address of the timelock trigger.
    #[serde(with = "hex_address")]
    pub trigger_address: Address,
    /// Address of the draw calculator.
    #[serde(with = "hex_address")]
    pub calculator_address: Address,
    /// Address of the prize distribution history.
    #[serde(with = "hex_address")]
    pub history_address: Address,
    /// Owner of both the timelock and the trigger.
    #[serde(with = "hex_address")]
    pub owner: Address,
    /// Operator allowed to push draw settings. Zero means none.
    #[serde(with = "hex_address")]
    pub manager: Address,
    /// Trigger policy.
    pub trigger: TriggerConfig,
    /// Prize the static calculator awards per draw.
    pub prize_per_draw: u128,
    /// Events buffered per bus subscriber.
    pub event_bus_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            timelock_address: Address::repeat_byte(0x71),
            trigger_address: Address::repeat_byte(0x73),
            calculator_address: Address::repeat_byte(0xca),
            history_address: Address::repeat_byte(0x4b),
            owner: Address::repeat_byte(0x01),
            manager: Address::ZERO,
            trigger: TriggerConfig::default(),
            prize_per_draw: 0,
            event_bus_capacity: shared_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{var} is not a valid address: {source}")]
    InvalidAddress {
        var: &'static str,
        #[source]
        source: AddressParseError,
    },

    #[error("{var} is not a valid number: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Owner must not be the zero address")]
    ZeroOwner,

    #[error("Trigger address must not be the zero address")]
    ZeroTrigger,

    #[error("Manager {0} is already the owner")]
    ManagerIsOwner(Address),
}

impl RuntimeConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_OWNER) {
            self.owner = parse_address(ENV_OWNER, &value)?;
        }
        if let Some(value) = lookup(ENV_MANAGER) {
            self.manager = parse_address(ENV_MANAGER, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMELOCK_DURATION_SECS) {
            self.trigger.timelock_duration_secs =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: ENV_TIMELOCK_DURATION_SECS,
                        value,
                    })?;
        }
        Ok(())
    }

    /// Reject configurations that leave the components unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::ZeroOwner);
        }
        // The trigger is appointed manager of the timelock
        if self.trigger_address.is_zero() {
            return Err(ConfigError::ZeroTrigger);
        }
        if self.manager == self.owner {
            return Err(ConfigError::ManagerIsOwner(self.manager));
        }
        Ok(())
    }

    /// Operator address, if one is configured.
    pub fn manager(&self) -> Option<Address> {
        (!self.manager.is_zero()).then_some(self.manager)
    }
}

/// Load configuration from the `PT_CONFIG` file (if set) and the environment.
pub fn load_config() -> Result<RuntimeConfig, ConfigError> {
    let mut config = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) => RuntimeConfig::from_file(Path::new(&path))?,
        Err(_) => RuntimeConfig::default(),
    };
    config.apply_overrides(|var| std::env::var(var).ok())?;
    config.validate()?;
    Ok(config)
}

fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidAddress { var, source })
}

mod hex_address {
    use super::*;

    pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{address:?}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
