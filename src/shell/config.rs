// Runtime configuration read from the environment.
//
// `.env` files are loaded by the binary before this runs, so every value here can be
// set either way. Unset variables fall back to the defaults below; set but unparsable
// ones are a startup error.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::modules::health::service::DEFAULT_PING_TIMEOUT;
use crate::modules::lifecycle::sequencer::DEFAULT_GRACE_PERIOD;

pub const SERVICE_PORT: &str = "SERVICE_PORT";
pub const SHUTDOWN_GRACE_PERIOD_MS: &str = "SHUTDOWN_GRACE_PERIOD_MS";
pub const DATA_SOURCE_HOST: &str = "DATA_SOURCE_HOST";
pub const DATA_SOURCE_PORT: &str = "DATA_SOURCE_PORT";
pub const HEALTH_PING_TIMEOUT_MS: &str = "HEALTH_PING_TIMEOUT_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_port: u16,
    pub shutdown_grace_period: Duration,
    pub data_source: DataSourceConfig,
    pub health_ping_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_port: 8081,
            shutdown_grace_period: DEFAULT_GRACE_PERIOD,
            data_source: DataSourceConfig {
                host: "localhost".to_string(),
                port: 3306,
            },
            health_ping_timeout: DEFAULT_PING_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Self {
            service_port: parse_or(&lookup, SERVICE_PORT, defaults.service_port)?,
            shutdown_grace_period: millis_or(
                &lookup,
                SHUTDOWN_GRACE_PERIOD_MS,
                defaults.shutdown_grace_period,
            )?,
            data_source: DataSourceConfig {
                host: lookup(DATA_SOURCE_HOST)
                    .filter(|host| !host.trim().is_empty())
                    .unwrap_or(defaults.data_source.host),
                port: parse_or(&lookup, DATA_SOURCE_PORT, defaults.data_source.port)?,
            },
            health_ping_timeout: millis_or(
                &lookup,
                HEALTH_PING_TIMEOUT_MS,
                defaults.health_ping_timeout,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|error| ConfigError::Invalid {
                key,
                reason: error.to_string(),
                value,
            })
        }
    }
}

fn millis_or<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    let millis: u64 = parse_or(lookup, key, default_ms)?;
    if millis == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: millis.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_millis(millis))
}
