//! Runtime settings resolved from the environment.

use std::env;

use tracing::info;

use crate::error::{CatalogError, Result};

const QUEUE_CAPACITY_KEY: &str = "RECIPE_QUEUE_CAPACITY";
const LOG_FILTER_KEY: &str = "RECIPE_LOG_FILTER";

const DEFAULT_QUEUE_CAPACITY: usize = 5;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of slots in the meal planning queue.
    pub queue_capacity: usize,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve every key through `lookup`, falling back to defaults for keys
    /// it does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let queue_capacity = match lookup(QUEUE_CAPACITY_KEY) {
            Some(raw) => parse_capacity(&raw)?,
            None => {
                info!("{QUEUE_CAPACITY_KEY} not set, using default: {DEFAULT_QUEUE_CAPACITY}");
                DEFAULT_QUEUE_CAPACITY
            }
        };

        let log_filter = lookup(LOG_FILTER_KEY)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| {
                info!("{LOG_FILTER_KEY} not set, using default: {DEFAULT_LOG_FILTER}");
                DEFAULT_LOG_FILTER.to_string()
            });

        Ok(Self {
            queue_capacity,
            log_filter,
        })
    }
}

fn parse_capacity(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(CatalogError::InvalidConfig {
            key: QUEUE_CAPACITY_KEY,
            value: raw.to_string(),
        }),
    }
}
