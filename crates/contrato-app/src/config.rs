//! Application configuration.

use std::env;
use std::str::FromStr;

use contrato_auth::AuthConfig;
use contrato_store::StoreConfig;
use tracing::warn;

pub const ENV_EXPIRING_WINDOW_DAYS: &str = "CONTRATO_EXPIRING_WINDOW_DAYS";
pub const ENV_STRICT_VALIDATION: &str = "CONTRATO_STRICT_VALIDATION";
pub const ENV_SEED: &str = "CONTRATO_SEED";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Defaults overridden by `CONTRATO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(days) = parse_var::<u32>(&lookup, ENV_EXPIRING_WINDOW_DAYS) {
            config.store.expiring_window_days = days;
        }
        if let Some(strict) = parse_var::<bool>(&lookup, ENV_STRICT_VALIDATION) {
            config.store.strict_validation = strict;
        }
        if let Some(seed) = parse_var::<bool>(&lookup, ENV_SEED) {
            config.store.seed_mock_data = seed;
        }
        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring invalid configuration value");
            None
        }
    }
}
