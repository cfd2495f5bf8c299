//! Startup configuration, read from environment variables.

use serde::de::DeserializeOwned;
use std::{
    env,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_PORT: &str = "5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// JSON array of dishes loaded into the menu at startup.
    pub dishes_data: Option<PathBuf>,
    /// JSON array of orders loaded at startup.
    pub orders_data: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            dishes_data: lookup("DISHES_DATA").map(PathBuf::from),
            orders_data: lookup("ORDERS_DATA").map(PathBuf::from),
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

/// Reads a JSON array of records from `path`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    let shown = path.display().to_string();
    let raw = read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: shown.clone(),
        source,
    })?;
    info!(path = %shown, count = records.len(), "Loaded seed data");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dish;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                port: 5000,
                dishes_data: None,
                orders_data: None
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DISHES_DATA", "data/dishes.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dishes_data, Some(PathBuf::from("data/dishes.json")));
        assert_eq!(config.orders_data, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_load_records() {
        let dir = env::temp_dir().join(format!("grubdash-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("dishes.json");
        std::fs::write(
            &good,
            r#"[{"id":"3c637d011d844ebab1205fef8a7e36ea","name":"Broccoli and beetroot stir fry",
                "description":"Crunchy stir fry","price":15,"image_url":"https://example.com/b.jpg"}]"#,
        )
        .unwrap();
        let dishes: Vec<Dish> = load_records(&good).unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].price, 15);

        let bad = dir.join("broken.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            load_records::<Dish>(&bad),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            load_records::<Dish>(&dir.join("missing.json")),
            Err(ConfigError::Read { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
