use std::path::Path;

use chrono::FixedOffset;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::app::AppError;

/// runtime settings for the service area API. values are read from an optional
/// TOML file and then overridden by `SERVICEAREA_*` environment variables.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ServiceAreaConfig {
    /// socket address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// offset of the service area's wall clock from UTC, in minutes. time
    /// restrictions are evaluated in this local time.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// optional GeoJSON or JSON file of geofences loaded at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for ServiceAreaConfig {
    fn default() -> Self {
        ServiceAreaConfig {
            bind_address: default_bind_address(),
            utc_offset_minutes: 0,
            seed_file: None,
        }
    }
}

impl ServiceAreaConfig {
    pub fn load(configuration_file: Option<&Path>) -> Result<ServiceAreaConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(path) = configuration_file {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix("SERVICEAREA").try_parsing(true))
            .build()
            .map_err(|e| {
                let source = configuration_file
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| String::from("environment"));
                AppError::Configuration(format!("{source} produced error: {e}"))
            })?;
        config
            .try_deserialize::<ServiceAreaConfig>()
            .map_err(|e| AppError::Configuration(e.to_string()))
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, AppError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            AppError::Configuration(format!(
                "utc_offset_minutes {} is outside of the range (-1440, 1440)",
                self.utc_offset_minutes
            ))
        })
    }
}

fn default_bind_address() -> String {
    String::from("0.0.0.0:8080")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml() {
        let path = std::env::temp_dir().join(format!(
            "servicearea-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "bind_address = \"127.0.0.1:9000\"\nutc_offset_minutes = 120\nseed_file = \"zones.geojson\"\n",
        )
        .expect("test invariant failed: could not write config");
        let result = ServiceAreaConfig::load(Some(&path));
        let _ = std::fs::remove_file(&path);
        let config = result.expect("test invariant failed: config should load");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.utc_offset_minutes, 120);
        assert_eq!(config.seed_file.as_deref(), Some("zones.geojson"));
        let offset = config.utc_offset().expect("test invariant failed");
        assert_eq!(offset.local_minus_utc(), 7200);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = ServiceAreaConfig::load(Some(Path::new("/nonexistent/servicearea.toml")));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_invalid_offset() {
        let config = ServiceAreaConfig {
            utc_offset_minutes: 24 * 60,
            ..Default::default()
        };
        assert!(config.utc_offset().is_err());
    }
}
