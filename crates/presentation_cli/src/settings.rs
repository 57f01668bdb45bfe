//! CLI configuration loading
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file
//! (`geoaddr.toml` in the working directory, or `--config`), environment
//! variables prefixed `GEOADDR_` with `__` between nesting levels
//! (e.g. `GEOADDR_GEOCODING__API_KEY`), then command-line flags.

use std::path::Path;

use integration_geocoding::GeocodingConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// Complete CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Geocoding client settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Tracing filter used when no `-v` flag and no `RUST_LOG` is given
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            geocoding: GeocodingConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `geoaddr.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().set_default("log_filter", default_log_filter())?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("geoaddr").required(false)),
        };

        builder
            .add_source(
                config::Environment::with_prefix("GEOADDR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn apply_overrides(&mut self, api_key: Option<String>, timeout_secs: Option<u64>) {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.geocoding.api_key = Some(SecretString::from(key));
        }
        if let Some(timeout_secs) = timeout_secs {
            self.geocoding.timeout_secs = timeout_secs;
        }
    }
}
