//! Geocoding service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Google Geocoding API client
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the geocoding API; `/json` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Google Maps Platform API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fail with an ambiguity error when the API returns more than one result
    #[serde(default = "default_reject_ambiguous")]
    pub reject_ambiguous: bool,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_reject_ambiguous() -> bool {
    true
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            reject_ambiguous: default_reject_ambiguous(),
        }
    }
}

impl std::fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("reject_ambiguous", &self.reject_ambiguous)
            .finish()
    }
}

impl GeocodingConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_api_key("test-api-key")
        }
    }

    /// Check whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Endpoint that serves JSON geocoding responses
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/json", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
