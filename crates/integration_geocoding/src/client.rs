//! Google Geocoding client
//!
//! Resolves free-form location strings through the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! and hands back the parsed [`GeocodeResponse`] once it has passed
//! validation. Each lookup is a single GET; nothing is cached or retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::GeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form location using the configured timeout
    async fn geocode(&self, location: &str) -> Result<GeocodeResponse, GeocodingError>;

    /// Resolve a free-form location, giving up after `timeout`
    async fn geocode_with_timeout(
        &self,
        location: &str,
        timeout: Duration,
    ) -> Result<GeocodeResponse, GeocodingError>;
}

/// Geocoding client backed by the Google Maps Platform
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    config: GeocodingConfig,
    api_key: SecretString,
}

impl GoogleGeocodingClient {
    /// Create a new Google geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no API key is set,
    /// or the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                GeocodingError::ConfigurationError("api_key must be set".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("geoaddr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Build the request URL for `location`
    ///
    /// The location is trimmed and form-encoded into the `address`
    /// parameter, so decoding the query yields the trimmed input verbatim.
    ///
    /// # Errors
    ///
    /// `InvalidLocation` if the trimmed location is empty,
    /// `ConfigurationError` if the base URL does not parse.
    pub fn request_url(&self, location: &str) -> Result<Url, GeocodingError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(GeocodingError::InvalidLocation(
                "Location must not be empty".to_string(),
            ));
        }

        Url::parse_with_params(
            &self.config.endpoint(),
            &[("address", location), ("key", self.api_key.expose_secret())],
        )
        .map_err(|e| GeocodingError::ConfigurationError(format!("invalid base_url: {e}")))
    }

    /// Deserialize a response body
    ///
    /// # Errors
    ///
    /// `ParseError` if the body is not a geocoding response document.
    pub fn parse_response(body: &str) -> Result<GeocodeResponse, GeocodingError> {
        serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    /// Reject responses the accessors cannot answer from
    fn check_response(
        &self,
        response: GeocodeResponse,
        location: &str,
    ) -> Result<GeocodeResponse, GeocodingError> {
        if !response.status.is_ok() {
            warn!(status = %response.status, "Geocoding returned non-OK status");
            return Err(GeocodingError::StatusNotOk {
                status: response.status,
                message: response.error_message,
            });
        }

        match response.results.len() {
            0 => Err(GeocodingError::LocationNotFound(location.to_string())),
            1 => Ok(response),
            count if self.config.reject_ambiguous => {
                warn!(count, "Ambiguous geocoding result");
                Err(GeocodingError::AmbiguousResult { count })
            },
            _ => Ok(response),
        }
    }

    async fn fetch(
        &self,
        location: &str,
        timeout: Duration,
    ) -> Result<GeocodeResponse, GeocodingError> {
        let url = self.request_url(location)?;
        let location = location.trim();

        debug!(%location, "Geocoding location");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let parsed = self.check_response(Self::parse_response(&body)?, location)?;
        debug!(%location, results = parsed.results.len(), "Geocoded location");
        Ok(parsed)
    }
}

/// Map a reqwest failure, dropping the URL since it carries the API key
fn transport_error(error: reqwest::Error, timeout: Duration) -> GeocodingError {
    if error.is_timeout() {
        GeocodingError::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else {
        GeocodingError::ConnectionFailed(error.without_url().to_string())
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<GeocodeResponse, GeocodingError> {
        self.fetch(location, Duration::from_secs(self.config.timeout_secs))
            .await
    }

    #[instrument(skip(self))]
    async fn geocode_with_timeout(
        &self,
        location: &str,
        timeout: Duration,
    ) -> Result<GeocodeResponse, GeocodingError> {
        self.fetch(location, timeout).await
    }
}

/// Resolve `location` with a one-off client built from default settings
///
/// # Errors
///
/// Any [`GeocodingError`] raised while building the client or performing
/// the lookup.
pub async fn geocode_address(
    location: &str,
    api_key: &str,
) -> Result<GeocodeResponse, GeocodingError> {
    let client = GoogleGeocodingClient::new(&GeocodingConfig::with_api_key(api_key))?;
    client.geocode(location).await
}
