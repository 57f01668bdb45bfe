//! Geocoding error types

use domain::value_objects::AddressPart;
use thiserror::Error;

use crate::models::GeocodeStatus;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Response body is not valid JSON for the expected shape
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The API answered with a status other than `OK`
    #[error("{status}{}", status_detail(.message))]
    StatusNotOk {
        /// Status string returned by the API
        status: GeocodeStatus,
        /// Explanation the API attached to the status, if any
        message: Option<String>,
    },

    /// The API returned `OK` without any result
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// More than one result matched the query
    #[error("Ambiguous location: {count} results matched")]
    AmbiguousResult {
        /// Number of results returned
        count: usize,
    },

    /// The requested address part is absent from the result
    #[error("{0} not found")]
    ComponentNotFound(AddressPart),

    /// Location string was unusable (e.g. empty)
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Returns true if repeating the same request later may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. } => true,
            Self::StatusNotOk { status, .. } => status.is_transient(),
            _ => false,
        }
    }

    /// The API status behind this error, when it came from a non-OK response
    #[must_use]
    pub const fn status(&self) -> Option<&GeocodeStatus> {
        match self {
            Self::StatusNotOk { status, .. } => Some(status),
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn status_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
