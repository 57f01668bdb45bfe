//! Geocoding response models
//!
//! Types mirroring the JSON document returned by the Google Geocoding API.
//! Field names follow the wire format; missing optional fields default to
//! empty values so a sparse but well-formed response still deserializes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// API-level outcome of a geocoding request, distinct from the HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeocodeStatus {
    /// At least one result was returned
    Ok,
    /// The request succeeded but matched nothing
    ZeroResults,
    /// Billing or daily quota problem on the API key
    OverDailyLimit,
    /// Request rate exceeded
    OverQueryLimit,
    /// The API key or request was rejected
    RequestDenied,
    /// A required parameter was missing
    InvalidRequest,
    /// Server-side failure; may succeed on retry
    UnknownError,
    /// Any status not listed above, kept verbatim
    Other(String),
}

impl GeocodeStatus {
    /// The status exactly as the API spells it
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(status) => status,
        }
    }

    /// Returns true for `OK`
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true for statuses that may clear up on a later attempt
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::OverQueryLimit | Self::UnknownError)
    }
}

impl From<String> for GeocodeStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Other(status),
        }
    }
}

impl From<GeocodeStatus> for String {
    fn from(status: GeocodeStatus) -> Self {
        match status {
            GeocodeStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified piece of an address, e.g. the locality or the route
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full textual form, e.g. "California"
    #[serde(default)]
    pub long_name: String,
    /// Abbreviated textual form, e.g. "CA"
    #[serde(default)]
    pub short_name: String,
    /// Type tags, most specific first
    #[serde(default)]
    pub types: Vec<String>,
}

/// A latitude/longitude pair as sent by the API
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in degrees
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// Rectangle spanned by two corners
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// North-east corner
    pub northeast: Coordinate,
    /// South-west corner
    pub southwest: Coordinate,
}

/// Position information of a result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Area covered by the result; omitted for point results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
    /// Geocoded position
    #[serde(default)]
    pub location: Coordinate,
    /// Precision of `location`, e.g. "ROOFTOP" or "APPROXIMATE"
    #[serde(default)]
    pub location_type: String,
    /// Recommended viewport for displaying the result
    #[serde(default)]
    pub viewport: BoundingBox,
}

/// One geocoding match
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Classified address fragments
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    /// Human-readable address
    #[serde(default)]
    pub formatted_address: String,
    /// Position information
    #[serde(default)]
    pub geometry: Geometry,
    /// Stable place identifier
    #[serde(default)]
    pub place_id: String,
    /// Type tags of the whole result
    #[serde(default)]
    pub types: Vec<String>,
    /// Set when the geocoder could only match part of the request
    #[serde(default)]
    pub partial_match: bool,
}

/// Root document returned by the geocoding endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Matches, best first
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// API-level outcome
    pub status: GeocodeStatus,
    /// Explanation accompanying a non-OK status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
