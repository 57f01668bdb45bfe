//! Address component vocabulary
//!
//! Geocoders classify every fragment of an address with a type tag
//! (`locality`, `route`, ...). [`AddressPart`] names the fragments this
//! project extracts and maps each one to the tag it is stored under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A classified fragment of a postal address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressPart {
    /// House number (`street_number`)
    StreetNumber,
    /// Street name (`route`)
    Street,
    /// City or town (`locality`)
    City,
    /// State, province or equivalent first-order division (`administrative_area_level_1`)
    State,
    /// Country (`country`)
    Country,
    /// Postal code (`postal_code`)
    PostalCode,
}

impl AddressPart {
    /// All parts, in the order they appear on a written address
    pub const ALL: [Self; 6] = [
        Self::StreetNumber,
        Self::Street,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::Country,
    ];

    /// The geocoder type tag this part is classified under
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::StreetNumber => "street_number",
            Self::Street => "route",
            Self::City => "locality",
            Self::State => "administrative_area_level_1",
            Self::Country => "country",
            Self::PostalCode => "postal_code",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StreetNumber => "street number",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::PostalCode => "postal code",
        }
    }
}

impl fmt::Display for AddressPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known address part
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown address part: {0}")]
pub struct UnknownAddressPart(pub String);

impl FromStr for AddressPart {
    type Err = UnknownAddressPart;

    /// Accepts labels, type tags and their `-`/`_`/space spellings,
    /// case-insensitively (`city`, `Street-Number`, `route`, `zip`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "street_number" | "number" | "house_number" => Ok(Self::StreetNumber),
            "street" | "route" => Ok(Self::Street),
            "city" | "locality" | "town" => Ok(Self::City),
            "state" | "administrative_area_level_1" | "province" | "region" => Ok(Self::State),
            "country" => Ok(Self::Country),
            "postal_code" | "postcode" | "zip" | "zip_code" => Ok(Self::PostalCode),
            _ => Err(UnknownAddressPart(s.to_string())),
        }
    }
}

/// Which textual form of an address component to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameForm {
    /// Verbose form, e.g. "California"
    #[default]
    Long,
    /// Abbreviated form, e.g. "CA"
    Short,
}

impl NameForm {
    /// Pick the long form unless `short` is set
    #[must_use]
    pub const fn from_short_flag(short: bool) -> Self {
        if short { Self::Short } else { Self::Long }
    }
}
