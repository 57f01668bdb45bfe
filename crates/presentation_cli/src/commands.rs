//! Command implementations
//!
//! Each command performs one lookup through a [`GeocodingClient`] and
//! renders the answer as text; printing is left to `main`.

use std::fmt::Write as _;
use std::str::FromStr;

use integration_geocoding::{
    AddressPart, GeocodeResponse, GeocodingClient, GeocodingError, NameForm, UnknownAddressPart,
};

/// A single value the `get` command can print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Formatted address of the result
    Address,
    /// `"lat, lng"` with ten decimals
    Coordinates,
    /// One address component
    Part(AddressPart),
}

impl FromStr for Field {
    type Err = UnknownAddressPart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "address" | "formatted" | "formatted_address" | "formatted-address" => {
                Ok(Self::Address)
            },
            "coordinates" | "coords" | "location" => Ok(Self::Coordinates),
            other => other.parse::<AddressPart>().map(Self::Part),
        }
    }
}

fn component_or_dash(
    response: &GeocodeResponse,
    part: AddressPart,
    form: NameForm,
) -> Result<String, GeocodingError> {
    match response.name(part, form) {
        Ok(value) => Ok(value.to_string()),
        Err(GeocodingError::ComponentNotFound(_)) => Ok("-".to_string()),
        Err(e) => Err(e),
    }
}

/// Resolve `location` and list the address with all of its parts
pub async fn lookup(
    client: &dyn GeocodingClient,
    location: &str,
    form: NameForm,
) -> Result<String, GeocodingError> {
    let response = client.geocode(location).await?;

    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {}", "address:", response.formatted_address()?);
    let _ = writeln!(out, "{:<14} {}", "coordinates:", response.coordinates()?);
    for part in AddressPart::ALL {
        let label = format!("{part}:");
        let _ = writeln!(
            out,
            "{label:<14} {}",
            component_or_dash(&response, part, form)?
        );
    }

    Ok(out)
}

/// Resolve `location` and return a single field
pub async fn get(
    client: &dyn GeocodingClient,
    location: &str,
    field: Field,
    form: NameForm,
) -> Result<String, GeocodingError> {
    let response = client.geocode(location).await?;

    match field {
        Field::Address => response.formatted_address().map(ToString::to_string),
        Field::Coordinates => response.coordinates(),
        Field::Part(part) => response.name(part, form).map(ToString::to_string),
    }
}

/// Resolve `location` and return the parsed response as pretty JSON
pub async fn raw(client: &dyn GeocodingClient, location: &str) -> anyhow::Result<String> {
    let response = client.geocode(location).await?;
    Ok(serde_json::to_string_pretty(&response)?)
}
