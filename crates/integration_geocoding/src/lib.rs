//! Google Geocoding integration for GeoAddr
//!
//! Resolves free-form locations through the
//! [Google Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! and extracts address parts from the response.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the lookup interface, implemented by
//! [`GoogleGeocodingClient`]. A lookup returns a [`GeocodeResponse`] that has
//! already been checked for a non-OK status, an empty result set and (unless
//! disabled) ambiguity. Accessors on the response pull individual address
//! parts in their long or short form; every failure is a [`GeocodingError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, GoogleGeocodingClient};
//!
//! let config = GeocodingConfig::with_api_key("AIza...");
//! let client = GoogleGeocodingClient::new(&config)?;
//!
//! let response = client.geocode("1600 Amphitheatre Parkway, Mountain View").await?;
//! println!("{}", response.city_long()?);      // Mountain View
//! println!("{}", response.state_short()?);    // CA
//! println!("{}", response.coordinates()?);    // 37.4224764000, -122.0842499000
//! ```

mod address;
mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, GoogleGeocodingClient, geocode_address};
pub use config::GeocodingConfig;
pub use domain::value_objects::{AddressPart, GeoLocation, NameForm, UnknownAddressPart};
pub use error::GeocodingError;
pub use models::{
    AddressComponent, BoundingBox, Coordinate, GeocodeResponse, GeocodeResult, GeocodeStatus,
    Geometry,
};
