//! Value Objects - Immutable, identity-less domain primitives

mod address_part;
mod geo_location;

pub use address_part::{AddressPart, NameForm, UnknownAddressPart};
pub use geo_location::{DEFAULT_COORDINATE_PRECISION, GeoLocation, InvalidCoordinates};
