//! Address field accessors
//!
//! Every accessor validates the response first (status `OK`, at least one
//! result) and then reads from the first result. Component lookups scan
//! `address_components` for the first entry whose *first* type tag equals
//! the tag of the requested [`AddressPart`].

use domain::value_objects::{AddressPart, DEFAULT_COORDINATE_PRECISION, GeoLocation, NameForm};

use crate::error::GeocodingError;
use crate::models::{AddressComponent, GeocodeResponse, GeocodeResult};

impl AddressComponent {
    /// The type tag accessors match against
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// The long or short textual form
    #[must_use]
    pub fn name(&self, form: NameForm) -> &str {
        match form {
            NameForm::Long => &self.long_name,
            NameForm::Short => &self.short_name,
        }
    }
}

impl GeocodeResult {
    /// First component classified as `part`
    #[must_use]
    pub fn component(&self, part: AddressPart) -> Option<&AddressComponent> {
        let tag = part.type_tag();
        self.address_components
            .iter()
            .find(|component| component.primary_type() == Some(tag))
    }
}

impl GeocodeResponse {
    /// The first result, provided the response is usable
    ///
    /// # Errors
    ///
    /// `StatusNotOk` when the status is not `OK`, `LocationNotFound` when an
    /// `OK` response carries no results.
    pub fn first_result(&self) -> Result<&GeocodeResult, GeocodingError> {
        if !self.status.is_ok() {
            return Err(GeocodingError::StatusNotOk {
                status: self.status.clone(),
                message: self.error_message.clone(),
            });
        }

        self.results
            .first()
            .ok_or_else(|| GeocodingError::LocationNotFound("no results returned".to_string()))
    }

    /// The matched component for `part`
    pub fn component(&self, part: AddressPart) -> Result<&AddressComponent, GeocodingError> {
        self.first_result()?
            .component(part)
            .ok_or(GeocodingError::ComponentNotFound(part))
    }

    /// Long or short name of `part`
    pub fn name(&self, part: AddressPart, form: NameForm) -> Result<&str, GeocodingError> {
        Ok(self.component(part)?.name(form))
    }

    /// Human-readable address of the first result
    pub fn formatted_address(&self) -> Result<&str, GeocodingError> {
        Ok(&self.first_result()?.formatted_address)
    }

    /// Place identifier of the first result
    pub fn place_id(&self) -> Result<&str, GeocodingError> {
        Ok(&self.first_result()?.place_id)
    }

    /// Position of the first result as a validated value object
    pub fn location(&self) -> Result<GeoLocation, GeocodingError> {
        let location = self.first_result()?.geometry.location;
        GeoLocation::new(location.latitude, location.longitude)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    /// Position of the first result as `"lat, lng"` with ten decimals
    pub fn coordinates(&self) -> Result<String, GeocodingError> {
        Ok(self.location()?.format_fixed(DEFAULT_COORDINATE_PRECISION))
    }

    pub fn street_number_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::StreetNumber, NameForm::Long)
    }

    pub fn street_number_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::StreetNumber, NameForm::Short)
    }

    pub fn street_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::Street, NameForm::Long)
    }

    pub fn street_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::Street, NameForm::Short)
    }

    pub fn city_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::City, NameForm::Long)
    }

    pub fn city_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::City, NameForm::Short)
    }

    pub fn state_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::State, NameForm::Long)
    }

    pub fn state_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::State, NameForm::Short)
    }

    pub fn country_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::Country, NameForm::Long)
    }

    pub fn country_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::Country, NameForm::Short)
    }

    pub fn postal_code_long(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::PostalCode, NameForm::Long)
    }

    pub fn postal_code_short(&self) -> Result<&str, GeocodingError> {
        self.name(AddressPart::PostalCode, NameForm::Short)
    }
}
