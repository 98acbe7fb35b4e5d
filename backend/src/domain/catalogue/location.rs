//! Optional geographic details shared by recreation areas and campgrounds.

use super::CatalogueValidationError;
use super::validation::{ensure_coordinate, normalise_optional};

const MAX_LONGITUDE: f64 = 180.0;
const MAX_LATITUDE: f64 = 90.0;

/// Where a bookable place sits. Every component is optional upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    country: Option<String>,
    state: Option<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

impl Location {
    /// Validate coordinates and normalise blank text to `None`.
    ///
    /// `prefix` names the owning entity in validation errors.
    ///
    /// # Errors
    /// Returns [`CatalogueValidationError::InvalidCoordinate`] when a
    /// coordinate is non-finite or outside WGS84 bounds.
    pub(crate) fn new(
        prefix: Prefix,
        country: Option<String>,
        state: Option<String>,
        longitude: Option<f64>,
        latitude: Option<f64>,
    ) -> Result<Self, CatalogueValidationError> {
        let (longitude_field, latitude_field) = prefix.coordinate_fields();
        Ok(Self {
            country: normalise_optional(country),
            state: normalise_optional(state),
            longitude: ensure_coordinate(longitude, longitude_field, MAX_LONGITUDE)?,
            latitude: ensure_coordinate(latitude, latitude_field, MAX_LATITUDE)?,
        })
    }

    /// Country name or code.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// State or region.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }
}

/// Entity naming used when reporting coordinate validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prefix {
    /// Fields of a recreation area.
    RecreationArea,
    /// Fields of a campground.
    Campground,
}

impl Prefix {
    const fn coordinate_fields(self) -> (&'static str, &'static str) {
        match self {
            Self::RecreationArea => ("recreation_area.longitude", "recreation_area.latitude"),
            Self::Campground => ("campground.longitude", "campground.latitude"),
        }
    }
}
