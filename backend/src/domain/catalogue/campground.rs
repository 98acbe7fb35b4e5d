//! Campground entity.

use serde::{Deserialize, Serialize};

use super::booking::BookingPlatform;
use super::location::{Location, Prefix};
use super::recreation_area::default_true;
use super::validation::{
    MAX_ID_CHARS, MAX_NAME_CHARS, normalise_optional, validate_non_empty_field,
    validate_optional_id,
};
use super::{CatalogueValidationError, ProviderId};

/// Input payload for [`Campground::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampgroundDraft {
    /// Provider-scoped identifier.
    pub id: String,
    /// Owning provider.
    pub provider_id: i32,
    /// Parent recreation area, if any.
    #[serde(default)]
    pub recreation_area_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Upstream description, possibly HTML.
    #[serde(default)]
    pub description: Option<String>,
    /// Country code.
    #[serde(default)]
    pub country: Option<String>,
    /// State or province code.
    #[serde(default)]
    pub state: Option<String>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Whether the site takes bookings.
    #[serde(default = "default_true")]
    pub reservable: bool,
    /// Whether the record is active.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Bookable facility, optionally attached to a recreation area of the same
/// provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Campground {
    id: String,
    provider_id: ProviderId,
    recreation_area_id: Option<String>,
    name: String,
    description: Option<String>,
    location: Location,
    reservable: bool,
    enabled: bool,
}

impl Campground {
    /// Validate and construct a campground.
    ///
    /// # Errors
    /// Returns [`CatalogueValidationError`] when an id or the name is blank
    /// or too long, or a coordinate is out of range.
    pub fn new(draft: CampgroundDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Provider-scoped identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Owning provider.
    #[must_use]
    pub fn provider_id(&self) -> ProviderId {
        self.provider_id
    }

    /// Parent recreation area within the same provider.
    #[must_use]
    pub fn recreation_area_id(&self) -> Option<&str> {
        self.recreation_area_id.as_deref()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Upstream description; may contain HTML markup.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Country, state and coordinates.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Whether the campground takes bookings.
    #[must_use]
    pub fn reservable(&self) -> bool {
        self.reservable
    }

    /// Whether the campground is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Booking page on the provider's site, when its URL layout is known.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        BookingPlatform::for_provider(self.provider_id)
            .map(|platform| platform.campground_url(&self.id))
    }
}

impl TryFrom<CampgroundDraft> for Campground {
    type Error = CatalogueValidationError;

    fn try_from(draft: CampgroundDraft) -> Result<Self, Self::Error> {
        let id = validate_non_empty_field(draft.id, "campground.id", MAX_ID_CHARS)?;
        let name = validate_non_empty_field(draft.name, "campground.name", MAX_NAME_CHARS)?;
        let recreation_area_id =
            validate_optional_id(draft.recreation_area_id, "campground.recreation_area_id")?;
        let location = Location::new(
            Prefix::Campground,
            draft.country,
            draft.state,
            draft.longitude,
            draft.latitude,
        )?;
        Ok(Self {
            id,
            provider_id: ProviderId::new(draft.provider_id),
            recreation_area_id,
            name,
            description: normalise_optional(draft.description),
            location,
            reservable: draft.reservable,
            enabled: draft.enabled,
        })
    }
}

impl<'de> Deserialize<'de> for Campground {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CampgroundDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
