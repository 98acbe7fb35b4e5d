//! Recreation area entity.

use serde::{Deserialize, Serialize};

use super::booking::BookingPlatform;
use super::location::{Location, Prefix};
use super::validation::{MAX_ID_CHARS, MAX_NAME_CHARS, normalise_optional, validate_non_empty_field};
use super::{CatalogueValidationError, ProviderId};

/// Input payload for [`RecreationArea::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecreationAreaDraft {
    /// Provider-scoped identifier.
    pub id: String,
    /// Owning provider.
    pub provider_id: i32,
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

pub(super) const fn default_true() -> bool {
    true
}

/// Grouping of campgrounds under a provider, such as a national forest.
///
/// Identity is the `(provider_id, id)` pair; upstream ids are only unique
/// within a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RecreationArea {
    id: String,
    provider_id: ProviderId,
    name: String,
    description: Option<String>,
    location: Location,
    reservable: bool,
    enabled: bool,
}

impl RecreationArea {
    /// Validate and construct a recreation area.
    ///
    /// # Errors
    /// Returns [`CatalogueValidationError`] when the id or name is blank or
    /// too long, or a coordinate is out of range.
    pub fn new(draft: RecreationAreaDraft) -> Result<Self, CatalogueValidationError> {
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

    /// Whether the area takes bookings.
    #[must_use]
    pub fn reservable(&self) -> bool {
        self.reservable
    }

    /// Whether the area is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Public page on the provider's site, when its URL layout is known.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        BookingPlatform::for_provider(self.provider_id)
            .map(|platform| platform.recreation_area_url(&self.id))
    }
}

impl TryFrom<RecreationAreaDraft> for RecreationArea {
    type Error = CatalogueValidationError;

    fn try_from(draft: RecreationAreaDraft) -> Result<Self, Self::Error> {
        let id = validate_non_empty_field(draft.id, "recreation_area.id", MAX_ID_CHARS)?;
        let name = validate_non_empty_field(draft.name, "recreation_area.name", MAX_NAME_CHARS)?;
        let location = Location::new(
            Prefix::RecreationArea,
            draft.country,
            draft.state,
            draft.longitude,
            draft.latitude,
        )?;
        Ok(Self {
            id,
            provider_id: ProviderId::new(draft.provider_id),
            name,
            description: normalise_optional(draft.description),
            location,
            reservable: draft.reservable,
            enabled: draft.enabled,
        })
    }
}

impl<'de> Deserialize<'de> for RecreationArea {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RecreationAreaDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
