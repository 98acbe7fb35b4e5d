//! Booking provider entity.

use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{MAX_NAME_CHARS, normalise_optional, validate_non_empty_field};

/// Numeric identifier of a booking provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(i32);

impl ProviderId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw integer value as stored.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProviderId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input payload for [`Provider::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderDraft {
    /// Numeric provider id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Provider home page.
    pub url: String,
    /// Whether the provider is active.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

/// External campground-booking platform, such as Recreation.gov.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    id: ProviderId,
    name: String,
    description: Option<String>,
    url: String,
    enabled: bool,
}

impl Provider {
    /// Validate and construct a provider.
    ///
    /// # Errors
    /// Returns [`CatalogueValidationError::EmptyField`] for a blank name or
    /// URL and [`CatalogueValidationError::TooLong`] when either exceeds the
    /// storage width.
    pub fn new(draft: ProviderDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Numeric provider id.
    #[must_use]
    pub fn id(&self) -> ProviderId {
        self.id
    }
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    /// Provider home page.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
    /// Whether the provider is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl TryFrom<ProviderDraft> for Provider {
    type Error = CatalogueValidationError;

    fn try_from(draft: ProviderDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "provider.name", MAX_NAME_CHARS)?;
        let url = validate_non_empty_field(draft.url, "provider.url", MAX_NAME_CHARS)?;
        Ok(Self {
            id: ProviderId::new(draft.id),
            name,
            description: normalise_optional(draft.description),
            url,
            enabled: draft.enabled,
        })
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ProviderDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
