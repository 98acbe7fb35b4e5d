//! Wire types returned by the catalogue API.
//!
//! These mirror the backend payloads field for field. Unknown fields are
//! ignored so older clients keep working against newer servers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routes::AppRoute;

/// Booking provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Numeric provider id, e.g. `1` for Recreation.gov.
    pub id: i32,
    /// Provider name as stored, e.g. `RecreationDotGov`.
    pub name: String,
    /// Free-text blurb.
    #[serde(default)]
    pub description: Option<String>,
    /// Provider home page.
    pub url: String,
    /// Whether camply currently searches this provider.
    pub enabled: bool,
}

/// Recreation area, such as a national park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecreationArea {
    /// Provider-scoped identifier.
    pub id: String,
    /// Owning provider.
    pub provider_id: i32,
    /// Display name, usually upper case from the provider feed.
    pub name: String,
    /// May contain HTML; see [`crate::description::DescriptionView`].
    #[serde(default)]
    pub description: Option<String>,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// State or province code.
    #[serde(default)]
    pub state: Option<String>,
    /// WGS84 longitude.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// WGS84 latitude.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Whether the area takes reservations.
    pub reservable: bool,
    /// Whether the area is searchable.
    pub enabled: bool,
    /// Booking page on the provider site.
    #[serde(default)]
    pub url: Option<String>,
}

/// Bookable campground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campground {
    /// Provider-scoped identifier.
    pub id: String,
    /// Owning provider.
    pub provider_id: i32,
    /// Parent recreation area, if any.
    #[serde(default)]
    pub recreation_area_id: Option<String>,
    /// Display name.
    pub name: String,
    /// May contain HTML.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// State or province code.
    #[serde(default)]
    pub state: Option<String>,
    /// WGS84 longitude.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// WGS84 latitude.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Whether sites can be booked online.
    pub reservable: bool,
    /// Whether the campground is searchable.
    pub enabled: bool,
    /// Booking page on the provider site.
    #[serde(default)]
    pub url: Option<String>,
}

impl Campground {
    /// Parent recreation area page, when the campground belongs to one.
    #[must_use]
    pub fn parent_route(&self) -> Option<AppRoute> {
        self.recreation_area_id
            .as_ref()
            .map(|id| AppRoute::RecreationArea {
                provider_id: self.provider_id,
                id: id.clone(),
            })
    }
}

/// Kind of entity a search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Hit opens a recreation area page.
    RecreationArea,
    /// Hit opens a campground page.
    Campground,
}

/// One type-ahead search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Composite key, `{provider}:{kind}:{id}`.
    pub id: String,
    /// Which of the id pairs below is populated.
    pub entity_type: EntityType,
    /// Owning provider.
    pub provider_id: i32,
    /// Owning provider name.
    pub provider_name: String,
    /// Area id; also set on campground hits with a parent.
    #[serde(default)]
    pub recreation_area_id: Option<String>,
    /// Area name.
    #[serde(default)]
    pub recreation_area_name: Option<String>,
    /// Campground id, campground hits only.
    #[serde(default)]
    pub campground_id: Option<String>,
    /// Campground name, campground hits only.
    #[serde(default)]
    pub campground_name: Option<String>,
}

impl SearchResult {
    /// Name shown in the dropdown.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = match self.entity_type {
            EntityType::RecreationArea => self.recreation_area_name.as_deref(),
            EntityType::Campground => self.campground_name.as_deref(),
        };
        name.unwrap_or_default()
    }

    /// Secondary line: the parent area for campgrounds, else the provider.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        match (self.entity_type, self.recreation_area_name.as_deref()) {
            (EntityType::Campground, Some(area)) => area,
            _ => self.provider_name.as_str(),
        }
    }

    /// Page opened when the hit is selected.
    ///
    /// Returns `None` when the row lacks the id for its entity type.
    #[must_use]
    pub fn target_route(&self) -> Option<AppRoute> {
        match self.entity_type {
            EntityType::RecreationArea => {
                self.recreation_area_id
                    .as_ref()
                    .map(|id| AppRoute::RecreationArea {
                        provider_id: self.provider_id,
                        id: id.clone(),
                    })
            }
            EntityType::Campground => self.campground_id.as_ref().map(|id| AppRoute::Campground {
                provider_id: self.provider_id,
                id: id.clone(),
            }),
        }
    }
}

/// Body of `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// HTTP-style status, `200` when healthy.
    pub status: u16,
    /// Server clock at response time.
    pub timestamp: DateTime<Utc>,
}

/// Error payload returned with non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Stable code such as `not_found`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Matches the `trace-id` response header.
    #[serde(default, alias = "traceId")]
    pub trace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn campground_hit() -> SearchResult {
        serde_json::from_value(json!({
            "id": "1:campground:232447",
            "entity_type": "Campground",
            "provider_id": 1,
            "provider_name": "RecreationDotGov",
            "recreation_area_id": "2991",
            "recreation_area_name": "Yosemite National Park",
            "campground_id": "232447",
            "campground_name": "Upper Pines"
        }))
        .expect("search hit")
    }

    #[rstest]
    fn campground_hit_links_to_campground_page() {
        let hit = campground_hit();
        assert_eq!(hit.display_name(), "Upper Pines");
        assert_eq!(hit.subtitle(), "Yosemite National Park");
        assert_eq!(
            hit.target_route(),
            Some(AppRoute::Campground {
                provider_id: 1,
                id: "232447".to_owned()
            })
        );
    }

    #[rstest]
    fn area_hit_without_id_has_no_target() {
        let hit = SearchResult {
            entity_type: EntityType::RecreationArea,
            recreation_area_id: None,
            ..campground_hit()
        };
        assert_eq!(hit.target_route(), None);
        assert_eq!(hit.subtitle(), "RecreationDotGov");
    }

    #[rstest]
    fn health_parses_millisecond_timestamps() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": 200,
            "timestamp": "2024-05-01T12:30:00.000Z"
        }))
        .expect("health");
        assert_eq!(health.status, 200);
        assert_eq!(health.timestamp.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[rstest]
    fn error_body_accepts_camel_case_trace_id() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "code": "not_found",
            "message": "missing",
            "traceId": "abc"
        }))
        .expect("error body");
        assert_eq!(body.trace_id.as_deref(), Some("abc"));
    }
}
