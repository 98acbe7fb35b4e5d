//! Type-ahead search over recreation areas and campgrounds.
//!
//! Search rows are denormalised: each row carries the provider name and the
//! display fields of the entity it points at, so a result can be rendered
//! and linked without further lookups.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::catalogue::{Campground, Provider, RecreationArea};
use super::{Error, ProviderId};

/// Results returned when the caller does not ask for a limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
/// Largest limit accepted from callers.
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Kind of entity a search row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Row for a recreation area.
    RecreationArea,
    /// Row for a campground.
    Campground,
}

impl EntityType {
    /// Stable storage and wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecreationArea => "RecreationArea",
            Self::Campground => "Campground",
        }
    }

    /// Parse a stored label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "RecreationArea" => Some(Self::RecreationArea),
            "Campground" => Some(Self::Campground),
            _ => None,
        }
    }
}

/// One denormalised search row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Row key: the area or campground id.
    pub id: String,
    /// Kind of entity the row indexes.
    pub entity_type: EntityType,
    /// Owning provider.
    pub provider_id: ProviderId,
    /// Provider display name.
    pub provider_name: String,
    /// Area id; set for area rows and attached campgrounds.
    pub recreation_area_id: Option<String>,
    /// Area display name.
    pub recreation_area_name: Option<String>,
    /// Campground id; set for campground rows only.
    pub campground_id: Option<String>,
    /// Campground display name.
    pub campground_name: Option<String>,
}

impl SearchResult {
    /// Build the row indexing a recreation area.
    #[must_use]
    pub fn for_recreation_area(provider: &Provider, area: &RecreationArea) -> Self {
        Self {
            id: format!("{}:rec-area:{}", area.provider_id(), area.id()),
            entity_type: EntityType::RecreationArea,
            provider_id: area.provider_id(),
            provider_name: provider.name().to_owned(),
            recreation_area_id: Some(area.id().to_owned()),
            recreation_area_name: Some(area.name().to_owned()),
            campground_id: None,
            campground_name: None,
        }
    }

    /// Build the row indexing a campground; `area` is its parent, if known.
    #[must_use]
    pub fn for_campground(
        provider: &Provider,
        campground: &Campground,
        area: Option<&RecreationArea>,
    ) -> Self {
        Self {
            id: format!("{}:campground:{}", campground.provider_id(), campground.id()),
            entity_type: EntityType::Campground,
            provider_id: campground.provider_id(),
            provider_name: provider.name().to_owned(),
            recreation_area_id: campground.recreation_area_id().map(str::to_owned),
            recreation_area_name: area.map(|parent| parent.name().to_owned()),
            campground_id: Some(campground.id().to_owned()),
            campground_name: Some(campground.name().to_owned()),
        }
    }

    /// Name matched and shown for this row.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = match self.entity_type {
            EntityType::RecreationArea => self.recreation_area_name.as_deref(),
            EntityType::Campground => self.campground_name.as_deref(),
        };
        name.unwrap_or_default()
    }
}

/// Validated search input.
///
/// # Examples
/// ```
/// use camply_backend::domain::SearchRequest;
///
/// let request = SearchRequest::new("  Yosemite ", None).expect("valid request");
/// assert_eq!(request.query(), "Yosemite");
/// assert_eq!(request.limit(), 20);
/// assert!(SearchRequest::new("pines", Some(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    needle: String,
    limit: u32,
}

impl SearchRequest {
    /// Trim the query and validate the limit.
    ///
    /// # Errors
    /// Returns an `invalid_request` [`Error`] when `limit` is outside
    /// `1..=100`.
    pub fn new(query: &str, limit: Option<u32>) -> Result<Self, Error> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
            return Err(Error::invalid_request(format!(
                "limit must be between 1 and {MAX_SEARCH_LIMIT}"
            ))
            .with_details(serde_json::json!({ "field": "limit", "value": limit })));
        }
        let query = query.trim().to_owned();
        let needle = query.to_lowercase();
        Ok(Self {
            query,
            needle,
            limit,
        })
    }

    /// Trimmed query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Maximum rows to return.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Blank queries never reach storage.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.query.is_empty()
    }

    /// Case-insensitive substring match against the row's display name.
    #[must_use]
    pub fn matches(&self, row: &SearchResult) -> bool {
        !self.is_blank() && row.display_name().to_lowercase().contains(&self.needle)
    }

    fn is_prefix_match(&self, row: &SearchResult) -> bool {
        row.display_name().to_lowercase().starts_with(&self.needle)
    }

    /// Order two matching rows: prefix matches, then recreation areas, then
    /// display name, then id.
    #[must_use]
    pub fn compare(&self, left: &SearchResult, right: &SearchResult) -> Ordering {
        self.is_prefix_match(right)
            .cmp(&self.is_prefix_match(left))
            .then_with(|| left.entity_type.cmp(&right.entity_type))
            .then_with(|| {
                left.display_name()
                    .to_lowercase()
                    .cmp(&right.display_name().to_lowercase())
            })
            .then_with(|| left.id.cmp(&right.id))
    }

    /// Filter, order and truncate candidate rows.
    #[must_use]
    pub fn rank<I>(&self, rows: I) -> Vec<SearchResult>
    where
        I: IntoIterator<Item = SearchResult>,
    {
        let mut matched: Vec<SearchResult> =
            rows.into_iter().filter(|row| self.matches(row)).collect();
        matched.sort_by(|left, right| self.compare(left, right));
        matched.truncate(usize::try_from(self.limit).unwrap_or(usize::MAX));
        matched
    }
}

#[cfg(test)]
mod tests {
    //! Ranking and validation behaviour for search requests.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    fn row(entity_type: EntityType, id: &str, name: &str) -> SearchResult {
        let (area_name, campground_name) = match entity_type {
            EntityType::RecreationArea => (Some(name.to_owned()), None),
            EntityType::Campground => (Some("Parent".to_owned()), Some(name.to_owned())),
        };
        SearchResult {
            id: id.to_owned(),
            entity_type,
            provider_id: ProviderId::new(1),
            provider_name: "Recreation.gov".to_owned(),
            recreation_area_id: Some("1".to_owned()),
            recreation_area_name: area_name,
            campground_id: None,
            campground_name,
        }
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(101))]
    fn out_of_range_limits_are_invalid(#[case] limit: Option<u32>) {
        let err = SearchRequest::new("pines", limit).expect_err("limit should be rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_queries_match_nothing(#[case] query: &str) {
        let request = SearchRequest::new(query, None).expect("valid request");
        assert!(request.is_blank());
        assert!(!request.matches(&row(EntityType::RecreationArea, "a", "Yosemite")));
    }

    #[rstest]
    fn campgrounds_match_on_their_own_name_only() {
        let request = SearchRequest::new("parent", None).expect("valid request");
        assert!(!request.matches(&row(EntityType::Campground, "c", "Upper Pines")));
    }

    #[rstest]
    fn ranking_prefers_prefix_then_rec_areas_then_name() {
        let request = SearchRequest::new("pine", Some(10)).expect("valid request");
        let rows = vec![
            row(EntityType::Campground, "c1", "Upper Pines"),
            row(EntityType::Campground, "c2", "Pine Flat"),
            row(EntityType::RecreationArea, "r1", "Pinecrest"),
            row(EntityType::RecreationArea, "r2", "Lone Pine Lake"),
            row(EntityType::Campground, "c3", "Oak Hollow"),
        ];

        let ranked: Vec<String> = request
            .rank(rows)
            .into_iter()
            .map(|result| result.id)
            .collect();

        assert_eq!(ranked, vec!["r1", "c2", "r2", "c1"]);
    }

    #[rstest]
    fn ranking_honours_the_limit() {
        let request = SearchRequest::new("lake", Some(2)).expect("valid request");
        let rows = (0..5).map(|n| {
            row(
                EntityType::RecreationArea,
                &format!("r{n}"),
                &format!("Lake {n}"),
            )
        });

        assert_eq!(request.rank(rows).len(), 2);
    }

    #[rstest]
    fn entity_type_uses_pascal_case_labels() {
        let json = serde_json::to_string(&EntityType::RecreationArea).expect("serialise");
        assert_eq!(json, "\"RecreationArea\"");
        assert_eq!(
            EntityType::from_label("Campground"),
            Some(EntityType::Campground)
        );
    }
}
