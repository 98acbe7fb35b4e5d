//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Rows convert into domain entities through
//! the entity drafts so validation runs on every read.

use diesel::prelude::*;

use crate::domain::{
    Campground, CampgroundDraft, CatalogueValidationError, EntityType, Provider, ProviderDraft,
    ProviderId, RecreationArea, RecreationAreaDraft, SearchResult,
};

use super::schema::{campgrounds, providers, recreation_areas, search};

/// Row struct for the providers table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = providers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProviderRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub enabled: bool,
}

impl TryFrom<ProviderRow> for Provider {
    type Error = CatalogueValidationError;

    fn try_from(row: ProviderRow) -> Result<Self, Self::Error> {
        Self::new(ProviderDraft {
            id: row.id,
            name: row.name,
            description: row.description,
            url: row.url,
            enabled: row.enabled,
        })
    }
}

impl From<&Provider> for ProviderRow {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id().get(),
            name: provider.name().to_owned(),
            description: provider.description().map(str::to_owned),
            url: provider.url().to_owned(),
            enabled: provider.enabled(),
        }
    }
}

/// Row struct for the recreation_areas table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recreation_areas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecreationAreaRow {
    pub provider_id: i32,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub reservable: bool,
    pub enabled: bool,
}

impl TryFrom<RecreationAreaRow> for RecreationArea {
    type Error = CatalogueValidationError;

    fn try_from(row: RecreationAreaRow) -> Result<Self, Self::Error> {
        Self::new(RecreationAreaDraft {
            id: row.id,
            provider_id: row.provider_id,
            name: row.name,
            description: row.description,
            country: row.country,
            state: row.state,
            longitude: row.longitude,
            latitude: row.latitude,
            reservable: row.reservable,
            enabled: row.enabled,
        })
    }
}

impl From<&RecreationArea> for RecreationAreaRow {
    fn from(area: &RecreationArea) -> Self {
        let location = area.location();
        Self {
            provider_id: area.provider_id().get(),
            id: area.id().to_owned(),
            name: area.name().to_owned(),
            description: area.description().map(str::to_owned),
            country: location.country().map(str::to_owned),
            state: location.state().map(str::to_owned),
            longitude: location.longitude(),
            latitude: location.latitude(),
            reservable: area.reservable(),
            enabled: area.enabled(),
        }
    }
}

/// Row struct for the campgrounds table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = campgrounds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CampgroundRow {
    pub provider_id: i32,
    pub id: String,
    pub recreation_area_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub reservable: bool,
    pub enabled: bool,
}

impl TryFrom<CampgroundRow> for Campground {
    type Error = CatalogueValidationError;

    fn try_from(row: CampgroundRow) -> Result<Self, Self::Error> {
        Self::new(CampgroundDraft {
            id: row.id,
            provider_id: row.provider_id,
            recreation_area_id: row.recreation_area_id,
            name: row.name,
            description: row.description,
            country: row.country,
            state: row.state,
            longitude: row.longitude,
            latitude: row.latitude,
            reservable: row.reservable,
            enabled: row.enabled,
        })
    }
}

impl From<&Campground> for CampgroundRow {
    fn from(campground: &Campground) -> Self {
        let location = campground.location();
        Self {
            provider_id: campground.provider_id().get(),
            id: campground.id().to_owned(),
            recreation_area_id: campground.recreation_area_id().map(str::to_owned),
            name: campground.name().to_owned(),
            description: campground.description().map(str::to_owned),
            country: location.country().map(str::to_owned),
            state: location.state().map(str::to_owned),
            longitude: location.longitude(),
            latitude: location.latitude(),
            reservable: campground.reservable(),
            enabled: campground.enabled(),
        }
    }
}

/// Row struct for the search table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = search)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SearchRow {
    pub id: String,
    pub entity_type: String,
    pub provider_id: i32,
    pub provider_name: String,
    pub recreation_area_id: Option<String>,
    pub recreation_area_name: Option<String>,
    pub campground_id: Option<String>,
    pub campground_name: Option<String>,
    pub display_name: String,
}

impl TryFrom<SearchRow> for SearchResult {
    type Error = String;

    fn try_from(row: SearchRow) -> Result<Self, Self::Error> {
        let entity_type = EntityType::from_label(&row.entity_type)
            .ok_or_else(|| format!("unknown search entity type `{}`", row.entity_type))?;
        Ok(Self {
            id: row.id,
            entity_type,
            provider_id: ProviderId::new(row.provider_id),
            provider_name: row.provider_name,
            recreation_area_id: row.recreation_area_id,
            recreation_area_name: row.recreation_area_name,
            campground_id: row.campground_id,
            campground_name: row.campground_name,
        })
    }
}

impl From<&SearchResult> for SearchRow {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id.clone(),
            entity_type: result.entity_type.as_str().to_owned(),
            provider_id: result.provider_id.get(),
            provider_name: result.provider_name.clone(),
            recreation_area_id: result.recreation_area_id.clone(),
            recreation_area_name: result.recreation_area_name.clone(),
            campground_id: result.campground_id.clone(),
            campground_name: result.campground_name.clone(),
            display_name: result.display_name().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn search_row(entity_type: &str) -> SearchRow {
        SearchRow {
            id: "1:campground:232447".to_owned(),
            entity_type: entity_type.to_owned(),
            provider_id: 1,
            provider_name: "RecreationDotGov".to_owned(),
            recreation_area_id: Some("2991".to_owned()),
            recreation_area_name: Some("Yosemite National Park".to_owned()),
            campground_id: Some("232447".to_owned()),
            campground_name: Some("Upper Pines".to_owned()),
            display_name: "Upper Pines".to_owned(),
        }
    }

    #[rstest]
    fn search_row_converts_to_domain() {
        let result = SearchResult::try_from(search_row("Campground")).expect("valid row");
        assert_eq!(result.entity_type, EntityType::Campground);
        assert_eq!(result.display_name(), "Upper Pines");
        assert_eq!(SearchRow::from(&result).display_name, "Upper Pines");
    }

    #[rstest]
    fn unknown_entity_type_is_rejected() {
        let err = SearchResult::try_from(search_row("Trail")).expect_err("unknown type");
        assert!(err.contains("Trail"));
    }

    #[rstest]
    fn blank_provider_name_fails_validation() {
        let row = ProviderRow {
            id: 1,
            name: "  ".to_owned(),
            description: None,
            url: "https://www.recreation.gov".to_owned(),
            enabled: true,
        };
        assert!(Provider::try_from(row).is_err());
    }
}
