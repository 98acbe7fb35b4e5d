//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`.
//! Regenerate with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Booking platforms the catalogue is sourced from.
    providers (id) {
        /// Stable numeric identifier assigned by the catalogue.
        id -> Int4,
        /// Human-readable platform name.
        name -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Platform home page.
        url -> Varchar,
        /// Whether the provider is currently offered.
        enabled -> Bool,
    }
}

diesel::table! {
    /// Recreation areas keyed by provider and provider-scoped id.
    recreation_areas (provider_id, id) {
        provider_id -> Int4,
        id -> Varchar,
        name -> Varchar,
        description -> Nullable<Text>,
        country -> Nullable<Varchar>,
        state -> Nullable<Varchar>,
        longitude -> Nullable<Float8>,
        latitude -> Nullable<Float8>,
        reservable -> Bool,
        enabled -> Bool,
    }
}

diesel::table! {
    /// Campgrounds keyed by provider and provider-scoped id.
    campgrounds (provider_id, id) {
        provider_id -> Int4,
        id -> Varchar,
        /// Parent recreation area of the same provider, when known.
        recreation_area_id -> Nullable<Varchar>,
        name -> Varchar,
        description -> Nullable<Text>,
        country -> Nullable<Varchar>,
        state -> Nullable<Varchar>,
        longitude -> Nullable<Float8>,
        latitude -> Nullable<Float8>,
        reservable -> Bool,
        enabled -> Bool,
    }
}

diesel::table! {
    /// Denormalised type-ahead index rebuilt whenever the catalogue is seeded.
    search (id) {
        /// Composite identifier such as `1:campground:232447`.
        id -> Varchar,
        /// `RecreationArea` or `Campground`.
        entity_type -> Varchar,
        provider_id -> Int4,
        provider_name -> Varchar,
        recreation_area_id -> Nullable<Varchar>,
        recreation_area_name -> Nullable<Varchar>,
        campground_id -> Nullable<Varchar>,
        campground_name -> Nullable<Varchar>,
        /// Name matched and ordered by type-ahead queries.
        display_name -> Varchar,
    }
}

diesel::joinable!(recreation_areas -> providers (provider_id));
diesel::joinable!(campgrounds -> providers (provider_id));
diesel::joinable!(search -> providers (provider_id));

diesel::allow_tables_to_appear_in_same_query!(providers, recreation_areas, campgrounds, search);
