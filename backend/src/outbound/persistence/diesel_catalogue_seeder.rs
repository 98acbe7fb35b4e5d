//! Writes a [`CatalogueSeed`] into PostgreSQL.
//!
//! Providers, recreation areas and campgrounds are upserted by identity. The
//! `search` table is rebuilt from scratch in the same transaction so readers
//! never observe a half-written index.

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, AsyncPgConnection, RunQueryDsl};
use tracing::info;

use crate::domain::CatalogueSeed;

use super::models::{CampgroundRow, ProviderRow, RecreationAreaRow, SearchRow};
use super::pool::{DbPool, PoolError};
use super::schema::{campgrounds, providers, recreation_areas, search};

/// Rows per `INSERT` statement; keeps bind parameters well under the
/// PostgreSQL limit.
const BATCH_SIZE: usize = 500;

/// Failures while writing a seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedWriteError {
    /// No connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// A statement failed; the transaction was rolled back.
    #[error("failed to write catalogue seed: {0}")]
    Database(#[from] diesel::result::Error),
}

/// Counts of rows written by [`DieselCatalogueSeeder::write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Providers upserted.
    pub providers: usize,
    /// Recreation areas upserted.
    pub recreation_areas: usize,
    /// Campgrounds upserted.
    pub campgrounds: usize,
    /// Search rows inserted after the rebuild.
    pub search_rows: usize,
}

/// Loads seed documents into the catalogue tables.
#[derive(Clone)]
pub struct DieselCatalogueSeeder {
    pool: DbPool,
}

impl DieselCatalogueSeeder {
    /// Create a seeder over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Upsert the seed and rebuild the search index in one transaction.
    ///
    /// # Errors
    /// Returns [`SeedWriteError`] when a connection cannot be obtained or a
    /// statement fails.
    pub async fn write(&self, seed: &CatalogueSeed) -> Result<SeedSummary, SeedWriteError> {
        let provider_rows: Vec<ProviderRow> =
            seed.providers.iter().map(ProviderRow::from).collect();
        let area_rows: Vec<RecreationAreaRow> = seed
            .recreation_areas
            .iter()
            .map(RecreationAreaRow::from)
            .collect();
        let campground_rows: Vec<CampgroundRow> =
            seed.campgrounds.iter().map(CampgroundRow::from).collect();
        let search_rows: Vec<SearchRow> = seed.search_rows().iter().map(SearchRow::from).collect();
        let summary = SeedSummary {
            providers: provider_rows.len(),
            recreation_areas: area_rows.len(),
            campgrounds: campground_rows.len(),
            search_rows: search_rows.len(),
        };

        let mut conn = self.pool.get().await?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                upsert_providers(conn, &provider_rows).await?;
                upsert_recreation_areas(conn, &area_rows).await?;
                upsert_campgrounds(conn, &campground_rows).await?;
                rebuild_search(conn, &search_rows).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await?;

        info!(
            providers = summary.providers,
            recreation_areas = summary.recreation_areas,
            campgrounds = summary.campgrounds,
            search_rows = summary.search_rows,
            "catalogue seed written"
        );
        Ok(summary)
    }
}

async fn upsert_providers(
    conn: &mut AsyncPgConnection,
    rows: &[ProviderRow],
) -> Result<(), diesel::result::Error> {
    for batch in rows.chunks(BATCH_SIZE) {
        diesel::insert_into(providers::table)
            .values(batch)
            .on_conflict(providers::id)
            .do_update()
            .set((
                providers::name.eq(excluded(providers::name)),
                providers::description.eq(excluded(providers::description)),
                providers::url.eq(excluded(providers::url)),
                providers::enabled.eq(excluded(providers::enabled)),
            ))
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn upsert_recreation_areas(
    conn: &mut AsyncPgConnection,
    rows: &[RecreationAreaRow],
) -> Result<(), diesel::result::Error> {
    use recreation_areas::dsl as ra;

    for batch in rows.chunks(BATCH_SIZE) {
        diesel::insert_into(ra::recreation_areas)
            .values(batch)
            .on_conflict((ra::provider_id, ra::id))
            .do_update()
            .set((
                ra::name.eq(excluded(ra::name)),
                ra::description.eq(excluded(ra::description)),
                ra::country.eq(excluded(ra::country)),
                ra::state.eq(excluded(ra::state)),
                ra::longitude.eq(excluded(ra::longitude)),
                ra::latitude.eq(excluded(ra::latitude)),
                ra::reservable.eq(excluded(ra::reservable)),
                ra::enabled.eq(excluded(ra::enabled)),
            ))
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn upsert_campgrounds(
    conn: &mut AsyncPgConnection,
    rows: &[CampgroundRow],
) -> Result<(), diesel::result::Error> {
    use campgrounds::dsl as cg;

    for batch in rows.chunks(BATCH_SIZE) {
        diesel::insert_into(cg::campgrounds)
            .values(batch)
            .on_conflict((cg::provider_id, cg::id))
            .do_update()
            .set((
                cg::recreation_area_id.eq(excluded(cg::recreation_area_id)),
                cg::name.eq(excluded(cg::name)),
                cg::description.eq(excluded(cg::description)),
                cg::country.eq(excluded(cg::country)),
                cg::state.eq(excluded(cg::state)),
                cg::longitude.eq(excluded(cg::longitude)),
                cg::latitude.eq(excluded(cg::latitude)),
                cg::reservable.eq(excluded(cg::reservable)),
                cg::enabled.eq(excluded(cg::enabled)),
            ))
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn rebuild_search(
    conn: &mut AsyncPgConnection,
    rows: &[SearchRow],
) -> Result<(), diesel::result::Error> {
    diesel::delete(search::table).execute(conn).await?;
    for batch in rows.chunks(BATCH_SIZE) {
        diesel::insert_into(search::table)
            .values(batch)
            .execute(conn)
            .await?;
    }
    Ok(())
}
