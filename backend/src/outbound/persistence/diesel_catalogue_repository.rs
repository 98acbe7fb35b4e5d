//! PostgreSQL-backed catalogue read adapter.
//!
//! One repository value implements all four catalogue read ports against the
//! tables in [`super::schema`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    CampgroundRepository, CampgroundRepositoryError, ProviderRepository, ProviderRepositoryError,
    RecreationAreaRepository, RecreationAreaRepositoryError, SearchRepository,
    SearchRepositoryError,
};
use crate::domain::{Campground, Provider, ProviderId, RecreationArea, SearchRequest, SearchResult};

use super::diesel_helpers::{
    contains_pattern, map_basic_diesel_error, map_basic_pool_error, prefix_pattern,
};
use super::models::{CampgroundRow, ProviderRow, RecreationAreaRow, SearchRow};
use super::pool::DbPool;
use super::schema::{campgrounds, providers, recreation_areas, search};

diesel::define_sql_function! {
    /// SQL `lower()` for case-insensitive ordering.
    fn lower(value: diesel::sql_types::Varchar) -> diesel::sql_types::Varchar;
}

/// Diesel-backed implementation of the catalogue read ports.
///
/// # Examples
///
/// ```rust,ignore
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/camply")).await?;
/// let repository = Arc::new(DieselCatalogueRepository::new(pool));
/// let ports = HttpStatePorts::from_adapter(repository);
/// ```
#[derive(Clone)]
pub struct DieselCatalogueRepository {
    pool: DbPool,
}

impl DieselCatalogueRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert rows, reporting the first invalid row as a query failure.
fn convert_rows<R, T, E>(
    rows: Vec<R>,
    convert: impl Fn(R) -> Result<T, String>,
    query: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    rows.into_iter()
        .map(convert)
        .collect::<Result<Vec<_>, _>>()
        .map_err(query)
}

fn provider_from_row(row: ProviderRow) -> Result<Provider, String> {
    Provider::try_from(row).map_err(|err| err.to_string())
}

fn recreation_area_from_row(row: RecreationAreaRow) -> Result<RecreationArea, String> {
    RecreationArea::try_from(row).map_err(|err| err.to_string())
}

fn campground_from_row(row: CampgroundRow) -> Result<Campground, String> {
    Campground::try_from(row).map_err(|err| err.to_string())
}

#[async_trait]
impl ProviderRepository for DieselCatalogueRepository {
    async fn list(&self) -> Result<Vec<Provider>, ProviderRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ProviderRepositoryError::connection))?;
        let rows: Vec<ProviderRow> = providers::table
            .select(ProviderRow::as_select())
            .order_by(providers::id)
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    ProviderRepositoryError::query,
                    ProviderRepositoryError::connection,
                )
            })?;
        convert_rows(rows, provider_from_row, ProviderRepositoryError::query)
    }

    async fn find_by_id(
        &self,
        id: ProviderId,
    ) -> Result<Option<Provider>, ProviderRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ProviderRepositoryError::connection))?;
        let row: Option<ProviderRow> = providers::table
            .filter(providers::id.eq(id.get()))
            .select(ProviderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    ProviderRepositoryError::query,
                    ProviderRepositoryError::connection,
                )
            })?;
        row.map(provider_from_row)
            .transpose()
            .map_err(ProviderRepositoryError::query)
    }
}

#[async_trait]
impl RecreationAreaRepository for DieselCatalogueRepository {
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<RecreationArea>, RecreationAreaRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|err| {
            map_basic_pool_error(err, RecreationAreaRepositoryError::connection)
        })?;
        let row: Option<RecreationAreaRow> = recreation_areas::table
            .filter(recreation_areas::provider_id.eq(provider_id.get()))
            .filter(recreation_areas::id.eq(id))
            .select(RecreationAreaRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    RecreationAreaRepositoryError::query,
                    RecreationAreaRepositoryError::connection,
                )
            })?;
        row.map(recreation_area_from_row)
            .transpose()
            .map_err(RecreationAreaRepositoryError::query)
    }
}

#[async_trait]
impl CampgroundRepository for DieselCatalogueRepository {
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<Campground>, CampgroundRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CampgroundRepositoryError::connection))?;
        let row: Option<CampgroundRow> = campgrounds::table
            .filter(campgrounds::provider_id.eq(provider_id.get()))
            .filter(campgrounds::id.eq(id))
            .select(CampgroundRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CampgroundRepositoryError::query,
                    CampgroundRepositoryError::connection,
                )
            })?;
        row.map(campground_from_row)
            .transpose()
            .map_err(CampgroundRepositoryError::query)
    }

    async fn list_for_recreation_area(
        &self,
        provider_id: ProviderId,
        recreation_area_id: &str,
    ) -> Result<Vec<Campground>, CampgroundRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CampgroundRepositoryError::connection))?;
        let rows: Vec<CampgroundRow> = campgrounds::table
            .filter(campgrounds::provider_id.eq(provider_id.get()))
            .filter(campgrounds::recreation_area_id.eq(recreation_area_id))
            .select(CampgroundRow::as_select())
            .order_by((campgrounds::name, campgrounds::id))
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CampgroundRepositoryError::query,
                    CampgroundRepositoryError::connection,
                )
            })?;
        convert_rows(rows, campground_from_row, CampgroundRepositoryError::query)
    }
}

#[async_trait]
impl SearchRepository for DieselCatalogueRepository {
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchRepositoryError> {
        if request.is_blank() {
            return Ok(Vec::new());
        }
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, SearchRepositoryError::connection))?;

        // `entity_type` sorts descending so `RecreationArea` precedes
        // `Campground`.
        let rows: Vec<SearchRow> = search::table
            .filter(search::display_name.ilike(contains_pattern(request.query())))
            .select(SearchRow::as_select())
            .order_by((
                search::display_name
                    .ilike(prefix_pattern(request.query()))
                    .desc(),
                search::entity_type.desc(),
                lower(search::display_name),
                search::id,
            ))
            .limit(i64::from(request.limit()))
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    SearchRepositoryError::query,
                    SearchRepositoryError::connection,
                )
            })?;
        let results = convert_rows(rows, SearchResult::try_from, SearchRepositoryError::query)?;
        Ok(request.rank(results))
    }
}
