//! Catalogue ports served from an immutable in-memory snapshot.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

use crate::domain::ports::{
    CampgroundRepository, CampgroundRepositoryError, ProviderRepository, ProviderRepositoryError,
    RecreationAreaRepository, RecreationAreaRepositoryError, SearchRepository,
    SearchRepositoryError,
};
use crate::domain::{
    Campground, CatalogueSeed, CatalogueSeedError, Provider, ProviderId, RecreationArea,
    SearchRequest, SearchResult,
};

const BUNDLED_SEED: &str = include_str!("../../../fixtures/catalogue.json");

type EntityKey = (ProviderId, String);

/// Failures while reading a seed document from disk.
#[derive(Debug, thiserror::Error)]
pub enum SeedLoadError {
    /// The file could not be opened or read.
    #[error("failed to read catalogue seed {path}: {source}")]
    Io {
        /// Requested path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The document was malformed or inconsistent.
    #[error(transparent)]
    Seed(#[from] CatalogueSeedError),
}

/// Catalogue adapter holding every entity in ordered maps.
///
/// # Examples
/// ```
/// use camply_backend::outbound::memory::InMemoryCatalogue;
///
/// let catalogue = InMemoryCatalogue::bundled().expect("bundled seed is valid");
/// assert!(catalogue.provider_count() > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    providers: BTreeMap<ProviderId, Provider>,
    recreation_areas: BTreeMap<EntityKey, RecreationArea>,
    campgrounds: BTreeMap<EntityKey, Campground>,
    search_rows: Vec<SearchResult>,
}

impl InMemoryCatalogue {
    /// Build the catalogue from a validated seed.
    ///
    /// # Errors
    /// Returns [`CatalogueSeedError`] when the seed has duplicate identities
    /// or dangling references.
    pub fn from_seed(seed: CatalogueSeed) -> Result<Self, CatalogueSeedError> {
        seed.validate()?;
        let search_rows = seed.search_rows();
        let CatalogueSeed {
            providers,
            recreation_areas,
            campgrounds,
        } = seed;
        Ok(Self {
            providers: providers
                .into_iter()
                .map(|provider| (provider.id(), provider))
                .collect(),
            recreation_areas: recreation_areas
                .into_iter()
                .map(|area| ((area.provider_id(), area.id().to_owned()), area))
                .collect(),
            campgrounds: campgrounds
                .into_iter()
                .map(|campground| {
                    (
                        (campground.provider_id(), campground.id().to_owned()),
                        campground,
                    )
                })
                .collect(),
            search_rows,
        })
    }

    /// Catalogue built from the seed compiled into the binary.
    ///
    /// # Errors
    /// Returns [`CatalogueSeedError`] if the bundled document is invalid.
    pub fn bundled() -> Result<Self, CatalogueSeedError> {
        Self::from_seed(CatalogueSeed::from_json(BUNDLED_SEED)?)
    }

    /// Build the catalogue from the JSON seed document at `path`.
    ///
    /// # Errors
    /// See [`read_seed_file`].
    pub fn from_path(path: &Path) -> Result<Self, SeedLoadError> {
        let catalogue = Self::from_seed(read_seed_file(path)?)?;
        info!(
            path = %path.display(),
            providers = catalogue.providers.len(),
            search_rows = catalogue.search_rows.len(),
            "catalogue seed loaded"
        );
        Ok(catalogue)
    }

    /// Number of providers held.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

/// Read and validate a JSON seed document.
///
/// # Errors
/// Returns [`SeedLoadError::Io`] when the file cannot be read and
/// [`SeedLoadError::Seed`] when its contents are invalid.
pub fn read_seed_file(path: &Path) -> Result<CatalogueSeed, SeedLoadError> {
    let io_error = |source: io::Error| SeedLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error(io::Error::from(io::ErrorKind::InvalidInput)))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    let text = directory.read_to_string(file_name).map_err(io_error)?;
    Ok(CatalogueSeed::from_json(&text)?)
}

#[async_trait]
impl ProviderRepository for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<Provider>, ProviderRepositoryError> {
        Ok(self.providers.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: ProviderId,
    ) -> Result<Option<Provider>, ProviderRepositoryError> {
        Ok(self.providers.get(&id).cloned())
    }
}

#[async_trait]
impl RecreationAreaRepository for InMemoryCatalogue {
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<RecreationArea>, RecreationAreaRepositoryError> {
        Ok(self
            .recreation_areas
            .get(&(provider_id, id.to_owned()))
            .cloned())
    }
}

#[async_trait]
impl CampgroundRepository for InMemoryCatalogue {
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<Campground>, CampgroundRepositoryError> {
        Ok(self.campgrounds.get(&(provider_id, id.to_owned())).cloned())
    }

    async fn list_for_recreation_area(
        &self,
        provider_id: ProviderId,
        recreation_area_id: &str,
    ) -> Result<Vec<Campground>, CampgroundRepositoryError> {
        let mut campgrounds: Vec<Campground> = self
            .campgrounds
            .values()
            .filter(|campground| {
                campground.provider_id() == provider_id
                    && campground.recreation_area_id() == Some(recreation_area_id)
            })
            .cloned()
            .collect();
        campgrounds.sort_by(|left, right| {
            left.name()
                .cmp(right.name())
                .then_with(|| left.id().cmp(right.id()))
        });
        Ok(campgrounds)
    }
}

#[async_trait]
impl SearchRepository for InMemoryCatalogue {
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchRepositoryError> {
        Ok(request.rank(self.search_rows.iter().cloned()))
    }
}
