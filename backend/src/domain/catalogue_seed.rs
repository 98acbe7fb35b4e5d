//! Catalogue snapshots loaded from JSON seed documents.
//!
//! A seed holds providers, recreation areas and campgrounds as validated
//! entities. [`CatalogueSeed::validate`] enforces referential integrity and
//! [`CatalogueSeed::search_rows`] derives the denormalised search index.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::{Campground, Provider, ProviderId, RecreationArea, SearchResult};

/// Problems found while loading a seed document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueSeedError {
    /// The document was not valid JSON or an entity failed validation.
    #[error("invalid catalogue seed: {message}")]
    Parse {
        /// Parser or validation message.
        message: String,
    },
    /// The same identity appeared twice.
    #[error("duplicate {kind} {provider_id}/{id}")]
    Duplicate {
        /// Entity kind.
        kind: &'static str,
        /// Owning provider.
        provider_id: ProviderId,
        /// Provider-scoped identifier.
        id: String,
    },
    /// An entity referenced a provider that is not in the seed.
    #[error("{kind} {id} references unknown provider {provider_id}")]
    UnknownProvider {
        /// Entity kind.
        kind: &'static str,
        /// Referencing entity.
        id: String,
        /// Missing provider.
        provider_id: ProviderId,
    },
    /// A campground referenced a recreation area that is not in the seed.
    #[error("campground {campground_id} references unknown recreation area {provider_id}/{recreation_area_id}")]
    UnknownRecreationArea {
        /// Referencing campground.
        campground_id: String,
        /// Owning provider.
        provider_id: ProviderId,
        /// Missing recreation area.
        recreation_area_id: String,
    },
}

/// Complete catalogue snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueSeed {
    /// Providers, written first.
    #[serde(default)]
    pub providers: Vec<Provider>,
    /// Recreation areas.
    #[serde(default)]
    pub recreation_areas: Vec<RecreationArea>,
    /// Campgrounds, written last.
    #[serde(default)]
    pub campgrounds: Vec<Campground>,
}

impl CatalogueSeed {
    /// Parse and validate a JSON seed document.
    ///
    /// # Errors
    /// Returns [`CatalogueSeedError::Parse`] for malformed JSON or invalid
    /// entities, and the referential variants from [`Self::validate`].
    ///
    /// # Examples
    /// ```
    /// use camply_backend::domain::CatalogueSeed;
    ///
    /// let seed = CatalogueSeed::from_json(
    ///     r#"{"providers":[{"id":1,"name":"RecreationDotGov","url":"https://www.recreation.gov"}]}"#,
    /// )
    /// .expect("valid seed");
    /// assert_eq!(seed.providers.len(), 1);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, CatalogueSeedError> {
        let seed: Self = serde_json::from_str(text).map_err(|err| CatalogueSeedError::Parse {
            message: err.to_string(),
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check identities are unique and references resolve.
    ///
    /// # Errors
    /// Returns the first referential problem found.
    pub fn validate(&self) -> Result<(), CatalogueSeedError> {
        let mut provider_ids = BTreeSet::new();
        for provider in &self.providers {
            if !provider_ids.insert(provider.id()) {
                return Err(CatalogueSeedError::Duplicate {
                    kind: "provider",
                    provider_id: provider.id(),
                    id: provider.id().to_string(),
                });
            }
        }

        let mut area_keys = BTreeSet::new();
        for area in &self.recreation_areas {
            if !provider_ids.contains(&area.provider_id()) {
                return Err(CatalogueSeedError::UnknownProvider {
                    kind: "recreation area",
                    id: area.id().to_owned(),
                    provider_id: area.provider_id(),
                });
            }
            if !area_keys.insert((area.provider_id(), area.id())) {
                return Err(CatalogueSeedError::Duplicate {
                    kind: "recreation area",
                    provider_id: area.provider_id(),
                    id: area.id().to_owned(),
                });
            }
        }

        let mut campground_keys = BTreeSet::new();
        for campground in &self.campgrounds {
            let provider_id = campground.provider_id();
            if !provider_ids.contains(&provider_id) {
                return Err(CatalogueSeedError::UnknownProvider {
                    kind: "campground",
                    id: campground.id().to_owned(),
                    provider_id,
                });
            }
            if let Some(area_id) = campground.recreation_area_id() {
                if !area_keys.contains(&(provider_id, area_id)) {
                    return Err(CatalogueSeedError::UnknownRecreationArea {
                        campground_id: campground.id().to_owned(),
                        provider_id,
                        recreation_area_id: area_id.to_owned(),
                    });
                }
            }
            if !campground_keys.insert((provider_id, campground.id())) {
                return Err(CatalogueSeedError::Duplicate {
                    kind: "campground",
                    provider_id,
                    id: campground.id().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Derive search rows for enabled recreation areas and for enabled,
    /// reservable campgrounds.
    #[must_use]
    pub fn search_rows(&self) -> Vec<SearchResult> {
        let providers: BTreeMap<ProviderId, &Provider> = self
            .providers
            .iter()
            .map(|provider| (provider.id(), provider))
            .collect();
        let areas: BTreeMap<(ProviderId, &str), &RecreationArea> = self
            .recreation_areas
            .iter()
            .map(|area| ((area.provider_id(), area.id()), area))
            .collect();

        let area_rows = self
            .recreation_areas
            .iter()
            .filter(|area| area.enabled())
            .filter_map(|area| {
                providers
                    .get(&area.provider_id())
                    .map(|provider| SearchResult::for_recreation_area(provider, area))
            });

        let campground_rows = self
            .campgrounds
            .iter()
            .filter(|campground| campground.enabled() && campground.reservable())
            .filter_map(|campground| {
                let provider = providers.get(&campground.provider_id())?;
                let parent = campground
                    .recreation_area_id()
                    .and_then(|area_id| areas.get(&(campground.provider_id(), area_id)))
                    .copied();
                Some(SearchResult::for_campground(provider, campground, parent))
            });

        area_rows.chain(campground_rows).collect()
    }
}
