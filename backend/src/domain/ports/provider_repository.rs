//! Read-side port for booking providers.

use async_trait::async_trait;

use crate::domain::{Provider, ProviderId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading providers.
    pub enum ProviderRepositoryError {
        /// Repository connection could not be established.
        Connection => "provider read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "provider read query failed: {message}",
    }
}

/// Port for reading providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderRepository: Send + Sync {
    /// Every provider, ordered by id.
    async fn list(&self) -> Result<Vec<Provider>, ProviderRepositoryError>;

    /// Look up one provider; `Ok(None)` when it does not exist.
    async fn find_by_id(&self, id: ProviderId)
    -> Result<Option<Provider>, ProviderRepositoryError>;
}

/// Fixture implementation for tests that do not exercise provider reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProviderRepository;

#[async_trait]
impl ProviderRepository for FixtureProviderRepository {
    async fn list(&self) -> Result<Vec<Provider>, ProviderRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: ProviderId,
    ) -> Result<Option<Provider>, ProviderRepositoryError> {
        Ok(None)
    }
}
