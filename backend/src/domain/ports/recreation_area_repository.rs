//! Read-side port for recreation areas.

use async_trait::async_trait;

use crate::domain::{ProviderId, RecreationArea};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading recreation areas.
    pub enum RecreationAreaRepositoryError {
        /// Repository connection could not be established.
        Connection => "recreation area read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "recreation area read query failed: {message}",
    }
}

/// Port for reading recreation areas.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecreationAreaRepository: Send + Sync {
    /// Look up a recreation area by its provider-scoped identity.
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<RecreationArea>, RecreationAreaRepositoryError>;
}

/// Fixture implementation for tests that do not exercise recreation areas.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecreationAreaRepository;

#[async_trait]
impl RecreationAreaRepository for FixtureRecreationAreaRepository {
    async fn find(
        &self,
        _provider_id: ProviderId,
        _id: &str,
    ) -> Result<Option<RecreationArea>, RecreationAreaRepositoryError> {
        Ok(None)
    }
}
