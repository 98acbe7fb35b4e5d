//! Read-side port for the denormalised search index.

use async_trait::async_trait;

use crate::domain::{SearchRequest, SearchResult};

use super::define_port_error;

define_port_error! {
    /// Errors raised when querying the search index.
    pub enum SearchRepositoryError {
        /// Repository connection could not be established.
        Connection => "search connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "search query failed: {message}",
    }
}

/// Port for querying the search index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Rows matching `request`, ordered as [`SearchRequest::compare`] and
    /// truncated to its limit. Callers never pass a blank request.
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchRepositoryError>;
}

/// Fixture implementation returning no matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSearchRepository;

#[async_trait]
impl SearchRepository for FixtureSearchRepository {
    async fn search(
        &self,
        _request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchRepositoryError> {
        Ok(Vec::new())
    }
}
