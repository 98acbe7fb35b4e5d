//! Debounced type-ahead search.
//!
//! [`SearchSession`] is a synchronous state machine: callers feed it input,
//! keys and timer ticks and read back a [`SearchView`]. [`spawn_search`]
//! runs a session on Tokio against a [`SearchSource`], handling the
//! debounce timer and cancelling superseded fetches.

use std::time::Duration;

use async_trait::async_trait;

use crate::client::ClientError;
use crate::dto::SearchResult;

mod cache;
mod driver;
mod session;

pub use cache::SearchCache;
pub use driver::{DriverStopped, SearchEvent, SearchHandle, spawn_search};
pub use session::{
    KeyOutcome, NavigationKey, SearchCommand, SearchSession, SearchStatus, SearchView, Selection,
};

/// Shortest trimmed query that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;
/// Quiet period after the last keystroke before searching.
pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// How long results for a query are reused.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Anything that can answer a type-ahead query.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Rows matching `query`, best first.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError>;
}
