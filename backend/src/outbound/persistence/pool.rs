//! bb8 pool of `diesel-async` PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::info;

use crate::domain::ports::define_port_error;

define_port_error! {
    /// Pool construction and checkout failures.
    pub enum PoolError {
        /// No connection became available before the checkout timeout.
        Checkout => "no pooled connection available: {message}",
        /// The manager rejected the URL or the first connect failed.
        Build => "connection pool could not be built: {message}",
    }
}

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to connect and how many connections to hold.
///
/// The idle floor is a quarter of `max_size`, at least one, so a seed run
/// with two connections and the API server with ten both keep a warm
/// connection.
///
/// ```
/// use std::time::Duration;
/// use camply_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://camply@localhost/camply")
///     .with_max_size(8)
///     .with_checkout_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 8);
/// assert_eq!(config.min_idle(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Ten connections with a thirty second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the pool at `max_size` connections; zero is raised to one.
    #[must_use]
    pub fn with_max_size(self, max_size: u32) -> Self {
        Self {
            max_size: max_size.max(1),
            ..self
        }
    }

    /// How long [`DbPool::get`] waits before failing.
    #[must_use]
    pub fn with_checkout_timeout(self, checkout_timeout: Duration) -> Self {
        Self {
            checkout_timeout,
            ..self
        }
    }

    /// Connection URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Connection ceiling.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Connections kept open while idle.
    pub fn min_idle(&self) -> u32 {
        (self.max_size / 4).max(1)
    }

    /// Checkout timeout.
    pub fn checkout_timeout(&self) -> Duration {
        self.checkout_timeout
    }
}

/// Cloneable handle shared by the Diesel adapters.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Connect and fill the idle floor.
    ///
    /// # Errors
    /// [`PoolError::Build`] when bb8 cannot establish the pool.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());
        let inner = Pool::builder()
            .max_size(config.max_size())
            .min_idle(Some(config.min_idle()))
            .connection_timeout(config.checkout_timeout())
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        info!(
            max_size = config.max_size(),
            min_idle = config.min_idle(),
            "catalogue database pool ready"
        );
        Ok(Self { inner })
    }

    /// Borrow a connection for one repository call.
    ///
    /// # Errors
    /// [`PoolError::Checkout`] when the timeout elapses first.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn new_uses_server_sizing() {
        let config = PoolConfig::new("postgres://localhost/camply");
        assert_eq!(config.database_url(), "postgres://localhost/camply");
        assert_eq!(config.max_size(), 10);
        assert_eq!(config.checkout_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    #[case(0, 1, 1)]
    #[case(2, 2, 1)]
    #[case(10, 10, 2)]
    #[case(40, 40, 10)]
    fn idle_floor_tracks_max_size(#[case] requested: u32, #[case] max: u32, #[case] idle: u32) {
        let config = PoolConfig::new("postgres://localhost/camply").with_max_size(requested);
        assert_eq!((config.max_size(), config.min_idle()), (max, idle));
    }

    #[rstest]
    fn errors_name_the_failed_step() {
        let err = PoolError::checkout("timed out");
        assert_eq!(err.to_string(), "no pooled connection available: timed out");
        assert_eq!(err.message(), "timed out");
    }
}
