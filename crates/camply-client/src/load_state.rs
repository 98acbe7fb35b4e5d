//! View state for data fetched on page load.

use crate::client::ClientError;
use crate::dto::HealthStatus;

/// Shown on the health panel while the backend is unreachable.
pub const HEALTH_FAILED_MESSAGE: &str = "Failed to connect to backend";
/// Shown on any panel while a request is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Progress of a single page-level request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Request still in flight.
    #[default]
    Loading,
    /// The API answered 404.
    NotFound,
    /// Any other failure, with a message suitable for display.
    Failed(String),
    /// The payload arrived.
    Ready(T),
}

impl<T> LoadState<T> {
    /// Fold a client result into a view state.
    ///
    /// # Examples
    /// ```
    /// use camply_client::{ClientError, LoadState};
    ///
    /// let missing: LoadState<u8> = LoadState::from_result(Err(ClientError::NotFound {
    ///     path: "/api/provider/9".to_owned(),
    /// }));
    /// assert_eq!(missing, LoadState::NotFound);
    /// assert_eq!(LoadState::from_result(Ok(3)), LoadState::Ready(3));
    /// ```
    #[must_use]
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(ClientError::NotFound { .. }) => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Whether the spinner should show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded value, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the loaded value, keeping other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::NotFound => LoadState::NotFound,
            Self::Failed(message) => LoadState::Failed(message),
            Self::Ready(value) => LoadState::Ready(f(value)),
        }
    }
}

impl<T> From<Result<T, ClientError>> for LoadState<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        Self::from_result(result)
    }
}

impl LoadState<HealthStatus> {
    /// Lines rendered by the backend status panel.
    #[must_use]
    pub fn health_lines(&self) -> Vec<String> {
        match self {
            Self::Loading => vec![LOADING_MESSAGE.to_owned()],
            Self::Ready(health) => vec![
                format!("Status: {}", health.status),
                format!(
                    "Timestamp: {}",
                    health
                        .timestamp
                        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
                ),
            ],
            Self::NotFound | Self::Failed(_) => vec![HEALTH_FAILED_MESSAGE.to_owned()],
        }
    }
}
