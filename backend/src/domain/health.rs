//! Liveness report returned by the health endpoints.

use chrono::{DateTime, SecondsFormat, Utc};

/// Validation errors for [`HealthStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HealthStatusError {
    /// The status was not an HTTP status code.
    #[error("status must be within 100..=599 (got {0})")]
    OutOfRange(u16),
}

/// HTTP-style status code paired with the time it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    status: u16,
    timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// Validate and construct a report.
    ///
    /// # Errors
    /// Returns [`HealthStatusError::OutOfRange`] for codes outside
    /// `100..=599`.
    pub fn new(status: u16, timestamp: DateTime<Utc>) -> Result<Self, HealthStatusError> {
        if !(100..=599).contains(&status) {
            return Err(HealthStatusError::OutOfRange(status));
        }
        Ok(Self { status, timestamp })
    }

    /// A `200` report stamped with the current time.
    #[must_use]
    pub fn ok_now() -> Self {
        Self {
            status: 200,
            timestamp: Utc::now(),
        }
    }

    /// HTTP-style status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// When the report was taken.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp rendered as RFC 3339 with a `Z` suffix.
    #[must_use]
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
