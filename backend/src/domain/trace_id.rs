//! Correlation id for one API request.
//!
//! The id is held in a Tokio task-local while the request is handled, so
//! error payloads and log lines can pick it up without it being passed
//! around. Spawned tasks do not inherit it; wrap them in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Response (and optional request) header carrying the id.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// UUID identifying a request across logs, error bodies and headers.
///
/// # Examples
/// ```
/// use camply_backend::TraceId;
///
/// let upstream = "7d6f3c0e-2b1a-4e0f-9c3d-5a8b7e6f1d2c";
/// assert_eq!(TraceId::adopt_or_generate(Some(upstream)).to_string(), upstream);
/// assert_ne!(TraceId::adopt_or_generate(Some("nope")).to_string(), "nope");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Keep a caller-supplied id when it is a UUID, otherwise mint one.
    #[must_use]
    pub fn adopt_or_generate(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Id of the request being handled on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
