//! Camply catalogue service.
//!
//! Hexagonal layout: [`domain`] holds entities, ports and the catalogue
//! service; [`inbound`] adapts HTTP requests; [`outbound`] implements the
//! ports over PostgreSQL or an in-memory seed.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
