//! Shared cache-control policies for HTTP handlers.

use actix_web::http::header;

/// Catalogue rows change only when the seed is reloaded.
pub const PUBLIC_FIVE_MINUTES: &str = "public, max-age=300";

/// Health-check responses must never be served from a cache.
pub const NO_STORE: &str = "no-store";

/// Cache-control header tuple for public catalogue reads.
pub const fn public_catalogue_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, PUBLIC_FIVE_MINUTES)
}

/// Cache-control header tuple for health responses.
pub const fn no_store_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, NO_STORE)
}
