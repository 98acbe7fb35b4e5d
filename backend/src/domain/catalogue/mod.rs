//! Catalogue read-model domain types.
//!
//! Providers, recreation areas and campgrounds are immutable projections of
//! the upstream booking platforms. Constructors validate drafts so adapters
//! cannot hand malformed rows to the HTTP layer.

mod booking;
mod campground;
mod location;
mod provider;
mod recreation_area;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::BookingPlatform;
pub use campground::{Campground, CampgroundDraft};
pub use location::Location;
pub use provider::{Provider, ProviderDraft, ProviderId};
pub use recreation_area::{RecreationArea, RecreationAreaDraft};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueValidationError {
    /// A required text field was blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Dotted field path.
        field: &'static str,
    },
    /// A text field exceeded its storage width.
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        /// Dotted field path.
        field: &'static str,
        /// Maximum permitted characters.
        max: usize,
        /// Observed characters.
        actual: usize,
    },
    /// A coordinate was not finite or outside WGS84 bounds.
    #[error("{field} must be a finite value within [{min}, {max}] (got {value})")]
    InvalidCoordinate {
        /// Dotted field path.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}
