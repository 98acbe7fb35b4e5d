//! Validation helpers shared by catalogue entities.

use super::CatalogueValidationError;

/// Storage width of identifier columns.
pub(super) const MAX_ID_CHARS: usize = 128;
/// Storage width of name columns.
pub(super) const MAX_NAME_CHARS: usize = 255;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(CatalogueValidationError::TooLong { field, max, actual });
    }
    Ok(value)
}

/// Collapse blank optional text to `None`.
pub(super) fn normalise_optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

pub(super) fn validate_optional_id(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, CatalogueValidationError> {
    normalise_optional(value)
        .map(|id| validate_non_empty_field(id, field, MAX_ID_CHARS))
        .transpose()
}

pub(super) fn ensure_coordinate(
    value: Option<f64>,
    field: &'static str,
    bound: f64,
) -> Result<Option<f64>, CatalogueValidationError> {
    match value {
        Some(number) if !number.is_finite() || !(-bound..=bound).contains(&number) => {
            Err(CatalogueValidationError::InvalidCoordinate {
                field,
                value: number,
                min: -bound,
                max: bound,
            })
        }
        other => Ok(other),
    }
}
