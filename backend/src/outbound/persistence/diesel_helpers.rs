//! Shared helpers for Diesel repository implementations.
//!
//! - Error mapping from pool and Diesel errors into port error constructors
//! - `LIKE` pattern escaping for type-ahead search

use tracing::debug;

use super::pool::PoolError;

/// Extract a readable message from a pool error.
pub fn map_pool_error_message(error: PoolError) -> String {
    error.message().to_owned()
}

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(map_pool_error_message(error))
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Closed connections are reported as connection failures so the HTTP layer
/// answers `503`; everything else is a query failure.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
///
/// PostgreSQL treats backslash as the default escape character.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `%needle%` pattern for substring matches.
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}

/// `needle%` pattern for prefix matches.
pub fn prefix_pattern(needle: &str) -> String {
    format!("{}%", escape_like(needle))
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(&'static str),
        Connection(String),
    }

    #[rstest]
    #[case("pines", "%pines%", "pines%")]
    #[case("50%_off", "%50\\%\\_off%", "50\\%\\_off%")]
    #[case("a\\b", "%a\\\\b%", "a\\\\b%")]
    fn like_patterns_escape_metacharacters(
        #[case] needle: &str,
        #[case] contains: &str,
        #[case] prefix: &str,
    ) {
        assert_eq!(contains_pattern(needle), contains);
        assert_eq!(prefix_pattern(needle), prefix);
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        let mapped = map_basic_diesel_error(error, Mapped::Query, |message: &'static str| {
            Mapped::Connection(message.to_owned())
        });
        assert_eq!(
            mapped,
            Mapped::Connection("database connection error".to_owned())
        );
    }

    #[rstest]
    fn other_errors_map_to_query() {
        let mapped = map_basic_diesel_error(DieselError::NotFound, Mapped::Query, |message| {
            Mapped::Connection(message.to_owned())
        });
        assert_eq!(mapped, Mapped::Query("record not found"));
    }
}
