//! Embedded PostgreSQL for the Diesel adapter suites.
//!
//! The cluster comes from `pg-embed-setup-unpriv` and is shared by every
//! test in the binary. Each test gets its own temporary database with the
//! catalogue migrations applied.
//!
//! Set `SKIP_TEST_CLUSTER=1` on hosts where PostgreSQL cannot be
//! bootstrapped; otherwise a setup failure fails the test.

use std::fmt::Display;

use camply_backend::outbound::persistence::run_migrations;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" in any case.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker line when allowed, panic otherwise.
pub fn handle_cluster_setup_failure<T>(reason: impl Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Fresh database on the shared cluster with the schema in place.
///
/// The database is dropped when the returned handle goes out of scope.
pub fn migrated_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let database = cluster
        .temporary_database(format!("test_{}", uuid::Uuid::new_v4()))
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    run_migrations(database.url()).map_err(|err| format!("migrations: {err}"))?;
    Ok(database)
}
