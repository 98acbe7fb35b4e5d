//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and catalogue
//! entities. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use camply_backend::outbound::persistence::{DbPool, DieselCatalogueRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/camply")).await?;
//! let repository = DieselCatalogueRepository::new(pool);
//! ```

mod diesel_catalogue_repository;
mod diesel_catalogue_seeder;
pub(crate) mod diesel_helpers;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_repository::DieselCatalogueRepository;
pub use diesel_catalogue_seeder::{DieselCatalogueSeeder, SeedSummary, SeedWriteError};
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
