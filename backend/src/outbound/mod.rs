//! Outbound adapters implementing the catalogue read ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: seed-backed catalogue for local runs and tests
//!
//! Adapters translate between storage representations and domain types.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
