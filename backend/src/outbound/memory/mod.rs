//! In-process adapters backed by a catalogue seed.
//!
//! Used for local runs without PostgreSQL and by the integration tests.

mod in_memory_catalogue;

pub use in_memory_catalogue::{InMemoryCatalogue, SeedLoadError, read_seed_file};
