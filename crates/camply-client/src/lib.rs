//! Client library for the camply catalogue API.
//!
//! - [`client`]: REST client with retry and typed errors
//! - [`dto`]: response payloads mirrored from the API
//! - [`load_state`]: loading/not-found/failed/ready view states
//! - [`search`]: debounced type-ahead session and its Tokio driver
//! - [`sanitize`] and [`description`]: safe HTML and collapsible previews
//! - [`preferences`]: theme and banner persistence
//! - [`routes`]: client route table
//! - [`text`]: display helpers

pub mod client;
pub mod description;
pub mod dto;
pub mod load_state;
pub mod preferences;
pub mod routes;
pub mod sanitize;
pub mod search;
pub mod text;

pub use client::{CamplyClient, ClientConfig, ClientError};
pub use load_state::LoadState;
pub use routes::AppRoute;
