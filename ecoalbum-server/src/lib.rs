//! HTTP API server for the EcoAlbum protected-species catalog.
//!
//! Thin transport layer over `ecoalbum-core`: route table, query-parameter
//! parsing, and the HTTP error mapping. Built on Axum with PostgreSQL for
//! persistent storage.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use errors::{AppError, AppResult};
pub use infra::app_state::AppState;
pub use routes::create_app;
