//! Book Review System
//!
//! A REST JSON API over an in-memory book catalog: catalog queries, user
//! registration and login, per-user book reviews, and an Open Library search
//! proxy that falls back to the local catalog.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use api::router as create_router;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
