//! Bookshelf
//!
//! A small REST JSON server lending books out of an in-memory registry:
//! list, lookup, create, checkout and return.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// State backed by a freshly seeded registry
    pub fn seeded() -> Self {
        let repository = repository::Repository::new(repository::BookRegistry::seeded());
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
