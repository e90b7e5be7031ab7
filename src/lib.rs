pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod session;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::session::BookingSession;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let catalog = Catalog::with_default_films(&config.pricing);
        Arc::new(Self { config, catalog })
    }

    // Новый сеанс бронирования поверх общего каталога
    pub fn new_session(&self) -> BookingSession {
        BookingSession::new(&self.catalog, &self.config.hall)
    }
}
