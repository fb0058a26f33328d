//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El pool se crea una vez en el arranque y se
//! inyecta aquí; no hay estado global.

use crate::config::environment::EnvironmentConfig;
use crate::services::upload_service::UploadService;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub uploads: UploadService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let uploads = UploadService::new(config.upload_dir.clone());
        Self {
            pool,
            config,
            uploads,
        }
    }
}
