//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://driver_management_v2.db".to_string(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Leer `DATABASE_URL` y `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a valid number, got '{}'", raw)
            })?,
            Err(_) => defaults.max_connections,
        };

        Ok(Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections,
            connect_timeout: defaults.connect_timeout,
        })
    }

    /// Crear un nuevo pool de conexiones; el archivo se crea si no existe
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await
    }

    /// Crear un pool en memoria para testing
    ///
    /// Cada conexión SQLite en memoria es una base distinta, así que el pool
    /// se limita a una sola conexión que nunca se recicla.
    pub async fn create_test_pool() -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
    }
}
