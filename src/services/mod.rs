//! Services module
//!
//! Este módulo contiene los servicios de la aplicación que no son acceso a
//! la base de datos.

pub mod upload_service;

pub use upload_service::*;
