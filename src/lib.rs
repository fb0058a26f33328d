//! Driver Registry
//!
//! Backend CRUD de perfiles de conductores sobre SQLite, con subida de fotos.

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
