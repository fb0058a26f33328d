//! Modelo de Driver
//!
//! Mapea exactamente a la tabla `drivers` de SQLite con primary key `id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Driver principal - una fila de la tabla drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub joining_date: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub photo_url: Option<String>,
    pub current_car_no: Option<String>,
    pub past_car_no: Option<String>,
}
