use axum::body::Bytes;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::errors::{AppError, AppResult};

// Campos tal como llegan en el body (JSON, urlencoded o multipart).
// Números y booleanos se guardan como texto.
#[derive(Debug, Default, Deserialize)]
pub struct RawDriverFields {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub joining_date: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub present_address: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub permanent_address: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub current_car_no: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub past_car_no: Option<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}

impl RawDriverFields {
    /// Asignar un campo de texto por nombre; los desconocidos se ignoran
    pub fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.name,
            "mobile" => &mut self.mobile,
            "joining_date" => &mut self.joining_date,
            "present_address" => &mut self.present_address,
            "permanent_address" => &mut self.permanent_address,
            "current_car_no" => &mut self.current_car_no,
            "past_car_no" => &mut self.past_car_no,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Exigir `name` y `mobile` antes de llegar al repositorio
    pub fn into_input(self) -> AppResult<DriverInput> {
        Ok(DriverInput {
            name: self.name.ok_or(AppError::MissingField("name"))?,
            mobile: self.mobile.ok_or(AppError::MissingField("mobile"))?,
            joining_date: self.joining_date,
            present_address: self.present_address,
            permanent_address: self.permanent_address,
            current_car_no: self.current_car_no,
            past_car_no: self.past_car_no,
        })
    }
}

// Campos mutables de un driver, ya validados
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverInput {
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_car_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_car_no: Option<String>,
}

impl DriverInput {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            joining_date: None,
            present_address: None,
            permanent_address: None,
            current_car_no: None,
            past_car_no: None,
        }
    }
}

// Archivo adjunto del campo `photo`
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

// Query de listado
#[derive(Debug, Default, Deserialize)]
pub struct DriverSearchQuery {
    pub search: Option<String>,
}

// Response de creación: id asignado + campos recibidos + photo_url resuelto
#[derive(Debug, Serialize)]
pub struct CreatedDriverResponse {
    pub id: i64,
    #[serde(flatten)]
    pub fields: DriverInput,
    pub photo_url: Option<String>,
}

// Response de actualización: photo_url es la ruta nueva o "unchanged"
#[derive(Debug, Serialize)]
pub struct UpdatedDriverResponse {
    pub id: i64,
    #[serde(flatten)]
    pub fields: DriverInput,
    pub photo_url: String,
}

/// Sobre común de las respuestas exitosas
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}
