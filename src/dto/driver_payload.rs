//! Extractor del body de creación/actualización de drivers
//!
//! Acepta `multipart/form-data` (con foto opcional), JSON o urlencoded y
//! produce siempre un `DriverPayload` tipado.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use super::driver_dto::{DriverInput, PhotoUpload, RawDriverFields};
use crate::utils::errors::{bad_request_error, AppError};

/// Nombre del campo de formulario que lleva la foto
pub const PHOTO_FIELD: &str = "photo";

#[derive(Debug)]
pub struct DriverPayload {
    pub fields: DriverInput,
    pub photo: Option<PhotoUpload>,
}

#[async_trait]
impl<S> FromRequest<S> for DriverPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| bad_request_error(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let raw = if content_type.starts_with("application/json") {
            let Json(raw) = Json::<RawDriverFields>::from_request(req, state)
                .await
                .map_err(|e| bad_request_error(e.body_text()))?;
            raw
        } else {
            let Form(raw) = Form::<RawDriverFields>::from_request(req, state)
                .await
                .map_err(|e| bad_request_error(e.body_text()))?;
            raw
        };

        Ok(Self {
            fields: raw.into_input()?,
            photo: None,
        })
    }
}

impl DriverPayload {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut raw = RawDriverFields::default();
        let mut photo: Option<PhotoUpload> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| bad_request_error(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let file_name = field.file_name().map(str::to_owned);

            // Solo las partes con filename son archivos
            if name == PHOTO_FIELD && file_name.is_some() {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request_error(e.to_string()))?;

                // Navegadores envían la parte vacía cuando no se elige archivo
                if file_name.as_deref().unwrap_or_default().is_empty() && bytes.is_empty() {
                    continue;
                }
                if photo.is_some() {
                    return Err(bad_request_error(format!("Unexpected field: {}", name)));
                }
                photo = Some(PhotoUpload { file_name, bytes });
            } else if file_name.is_some() {
                return Err(bad_request_error(format!("Unexpected field: {}", name)));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| bad_request_error(e.to_string()))?;
                raw.set(&name, value);
            }
        }

        Ok(Self {
            fields: raw.into_input()?,
            photo,
        })
    }
}
