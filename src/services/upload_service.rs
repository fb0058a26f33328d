//! Servicio de almacenamiento de fotos
//!
//! Guarda el adjunto en el directorio de uploads con un nombre derivado del
//! timestamp en milisegundos y devuelve la ruta pública `/uploads/<archivo>`.
//! No valida tipo ni tamaño, y no borra archivos huérfanos.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::dto::driver_dto::PhotoUpload;

/// Prefijo público bajo el que se sirven los archivos subidos
pub const UPLOADS_ROUTE: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Crear el directorio de uploads si no existe
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        info!("📁 Directorio de uploads listo: {}", self.dir.display());
        Ok(())
    }

    /// Persistir la foto, si hay, y devolver su ruta pública
    pub async fn store(&self, photo: Option<&PhotoUpload>) -> std::io::Result<Option<String>> {
        let Some(photo) = photo else {
            return Ok(None);
        };

        let file_name = generate_file_name(
            Utc::now().timestamp_millis(),
            photo.file_name.as_deref(),
        );
        let path = self.dir.join(&file_name);

        // Una colisión de nombre sobrescribe el archivo anterior
        tokio::fs::write(&path, &photo.bytes).await?;
        debug!("💾 Foto guardada en {} ({} bytes)", path.display(), photo.bytes.len());

        Ok(Some(format!("{}/{}", UPLOADS_ROUTE, file_name)))
    }
}

/// `<millis><.ext>` usando la extensión del nombre original
fn generate_file_name(millis: i64, original_name: Option<&str>) -> String {
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}{}", millis, extension)
}
