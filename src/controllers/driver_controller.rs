use crate::dto::driver_dto::{ApiResponse, CreatedDriverResponse, UpdatedDriverResponse};
use crate::dto::driver_payload::DriverPayload;
use crate::models::driver::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::services::upload_service::UploadService;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;

pub struct DriverController {
    repository: DriverRepository,
    uploads: UploadService,
}

impl DriverController {
    pub fn new(pool: SqlitePool, uploads: UploadService) -> Self {
        Self {
            repository: DriverRepository::new(pool),
            uploads,
        }
    }

    pub async fn create(
        &self,
        payload: DriverPayload,
    ) -> Result<ApiResponse<CreatedDriverResponse>, AppError> {
        let photo_url = self.uploads.store(payload.photo.as_ref()).await?;

        let id = self
            .repository
            .create(&payload.fields, photo_url.as_deref())
            .await?;
        info!("✅ Driver {} creado", id);

        Ok(ApiResponse::success_with_message(
            CreatedDriverResponse {
                id,
                fields: payload.fields,
                photo_url,
            },
            "Driver added successfully",
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        payload: DriverPayload,
    ) -> Result<ApiResponse<UpdatedDriverResponse>, AppError> {
        let photo_url = self.uploads.store(payload.photo.as_ref()).await?;

        let affected = self
            .repository
            .update(id, &payload.fields, photo_url.as_deref())
            .await?;
        info!("✅ Driver {} actualizado ({} filas)", id, affected);

        Ok(ApiResponse::success_with_message(
            UpdatedDriverResponse {
                id,
                fields: payload.fields,
                photo_url: photo_url.unwrap_or_else(|| "unchanged".to_string()),
            },
            "Driver updated successfully",
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<u64>, AppError> {
        let affected = self.repository.delete(id).await?;
        info!("🗑️ Driver {} eliminado ({} filas)", id, affected);

        Ok(ApiResponse::success_with_message(
            affected,
            "Driver deleted successfully",
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Option<Driver>>, AppError> {
        let driver = self.repository.find_by_id(id).await?;
        Ok(ApiResponse::success(driver))
    }

    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<ApiResponse<Vec<Driver>>, AppError> {
        let drivers = self.repository.list(search).await?;
        Ok(ApiResponse::success_with_message(drivers, "success"))
    }
}
