use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        DefaultBodyLimit, Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{
    ApiResponse, CreatedDriverResponse, DriverSearchQuery, UpdatedDriverResponse,
};
use crate::dto::driver_payload::DriverPayload;
use crate::models::driver::Driver;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/drivers", get(list_drivers).post(create_driver))
        .route(
            "/drivers/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
        // Las fotos no tienen límite de tamaño
        .layer(DefaultBodyLimit::disable())
}

fn controller(state: &AppState) -> DriverController {
    DriverController::new(state.pool.clone(), state.uploads.clone())
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| bad_request_error(format!("Invalid driver id: {}", raw)))
}

async fn create_driver(
    State(state): State<AppState>,
    payload: DriverPayload,
) -> Result<Json<ApiResponse<CreatedDriverResponse>>, AppError> {
    let response = controller(&state).create(payload).await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: DriverPayload,
) -> Result<Json<ApiResponse<UpdatedDriverResponse>>, AppError> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let response = controller(&state).update(id, payload).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<u64>>, AppError> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let response = controller(&state).delete(id).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Option<Driver>>>, AppError> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
    query: Result<Query<DriverSearchQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Driver>>>, AppError> {
    let Query(query) = query?;
    let response = controller(&state).list(query.search.as_deref()).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(
            parse_id("abc").unwrap_err().to_string(),
            "Invalid driver id: abc"
        );
    }
}
