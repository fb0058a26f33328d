//! API endpoints
//!
//! Este módulo arma el router completo de la aplicación.

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::routes::driver_routes::create_driver_router;
use crate::services::upload_service::UPLOADS_ROUTE;
use crate::state::AppState;

/// Crear el router principal: `/api` para drivers y `/uploads` para las fotos
pub fn create_app(state: AppState) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/api", create_driver_router())
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
