//! Router configuration for the API.
//!
//! Centralized route registration, middleware layering, and OpenAPI
//! document assembly.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router.
///
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so request IDs exist before the logging layer reads them.
///
/// # Routes
/// - `/api/cars` - Car CRUD operations
/// - `/api/users` - User CRUD operations
/// - `/health` - Liveness and database connectivity
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/cars", handlers::cars::car_routes())
        .nest("/api/users", handlers::users::user_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
