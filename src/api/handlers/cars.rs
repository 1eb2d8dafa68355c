//! Car CRUD request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CARS_TAG;
use crate::api::dto::{CarPayload, CarResponse, Envelope};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates car-related routes.
pub fn car_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_cars))
        .routes(routes!(create_car))
        .routes(routes!(get_car))
        .routes(routes!(update_car))
        .routes(routes!(delete_car))
        // PATCH aliases the documented PUT
        .route("/{id}", axum::routing::patch(update_car))
}

/// GET /api/cars - List all cars
#[utoipa::path(
    get,
    path = "/",
    tag = CARS_TAG,
    responses(
        (status = 200, description = "All cars", body = Envelope)
    )
)]
async fn list_cars(State(state): State<AppState>) -> AppResult<Json<Envelope>> {
    let cars = state.services.cars.list_cars().await?;
    let responses: Vec<CarResponse> = cars.into_iter().map(CarResponse::from).collect();
    Ok(Json(Envelope::listing(responses)))
}

/// POST /api/cars - Create a new car
#[utoipa::path(
    post,
    path = "/",
    tag = CARS_TAG,
    request_body = CarPayload,
    responses(
        (status = 201, description = "Car created", body = Envelope),
        (status = 401, description = "Validation error", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CarPayload>,
) -> AppResult<(StatusCode, Json<Envelope>)> {
    let car = state
        .services
        .cars
        .create_car(payload.trimmed_name())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::record(CarResponse::from(car))),
    ))
}

/// GET /api/cars/:id - Get car by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CARS_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car found", body = Envelope),
        (status = 404, description = "Car not found", body = Envelope)
    )
)]
async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Envelope>> {
    let car = state.services.cars.get_car(id).await?;
    Ok(Json(Envelope::record(CarResponse::from(car))))
}

/// PUT /api/cars/:id - Rename car
#[utoipa::path(
    put,
    path = "/{id}",
    tag = CARS_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = CarPayload,
    responses(
        (status = 200, description = "Car updated", body = Envelope),
        (status = 401, description = "Validation error", body = Envelope),
        (status = 404, description = "Car not found", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<ValidatedJson<CarPayload>, AppError>,
) -> AppResult<Json<Envelope>> {
    // A missing id answers 404 even when the body is invalid
    state.services.cars.get_car(id).await?;
    let ValidatedJson(payload) = payload?;
    let car = state
        .services
        .cars
        .update_car(id, payload.trimmed_name())
        .await?;
    Ok(Json(Envelope::record(CarResponse::from(car))))
}

/// DELETE /api/cars/:id - Delete car
///
/// Deleting an absent id is an idempotent success; the association row, if
/// any, goes with the car via the cascading foreign key.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = CARS_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car deleted", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Envelope>> {
    state.services.cars.delete_car(id).await?;
    Ok(Json(Envelope::record("Car is deleted successfully")))
}
