//! User CRUD request handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USERS_TAG;
use crate::api::dto::{
    CreateUserRequest, Envelope, UpdateUserRequest, UserDetailResponse, UserResponse,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates user-related routes.
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users))
        .routes(routes!(create_user))
        .routes(routes!(get_user))
        .routes(routes!(update_user))
        .routes(routes!(delete_user))
        // PATCH aliases the documented PUT
        .route("/{id}", axum::routing::patch(update_user))
}

/// GET /api/users - List all users
///
/// Each user carries the derived `car_name` of their associated car.
#[utoipa::path(
    get,
    path = "/",
    tag = USERS_TAG,
    responses(
        (status = 200, description = "All users with derived car names", body = Envelope)
    )
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Envelope>> {
    let users = state.services.users.list_users().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(Envelope::listing(responses)))
}

/// POST /api/users - Register a new user
///
/// Validates name, unique email, confirmed password, and that the requested
/// car is not already taken, then persists the user and attaches the car
/// when it exists. Responds with the new user's id.
#[utoipa::path(
    post,
    path = "/",
    tag = USERS_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User registered, message carries the id", body = Envelope),
        (status = 401, description = "Validation error", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<Envelope>> {
    let user = state
        .services
        .users
        .create_user(payload.into_create_user())
        .await?;
    Ok(Json(Envelope::record(user.id)))
}

/// GET /api/users/:id - Get user details
///
/// Always answers 200: a missing user comes back as `status:false` with a
/// null message instead of a 404.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details, decorated with the association", body = Envelope)
    )
)]
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Envelope>> {
    let envelope = match state.services.users.get_user_detail(id).await? {
        Some(detail) => Envelope::record(UserDetailResponse::from(detail)),
        None => Envelope::missing_record(),
    };
    Ok(Json(envelope))
}

/// PUT /api/users/:id - Update user
///
/// Renames the user when `name` is present and always replaces the car
/// association: the previous link is detached, the new car attached when it
/// exists. Responds with the user's id.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated, message carries the id", body = Envelope),
        (status = 401, description = "Validation error", body = Envelope),
        (status = 404, description = "User not found", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<ValidatedJson<UpdateUserRequest>, AppError>,
) -> AppResult<Json<Envelope>> {
    // A missing id answers 404 even when the body is invalid
    state.services.users.get_user(id).await?;
    let ValidatedJson(payload) = payload?;
    let user_id = state
        .services
        .users
        .update_user(id, payload.into_update_user())
        .await?;
    Ok(Json(Envelope::record(user_id)))
}

/// DELETE /api/users/:id - Delete user
///
/// Deleting an absent id is an idempotent success; the association row, if
/// any, goes with the user via the cascading foreign key.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = Envelope),
        (status = 500, description = "Unexpected error", body = Envelope)
    )
)]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Envelope>> {
    state.services.users.delete_user(id).await?;
    Ok(Json(Envelope::record("User is deleted successfully")))
}
