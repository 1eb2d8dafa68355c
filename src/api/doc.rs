use utoipa::OpenApi;

pub const CARS_TAG: &str = "Cars";
pub const USERS_TAG: &str = "Users";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet",
        description = "A cars-and-users registry API",
    ),
    components(
        schemas(
            crate::api::dto::Envelope,
            crate::api::dto::CarPayload,
            crate::api::dto::CarResponse,
            crate::api::dto::CreateUserRequest,
            crate::api::dto::UpdateUserRequest,
            crate::api::dto::UserResponse,
            crate::api::dto::CarLinkResponse,
            crate::api::dto::UserDetailResponse,
        )
    ),
    tags(
        (name = CARS_TAG, description = "Car management endpoints"),
        (name = USERS_TAG, description = "User management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
