//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `car` - Car request/response DTOs
//! - `user` - User request/response DTOs
//! - `envelope` - The uniform `{status, message|response, errors?}` wrapper

mod car;
mod envelope;
mod user;

use validator::ValidationError;

/// Name rule shared by the car and user request bodies. Persistence stores
/// the trimmed value, so a whitespace-only name counts as absent.
pub(crate) fn validate_required_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(
            ValidationError::new("required").with_message("The name field is required.".into())
        );
    }
    Ok(())
}

pub use car::{CarPayload, CarResponse};
pub use envelope::Envelope;
pub use user::{
    CarLinkResponse, CreateUserRequest, UpdateUserRequest, UserDetailResponse, UserResponse,
};
