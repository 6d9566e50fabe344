use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString},
    Argon2, PasswordHasher,
};
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use validator::Validate;

use crate::{
    api_docs::{AuthResponse, ErrorResponse},
    auth::jwt,
    entities::instructor::{LoginRequest, RegisterRequest},
    error::ApiError,
    services::instructor_service,
};

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Instructor registered, returns signed token", body = AuthResponse),
        (status = 400, description = "Invalid input or username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn register_instructor(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response, ApiError> {
    // Validate input
    if let Err(errors) = payload.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    // Check if username already exists. The unique constraint on the column
    // still catches an insert racing past this check.
    if instructor_service::find_by_username(db.as_ref(), &payload.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Duplicate("Username already exists".to_string()));
    }

    // Hash password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = match argon2.hash_password(payload.password.as_bytes(), &salt) {
        Ok(hash) => hash.to_string(),
        Err(e) => {
            tracing::error!("Password hashing error: {:?}", e);
            return Err(ApiError::Internal("Failed to hash password".to_string()));
        }
    };

    // Create new instructor
    let instructor =
        instructor_service::create(db.as_ref(), payload.username, password_hash).await?;

    // Generate JWT token carrying the new instructor's id
    let token = jwt::create_token(instructor.id, &instructor.username)?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token })).into_response())
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, returns signed token", body = AuthResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn login_instructor(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    // Validate input
    if let Err(errors) = payload.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    // Find instructor by username
    let instructor =
        match instructor_service::find_by_username(db.as_ref(), &payload.username).await? {
            Some(instructor) => instructor,
            None => return Err(ApiError::Unauthorized),
        };

    // Parse the stored password hash
    let parsed_hash = match PasswordHash::new(&instructor.password) {
        Ok(hash) => hash,
        Err(_) => {
            tracing::error!("Failed to parse password hash");
            return Err(ApiError::Internal("Authentication error".to_string()));
        }
    };

    // Verify the password
    let argon2 = Argon2::default();
    if argon2
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(ApiError::Unauthorized);
    }

    // Generate JWT token
    let token = jwt::create_token(instructor.id, &instructor.username)?;

    Ok((StatusCode::OK, Json(AuthResponse { token })).into_response())
}
