//! CRUD handlers for the student roster.
//!
//! Ownership is checked against the `instructorid` supplied in the request
//! body: the caller's claimed identity is trusted at face value and is not
//! bound to the token issued by `/auth`. This is a known trust-boundary
//! weakness of the API contract, kept deliberately.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use validator::Validate;

use crate::{
    api_docs::ErrorResponse,
    entities::student::{Model, OwnerRequest, StudentRequest},
    error::ApiError,
    services::student_service,
};

#[utoipa::path(
    get,
    path = "/api/student",
    tag = "students",
    responses(
        (status = 200, description = "All students, across all instructors", body = [Model]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_students(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Response, ApiError> {
    let students = student_service::find_all(db.as_ref()).await?;

    Ok(Json(students).into_response())
}

#[utoipa::path(
    get,
    path = "/api/student/{id}",
    tag = "students",
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = OwnerRequest,
    responses(
        (status = 200, description = "Student found", body = Model),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_student(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerRequest>,
) -> Result<Response, ApiError> {
    // A row owned by another instructor and a missing row are reported the
    // same way.
    match student_service::find_owned(db.as_ref(), id, payload.instructor_id).await? {
        Some(student) => Ok(Json(student).into_response()),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    post,
    path = "/api/student",
    tag = "students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = Model),
        (status = 400, description = "Missing fields or duplicate", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_student(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<StudentRequest>,
) -> Result<Response, ApiError> {
    // Validate input
    if let Err(errors) = payload.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    let student = student_service::create(db.as_ref(), payload).await?;

    Ok((StatusCode::CREATED, Json(student)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/student/{id}",
    tag = "students",
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = Model),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 403, description = "Ownership mismatch", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_student(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentRequest>,
) -> Result<Response, ApiError> {
    // Validate input
    if let Err(errors) = payload.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    let student = student_service::update(db.as_ref(), id, payload).await?;

    Ok(Json(student).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/student/{id}",
    tag = "students",
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = OwnerRequest,
    responses(
        (status = 200, description = "Student deleted", body = Model),
        (status = 403, description = "Ownership mismatch", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_student(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerRequest>,
) -> Result<Response, ApiError> {
    let student = student_service::delete(db.as_ref(), id, payload.instructor_id).await?;

    Ok(Json(student).into_response())
}
