use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Authentication response carrying the signed instructor token
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::student_handler::list_students,
        crate::handlers::student_handler::get_student,
        crate::handlers::student_handler::create_student,
        crate::handlers::student_handler::update_student,
        crate::handlers::student_handler::delete_student,
        crate::handlers::auth_handler::register_instructor,
        crate::handlers::auth_handler::login_instructor,
    ),
    components(
        schemas(
            AuthResponse,
            ErrorResponse,
            crate::entities::student::Model,
            crate::entities::student::StudentRequest,
            crate::entities::student::OwnerRequest,
            crate::entities::instructor::RegisterRequest,
            crate::entities::instructor::LoginRequest,
        )
    ),
    tags(
        (name = "students", description = "Student roster endpoints"),
        (name = "authentication", description = "Instructor registration and login")
    ),
    info(
        title = "Classroom Manager API",
        version = "0.1.0",
        description = "CRUD over the student roster with instructor ownership checks",
    )
)]
pub struct ApiDoc;
