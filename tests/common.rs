use axum::{
    body::{to_bytes, Body},
    extract::Extension,
    http::{self, Request},
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::{env, sync::Arc};

use classroom_manager::{
    entities::{instructor, student},
    handlers::{auth_handler, student_handler},
};

// Define a constant for the body size limit (16MB)
const BODY_SIZE_LIMIT: usize = 16 * 1024 * 1024;

/// Sets up the JWT_SECRET environment variable for tests
pub fn setup_jwt_secret() {
    env::set_var("JWT_SECRET", "test_secret_for_tests");
}

/// Creates an in-memory SQLite database for testing
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    dotenv().ok();
    setup_jwt_secret();
    let db = Database::connect("sqlite::memory:").await?;
    classroom_manager::db::ensure_schema_exists(&db).await?;
    Ok(db)
}

/// Creates a test app with the real routes
pub fn create_test_app(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route(
            "/api/student",
            get(student_handler::list_students).post(student_handler::create_student),
        )
        .route(
            "/api/student/{id}",
            get(student_handler::get_student)
                .put(student_handler::update_student)
                .delete(student_handler::delete_student),
        )
        .route("/auth/register", post(auth_handler::register_instructor))
        .route("/auth/login", post(auth_handler::login_instructor))
        .layer(Extension(db))
}

/// Inserts a student row directly into the database
pub async fn create_test_student(
    db: &DatabaseConnection,
    name: &str,
    cohort: &str,
    instructor_id: i32,
) -> Result<student::Model, DbErr> {
    use sea_orm::{ActiveModelTrait, Set};

    let student = student::ActiveModel {
        name: Set(name.to_string()),
        cohort: Set(cohort.to_string()),
        instructor_id: Set(instructor_id),
        ..Default::default()
    };

    student.insert(db).await
}

/// Inserts an instructor row with an argon2-hashed password
pub async fn create_test_instructor(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<instructor::Model, DbErr> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };
    use sea_orm::{ActiveModelTrait, Set};

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash test password")
        .to_string();

    let instructor = instructor::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash),
        ..Default::default()
    };

    instructor.insert(db).await
}

/// Creates a JSON request
pub fn create_request<B>(method: http::Method, uri: &str, body: B) -> Request<Body>
where
    B: Into<Body>,
{
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(body.into())
        .unwrap()
}

/// Helper to parse response body as JSON
pub async fn parse_json<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = to_bytes(body, BODY_SIZE_LIMIT).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
