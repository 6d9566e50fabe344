use axum::{
    routing::{get, post},
    Extension, Router,
};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use classroom_manager::api_docs::ApiDoc;
use classroom_manager::db::{ensure_schema_exists, init_db};
use classroom_manager::handlers::{auth_handler, student_handler};

use tower_http::cors::{Any, CorsLayer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let db = init_db().await?;

    ensure_schema_exists(&db).await?;
    tracing::info!("Database schema initialized");

    let student_routes = Router::new()
        .route(
            "/api/student",
            get(student_handler::list_students).post(student_handler::create_student),
        )
        .route(
            "/api/student/{id}",
            get(student_handler::get_student)
                .put(student_handler::update_student)
                .delete(student_handler::delete_student),
        );

    let auth_routes = Router::new()
        .route("/auth/register", post(auth_handler::register_instructor))
        .route("/auth/login", post(auth_handler::login_instructor));

    let openapi = ApiDoc::openapi();

    let cors_layer = CorsLayer::new().allow_origin(Any); //fixme: restrict origins once the frontend url is known

    let app = Router::new()
        .route("/", get(|| async { "Hello from Classroom Manager!" }))
        .merge(student_routes)
        .merge(auth_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(cors_layer)
        .layer(Extension(Arc::new(db)));

    start_server(app).await?;

    Ok(())
}

async fn start_server(app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Server started on {}", addr);

    match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => {
            axum::serve(listener, app.into_make_service()).await?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to bind to address: {}", e);
            Err(e.into())
        }
    }
}
