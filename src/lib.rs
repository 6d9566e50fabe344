pub mod api_docs;
pub mod auth;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod services;

// Re-export commonly used items for easier use in tests
pub use api_docs::ApiDoc;
pub use db::{ensure_schema_exists, init_db};
pub use error::ApiError;
