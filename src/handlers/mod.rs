pub mod auth_handler;
pub mod student_handler;
