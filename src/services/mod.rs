pub mod instructor_service;
pub mod student_service;
