pub mod instructor;
pub mod student;

pub mod prelude {
    pub use super::instructor::Entity as Instructor;
    pub use super::student::Entity as Student;
}
