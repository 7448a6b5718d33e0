pub mod admin;

pub use admin::CourseAdmin;
