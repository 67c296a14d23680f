pub mod auth;
pub mod courses;
pub mod credit_hours;
pub mod departments;
pub mod faculties;
pub mod programs;
pub mod sessions;
