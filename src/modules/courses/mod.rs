pub mod api;
pub mod service;

pub use service::{CourseFilter, autofill_category};
