pub mod api;
pub mod service;

pub use service::{login_admin, logout, signup};
