//! # Registra Core
//!
//! Core types, errors, and list utilities for the Registra console.
//!
//! This crate provides foundational types used throughout the Registra
//! application:
//!
//! - [`errors`]: Application error taxonomy (validation, backend, transport)
//! - [`listing`]: The in-memory filter/pagination engine behind every table
//! - [`serde`]: Custom serde deserialization helpers for the backend's wire format
//! - [`export`]: CSV and XLSX export of table rows
//!
//! # Example
//!
//! ```ignore
//! use registra_core::errors::AppError;
//! use registra_core::listing::{ListQuery, select_page};
//!
//! // Create an error
//! let error = AppError::validation(anyhow::anyhow!("Course code is required"));
//!
//! // Page through a filtered collection
//! let query = ListQuery::default();
//! let page = select_page(&rows, |r| r.name.contains("Physics"), &query);
//! ```

pub mod errors;
pub mod export;
pub mod listing;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use listing::{ListQuery, Page, PageMeta, contains_ci, select_page};
