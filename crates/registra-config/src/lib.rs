//! # Registra Config
//!
//! Configuration types for the Registra console.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: Backend endpoint and request timeout
//! - [`storage`]: Durable session storage location
//!
//! # Example
//!
//! ```ignore
//! use registra_config::{ApiConfig, StorageConfig};
//!
//! // Load all configs from environment
//! let api_config = ApiConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod api;
pub mod storage;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use storage::StorageConfig;
