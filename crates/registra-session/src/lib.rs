//! # Registra Session
//!
//! Durable login session store for the Registra console.
//!
//! One [`SessionStore`] is the single source of truth for "is someone
//! logged in, and with which roles". It owns two fixed files under the
//! configured storage directory (the bearer token and the user profile
//! JSON), restores them once at startup, and exposes a narrow read/query
//! interface plus exactly two mutation entry points: [`SessionStore::login`]
//! and [`SessionStore::logout`].
//!
//! # Example
//!
//! ```ignore
//! use registra_config::StorageConfig;
//! use registra_models::Role;
//! use registra_session::SessionStore;
//!
//! let store = SessionStore::open(StorageConfig::from_env());
//! if !store.is_authenticated() {
//!     println!("please log in first");
//! }
//! if store.has_role(Role::Superadmin) {
//!     println!("full access");
//! }
//! ```

pub mod store;

pub use store::SessionStore;
