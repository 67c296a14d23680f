//! # Registra Console
//!
//! An admin console for a tertiary-education registry backend: role-gated
//! login, CRUD over faculties, departments, programs, courses, academic
//! sessions and credit-hour rules, bulk CSV/XLSX import with a per-row
//! reconciliation report, and CSV/XLSX export.
//!
//! ## Overview
//!
//! The backend owns all persistence; the console fetches whole collections
//! and derives every visible table client-side. The interesting parts:
//!
//! - **Session**: one durable store gates every command (token + profile
//!   with a role list; only ADMIN/SUPERADMIN may log in)
//! - **Gateway**: one function per (resource, operation); bearer auth,
//!   verbatim backend errors, no retries, no 401 auto-handling
//! - **Screens**: a single generic list controller (filter, safe-page
//!   pagination, create/edit/delete, re-fetch after every mutation)
//!   instantiated once per resource
//! - **Imports**: bulk file upload returning a reconciliation report with
//!   per-row diagnostics
//!
//! ## Architecture
//!
//! The codebase is a workspace of focused crates plus this binary crate:
//!
//! ```text
//! crates/
//! ├── registra-core/     # errors, list engine, serde helpers, export
//! ├── registra-config/   # environment-driven configuration
//! ├── registra-models/   # domain models, DTOs, course-code rules
//! └── registra-session/  # durable session store
//! src/
//! ├── cli/               # clap commands and table rendering
//! ├── modules/           # one module per backend resource
//! │   ├── auth/          # login, signup, logout, role gate
//! │   ├── faculties/
//! │   ├── departments/
//! │   ├── programs/
//! │   ├── courses/       # course-code band + duplicate rules
//! │   ├── sessions/
//! │   └── credit_hours/
//! ├── gateway.rs         # HTTP plumbing shared by every module
//! ├── screen.rs          # generic list controller
//! ├── upload.rs          # bulk-import reconciler
//! ├── validation.rs      # validator-crate error formatting
//! └── logging.rs         # tracing initialisation
//! ```
//!
//! Each resource module follows a consistent structure:
//!
//! - `mod.rs`: module exports
//! - `api.rs`: the gateway surface for that resource
//! - `service.rs`: screen wiring, filters, pre-submit rules
//!
//! ## Error taxonomy
//!
//! | Kind | Origin | Recovery |
//! |------|--------|----------|
//! | Validation | client, pre-submit | fix input and resubmit; no request made |
//! | Backend(status) | non-2xx response | message shown verbatim |
//! | Transport | request never completed | try again |
//! | Timeout | per-request ceiling hit | try again |
//!
//! HTTP 401 is deliberately not auto-handled (no forced logout), so a
//! mid-session token expiry surfaces as an error instead of a redirect loop.
//!
//! ## Quick start
//!
//! ```bash
//! API_BASE_URL=http://localhost:8080 registra login --username admin
//! registra courses list --search physics --page 2
//! registra courses import curriculum.csv
//! registra courses export courses.xlsx
//! ```

pub mod cli;
pub mod gateway;
pub mod logging;
pub mod modules;
pub mod screen;
pub mod upload;
pub mod validation;

// Re-export workspace crates for convenience
pub use registra_config;
pub use registra_core;
pub use registra_models;
pub use registra_session;
