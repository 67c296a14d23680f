//! # Registra Models
//!
//! Domain models and DTOs for the Registra console.
//!
//! This crate provides all data structures exchanged with the backend,
//! plus the validation rules that run before anything is submitted.
//!
//! # Modules
//!
//! - [`auth`]: Roles, the persisted user profile, login/signup wire types
//! - [`courses`]: Courses, prerequisites, and the course-code rules
//! - [`credit_hours`]: Per-session, per-semester credit bounds
//! - [`departments`]: Departments and the references embedded elsewhere
//! - [`faculties`]: Faculties
//! - [`ids`]: Strongly-typed numeric id newtypes
//! - [`programs`]: Programs
//! - [`sessions`]: Academic sessions (intake cycles)
//! - [`uploads`]: Bulk-import reconciliation reports
//!
//! # Example
//!
//! ```ignore
//! use registra_models::courses::{validate_course_code_format, find_duplicate_code};
//!
//! validate_course_code_format("CSC 101")?;
//! if find_duplicate_code(&courses, "CSC 101", None).is_some() {
//!     println!("a course with this code already exists");
//! }
//! ```

pub mod auth;
pub mod courses;
pub mod credit_hours;
pub mod departments;
pub mod faculties;
pub mod ids;
pub mod programs;
pub mod sessions;
pub mod uploads;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthResponse, AuthUser, LoginRequest, Role, SignupRequest};

pub use courses::{
    Course, CourseRef, CourseStatus, CreateCourseDto, Semester, distinct_codes, distinct_levels,
    find_duplicate_code, numbering_base, prerequisite_options, validate_code_band,
    validate_course_code_format,
};

pub use credit_hours::{CreateCreditHourRuleDto, CreditHourRule};

pub use departments::{CreateDepartmentDto, Department, DepartmentRef};

pub use faculties::{CreateFacultyDto, Faculty};

pub use ids::{CourseId, DepartmentId, FacultyId, ProgramId, RuleId, SessionId};

pub use programs::{CreateProgramDto, Program};

pub use sessions::{AcademicSession, CreateSessionDto};

pub use uploads::{RowIssue, UploadReport};
