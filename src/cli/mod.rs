//! Command-line surface of the console.
//!
//! Every management screen of the admin UI maps to a subcommand family:
//! `list` (filter + paginate), `create`/`update`/`delete` (the modal form),
//! `import` (bulk upload with a reconciliation report) and `export`
//! (CSV/XLSX of the filtered rows).

pub mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use registra_models::courses::{CourseStatus, Semester};
use registra_models::ids::{DepartmentId, SessionId};

#[derive(Parser)]
#[command(name = "registra")]
#[command(about = "Registra - admin console for the tertiary-education registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with an ADMIN or SUPERADMIN account
    Login {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a new account
    Signup {
        #[arg(short = 'u', long)]
        username: String,

        #[arg(short = 'e', long)]
        email: String,

        /// Password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user and roles
    Whoami,
    /// Manage faculties
    Faculties {
        #[command(subcommand)]
        command: FacultyCommands,
    },
    /// Manage departments
    Departments {
        #[command(subcommand)]
        command: DepartmentCommands,
    },
    /// Manage programs
    Programs {
        #[command(subcommand)]
        command: ProgramCommands,
    },
    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Manage academic sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Manage credit-hour rules
    CreditHours {
        #[command(subcommand)]
        command: CreditHourCommands,
    },
}

#[derive(clap::Args)]
pub struct PageArgs {
    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page (1-100)
    #[arg(long, default_value = "10")]
    pub page_size: usize,
}

#[derive(Subcommand)]
pub enum FacultyCommands {
    /// List faculties
    List {
        /// Search on name or code
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Exact faculty code
        #[arg(long)]
        code: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a faculty
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        code: String,

        #[arg(long)]
        institution: String,
    },
    /// Update a faculty
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        institution: Option<String>,
    },
    /// Delete a faculty
    Delete { id: i64 },
    /// Bulk-import faculties from a CSV/XLSX file
    Import { file: PathBuf },
    /// Export the filtered faculties to CSV or XLSX (by extension)
    Export {
        file: PathBuf,

        #[arg(short = 's', long)]
        search: Option<String>,

        #[arg(long)]
        code: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// List departments
    List {
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Exact department code
        #[arg(long)]
        code: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a department
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        code: String,
    },
    /// Update a department
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        code: Option<String>,
    },
    /// Delete a department
    Delete { id: i64 },
    /// Bulk-import departments from a CSV/XLSX file
    Import { file: PathBuf },
    /// Export the filtered departments to CSV or XLSX (by extension)
    Export {
        file: PathBuf,

        #[arg(short = 's', long)]
        search: Option<String>,

        #[arg(long)]
        code: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List programs
    List {
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Owning department id
        #[arg(long)]
        department: Option<DepartmentId>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a program
    Create {
        #[arg(long)]
        name: String,

        /// Duration in years
        #[arg(long, default_value = "3")]
        duration: u32,

        #[arg(long)]
        department: DepartmentId,
    },
    /// Update a program
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        duration: Option<u32>,

        #[arg(long)]
        department: Option<DepartmentId>,
    },
    /// Delete a program
    Delete { id: i64 },
    /// Bulk-import programs from a CSV/XLSX file
    Import { file: PathBuf },
    /// Export the filtered programs to CSV or XLSX (by extension)
    Export {
        file: PathBuf,

        #[arg(short = 's', long)]
        search: Option<String>,

        #[arg(long)]
        department: Option<DepartmentId>,
    },
}

#[derive(clap::Args)]
pub struct CourseFilterArgs {
    /// Search on title or code
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Owning department id
    #[arg(long)]
    pub department: Option<DepartmentId>,

    /// Exact course code
    #[arg(long)]
    pub code: Option<String>,

    /// Exact level label, e.g. "NCE I"
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// List courses
    List {
        #[command(flatten)]
        filter: CourseFilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a course
    Create {
        /// Course code, e.g. "CSC 111"
        #[arg(long)]
        code: String,

        #[arg(long)]
        title: String,

        /// Credit units
        #[arg(long, default_value = "2")]
        unit: u32,

        /// CORE or ELECTIVE
        #[arg(long, default_value = "CORE")]
        status: CourseStatus,

        /// FIRST or SECOND
        #[arg(long, default_value = "FIRST")]
        semester: Semester,

        /// Level label, e.g. "NCE I"
        #[arg(long, default_value = "")]
        level: String,

        /// Category (defaults to the department name)
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        department: DepartmentId,

        /// Prerequisite course ids (repeatable)
        #[arg(long = "prereq")]
        prerequisites: Vec<i64>,
    },
    /// Update a course
    Update {
        id: i64,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        unit: Option<u32>,

        #[arg(long)]
        status: Option<CourseStatus>,

        #[arg(long)]
        semester: Option<Semester>,

        #[arg(long)]
        level: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        department: Option<DepartmentId>,

        /// Replacement prerequisite course ids (repeatable)
        #[arg(long = "prereq")]
        prerequisites: Option<Vec<i64>>,
    },
    /// Delete a course
    Delete { id: i64 },
    /// Show filter dropdown values and prerequisite candidates
    Options {
        /// Department to scope prerequisite candidates to
        #[arg(long)]
        department: Option<DepartmentId>,

        /// Search term for prerequisite candidates
        #[arg(short = 's', long, default_value = "")]
        search: String,
    },
    /// Bulk-import courses from a CSV/XLSX file
    Import { file: PathBuf },
    /// Export the filtered courses to CSV or XLSX (by extension)
    Export {
        file: PathBuf,

        #[command(flatten)]
        filter: CourseFilterArgs,
    },
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// List academic sessions
    List {
        #[arg(short = 's', long)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create an academic session
    Create {
        /// Intake label, e.g. "2025/2026"
        #[arg(long)]
        label: String,

        #[arg(long)]
        year: i32,

        /// Mark this session as the current one
        #[arg(long)]
        current: bool,
    },
    /// Update an academic session
    Update {
        id: i64,

        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        current: Option<bool>,
    },
    /// Delete an academic session
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CreditHourCommands {
    /// List credit-hour rules
    List {
        #[arg(short = 's', long)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a credit-hour rule
    Create {
        #[arg(long)]
        session: SessionId,

        /// FIRST or SECOND
        #[arg(long, default_value = "FIRST")]
        semester: Semester,

        #[arg(long)]
        min: u32,

        #[arg(long)]
        max: u32,
    },
}
