//! Course domain models, DTOs, and the course-code rules.
//!
//! Course codes carry structure: 3-4 letters, a space, then three digits
//! whose value encodes the level and semester the course belongs to. The
//! rules here are the only nontrivial validation in the console and are
//! enforced before any create/update request leaves the client:
//!
//! - **Format**: `^[A-Za-z]{3,4}\s\d{3}$` (e.g. `CSC 101`).
//! - **Numbering band**: for a known (level, semester) pair the numeric
//!   suffix must fall within `[base + 1, base + 9]`, a ten-slot band per
//!   level and semester. Unknown pairs skip the band check; levels outside
//!   the NCE ladder are deliberately unconstrained.
//! - **Uniqueness**: codes are compared case-insensitively after trimming,
//!   excluding the record currently being edited.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::departments::DepartmentRef;
use crate::ids::{CourseId, DepartmentId};

static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3,4}\s\d{3}$").expect("course code pattern"));

/// Levels whose numbering bands are known, in display order.
const NCE_LEVELS: [&str; 3] = ["NCE I", "NCE II", "NCE III"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    First,
    Second,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => write!(f, "FIRST"),
            Semester::Second => write!(f, "SECOND"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FIRST" => Ok(Semester::First),
            "SECOND" => Ok(Semester::Second),
            other => Err(format!("unknown semester '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseStatus {
    Core,
    Elective,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Core => write!(f, "CORE"),
            CourseStatus::Elective => write!(f, "ELECTIVE"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CORE" => Ok(CourseStatus::Core),
            "ELECTIVE" => Ok(CourseStatus::Elective),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Slim reference used for prerequisite listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub id: CourseId,
    pub course_code: String,
    #[serde(default)]
    pub course_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub course_code: String,
    pub course_title: String,
    pub credit_unit: u32,
    pub status: CourseStatus,
    pub semester: Semester,
    #[serde(default)]
    pub level: String,
    #[serde(default, deserialize_with = "registra_core::serde::empty_string_as_none")]
    pub course_category: Option<String>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    #[serde(default, deserialize_with = "registra_core::serde::null_to_default")]
    pub prerequisites: Vec<CourseRef>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(custom(function = "validate_course_code_format"))]
    pub course_code: String,
    #[validate(length(min = 1, message = "Course title is required"))]
    pub course_title: String,
    #[validate(range(min = 1, message = "Credit unit must be positive"))]
    pub credit_unit: u32,
    pub status: CourseStatus,
    pub semester: Semester,
    pub level: String,
    pub course_category: Option<String>,
    pub department_id: DepartmentId,
    pub prerequisite_ids: Vec<CourseId>,
}

impl CreateCourseDto {
    pub fn normalized(&self) -> Self {
        Self {
            course_code: self.course_code.trim().to_string(),
            course_title: self.course_title.trim().to_string(),
            ..self.clone()
        }
    }
}

fn code_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("course_code");
    error.message = Some(message.into());
    error
}

/// Structural check behind the `CreateCourseDto` derive.
pub fn validate_course_code_format(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(code_error("Course code is required"));
    }
    if !COURSE_CODE_RE.is_match(code) {
        return Err(code_error(
            "Course code must look like ABC 111 (3-4 letters + space + 3 digits)",
        ));
    }
    Ok(())
}

/// The three-digit base for a known (level, semester) pair.
///
/// `NCE I` first semester courses are numbered 111-119, second semester
/// 121-129, and so on up the ladder. Levels outside the table return `None`
/// and are not band-checked.
pub fn numbering_base(level: &str, semester: Semester) -> Option<u32> {
    let tier = NCE_LEVELS.iter().position(|l| *l == level)? as u32 + 1;
    let base = match semester {
        Semester::First => tier * 100 + 10,
        Semester::Second => tier * 100 + 20,
    };
    Some(base)
}

/// Band check for a structurally valid code against its level and semester.
pub fn validate_code_band(
    code: &str,
    level: &str,
    semester: Semester,
) -> Result<(), ValidationError> {
    let Some(base) = numbering_base(level, semester) else {
        // Unknown level/semester combinations skip the band check.
        return Ok(());
    };

    let number: u32 = match code.split_whitespace().nth(1).and_then(|n| n.parse().ok()) {
        Some(n) => n,
        None => return Ok(()),
    };

    if number < base + 1 || number > base + 9 {
        let mut error = ValidationError::new("course_code");
        error.message = Some(
            format!(
                "Invalid code: for {} {} semester, code must be between {} and {}",
                level,
                semester,
                base + 1,
                base + 9
            )
            .into(),
        );
        return Err(error);
    }

    Ok(())
}

/// Finds a course whose code collides with `code`, ignoring case and
/// surrounding whitespace. `exclude` removes the record being edited from
/// the comparison so resubmitting an unchanged code is accepted.
pub fn find_duplicate_code<'a>(
    courses: &'a [Course],
    code: &str,
    exclude: Option<CourseId>,
) -> Option<&'a Course> {
    let needle = code.trim().to_lowercase();
    courses.iter().find(|c| {
        c.course_code.trim().to_lowercase() == needle && Some(c.id) != exclude
    })
}

/// Distinct course codes, sorted, for the code filter dropdown.
pub fn distinct_codes(courses: &[Course]) -> Vec<String> {
    let mut codes: Vec<String> = courses
        .iter()
        .map(|c| c.course_code.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    codes.sort();
    codes
}

/// Distinct levels with the NCE ladder first, anything else sorted after.
pub fn distinct_levels(courses: &[Course]) -> Vec<String> {
    let seen: std::collections::BTreeSet<&str> = courses
        .iter()
        .filter(|c| !c.level.is_empty())
        .map(|c| c.level.as_str())
        .collect();

    let mut levels: Vec<String> = NCE_LEVELS
        .iter()
        .filter(|l| seen.contains(*l))
        .map(|l| l.to_string())
        .collect();

    let mut rest: Vec<String> = seen
        .iter()
        .filter(|l| !NCE_LEVELS.contains(*l))
        .map(|l| l.to_string())
        .collect();
    rest.sort();
    levels.extend(rest);
    levels
}

/// Candidate prerequisites: courses of the selected department matching the
/// search term on code or title. The course being edited is excluded so a
/// course can never list itself.
pub fn prerequisite_options<'a>(
    courses: &'a [Course],
    department: DepartmentId,
    search: &str,
    exclude: Option<CourseId>,
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| c.department.as_ref().map(|d| d.id) == Some(department))
        .filter(|c| Some(c.id) != exclude)
        .filter(|c| {
            registra_core::contains_ci(&c.course_code, search)
                || registra_core::contains_ci(&c.course_title, search)
        })
        .collect()
}
