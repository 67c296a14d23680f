//! Faculty domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::FacultyId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: FacultyId,
    pub faculty_name: String,
    pub faculty_code: String,
    pub institution: String,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacultyDto {
    #[validate(length(min = 1, message = "Faculty name is required"))]
    pub faculty_name: String,
    #[validate(length(min = 1, message = "Faculty code is required"))]
    pub faculty_code: String,
    #[validate(length(min = 1, message = "Institution is required"))]
    pub institution: String,
}

impl CreateFacultyDto {
    pub fn normalized(&self) -> Self {
        Self {
            faculty_name: self.faculty_name.trim().to_string(),
            faculty_code: self.faculty_code.trim().to_uppercase(),
            institution: self.institution.trim().to_string(),
        }
    }
}
