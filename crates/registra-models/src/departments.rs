//! Department domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::DepartmentId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub dept_name: String,
    pub dept_code: String,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

/// Slim reference embedded in records that point at a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    pub id: DepartmentId,
    #[serde(default)]
    pub dept_name: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, message = "Department name is required"))]
    pub dept_name: String,
    #[validate(length(min = 1, message = "Department code is required"))]
    pub dept_code: String,
}

impl CreateDepartmentDto {
    /// Trims both fields and uppercases the code, the canonical form the
    /// backend expects.
    pub fn normalized(&self) -> Self {
        Self {
            dept_name: self.dept_name.trim().to_string(),
            dept_code: self.dept_code.trim().to_uppercase(),
        }
    }
}
