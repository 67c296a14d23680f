//! Academic session (intake cycle) models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::SessionId;

/// An enrollment cycle such as `2025/2026`.
///
/// At most one session should carry `is_current`; that invariant is owned
/// and enforced by the backend, the console only displays and submits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSession {
    pub id: SessionId,
    pub intake_session: String,
    pub intake_year: i32,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    #[validate(length(min = 1, message = "Intake label is required"))]
    pub intake_session: String,
    #[validate(range(min = 1900, message = "Intake year is required"))]
    pub intake_year: i32,
    pub is_current: bool,
}

impl CreateSessionDto {
    pub fn normalized(&self) -> Self {
        Self {
            intake_session: self.intake_session.trim().to_string(),
            ..self.clone()
        }
    }
}
