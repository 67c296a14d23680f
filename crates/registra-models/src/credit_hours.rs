//! Credit-hour rule models and DTOs.
//!
//! A rule bounds the registrable credit units for one session and semester.
//! `min <= max` is expected but owned by the backend; the console does not
//! cross-validate the pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::courses::Semester;
use crate::ids::{RuleId, SessionId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditHourRule {
    pub id: RuleId,
    #[serde(default)]
    pub session_name: Option<String>,
    pub semester: Semester,
    pub min_hours: u32,
    pub max_hours: u32,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditHourRuleDto {
    pub session_id: SessionId,
    pub semester: Semester,
    #[validate(range(min = 1, message = "Minimum hours is required"))]
    pub min_hours: u32,
    #[validate(range(min = 1, message = "Maximum hours is required"))]
    pub max_hours: u32,
}
