//! Program domain models and DTOs.

use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::departments::DepartmentRef;
use crate::ids::{DepartmentId, ProgramId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    pub program_name: String,
    pub duration_years: u32,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramDto {
    #[validate(length(min = 1, message = "Program name is required"))]
    pub program_name: String,
    #[validate(range(min = 1, message = "Duration must be at least one year"))]
    pub duration_years: u32,
    // The backend expects the owning department as a nested `{ "id": n }`.
    #[serde(rename = "department", serialize_with = "as_department_key")]
    pub department_id: DepartmentId,
}

fn as_department_key<S>(id: &DepartmentId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("DepartmentKey", 1)?;
    state.serialize_field("id", id)?;
    state.end()
}
