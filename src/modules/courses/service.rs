//! Course screen wiring: filters plus the pre-submit rules that make
//! courses the one nontrivial form in the console.
//!
//! Beyond the structural checks on the DTO itself, submitting a course
//! runs against the cached collection: the numbering-band rule for the
//! chosen level and semester, duplicate-code detection (excluding the
//! course being edited), and a self-prerequisite guard.

use anyhow::anyhow;

use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::courses::{
    Course, CreateCourseDto, find_duplicate_code, validate_code_band,
};
use registra_models::departments::Department;
use registra_models::ids::{CourseId, DepartmentId};

use crate::gateway::ApiClient;
use crate::screen::Resource;

/// The four predicates of the course table: free-text search on title and
/// code, then exact department, code, and level.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub q: String,
    pub department_id: Option<DepartmentId>,
    pub course_code: Option<String>,
    pub level: Option<String>,
}

impl Resource for Course {
    type Draft = CreateCourseDto;
    type Filter = CourseFilter;

    const NAME: &'static str = "course";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &CourseFilter, row: &Course) -> bool {
        let q_ok = filter.q.is_empty()
            || contains_ci(&row.course_title, &filter.q)
            || contains_ci(&row.course_code, &filter.q);
        let dept_ok = filter
            .department_id
            .map(|wanted| row.department.as_ref().map(|d| d.id) == Some(wanted))
            .unwrap_or(true);
        let code_ok = filter
            .course_code
            .as_ref()
            .map(|code| &row.course_code == code)
            .unwrap_or(true);
        let level_ok = filter
            .level
            .as_ref()
            .map(|level| &row.level == level)
            .unwrap_or(true);
        q_ok && dept_ok && code_ok && level_ok
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Course>, AppError> {
        api.list_courses().await
    }

    async fn create(api: &ApiClient, draft: &CreateCourseDto) -> Result<(), AppError> {
        api.create_course(&draft.normalized()).await
    }

    async fn update(api: &ApiClient, id: i64, draft: &CreateCourseDto) -> Result<(), AppError> {
        api.update_course(CourseId::new(id), &draft.normalized())
            .await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError> {
        api.delete_course(CourseId::new(id)).await
    }

    fn precheck(
        draft: &CreateCourseDto,
        rows: &[Course],
        editing: Option<i64>,
    ) -> Result<(), AppError> {
        validate_code_band(&draft.course_code, &draft.level, draft.semester)
            .map_err(|e| AppError::validation(anyhow!("{}", e.message.unwrap_or_default())))?;

        let editing_id = editing.map(CourseId::new);
        if find_duplicate_code(rows, &draft.course_code, editing_id).is_some() {
            return Err(AppError::validation(anyhow!(
                "A course with this code already exists."
            )));
        }

        if let Some(id) = editing_id
            && draft.prerequisite_ids.contains(&id)
        {
            return Err(AppError::validation(anyhow!(
                "A course cannot be its own prerequisite"
            )));
        }

        Ok(())
    }
}

/// Defaults the category to the owning department's name when the user has
/// not set one explicitly.
pub fn autofill_category(draft: &mut CreateCourseDto, departments: &[Department]) {
    if draft.course_category.as_deref().is_none_or(str::is_empty) {
        draft.course_category = departments
            .iter()
            .find(|d| d.id == draft.department_id)
            .map(|d| d.dept_name.clone());
    }
}
