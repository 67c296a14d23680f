use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::faculties::{CreateFacultyDto, Faculty};
use registra_models::ids::FacultyId;

use crate::gateway::ApiClient;
use crate::screen::Resource;

/// Search on name/code plus an exact (case-insensitive) code filter.
#[derive(Debug, Clone, Default)]
pub struct FacultyFilter {
    pub q: String,
    pub code: Option<String>,
}

impl Resource for Faculty {
    type Draft = CreateFacultyDto;
    type Filter = FacultyFilter;

    const NAME: &'static str = "faculty";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &FacultyFilter, row: &Faculty) -> bool {
        let q_ok = filter.q.is_empty()
            || contains_ci(&row.faculty_name, &filter.q)
            || contains_ci(&row.faculty_code, &filter.q);
        let code_ok = filter
            .code
            .as_ref()
            .map(|code| row.faculty_code.eq_ignore_ascii_case(code))
            .unwrap_or(true);
        q_ok && code_ok
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Faculty>, AppError> {
        api.list_faculties().await
    }

    async fn create(api: &ApiClient, draft: &CreateFacultyDto) -> Result<(), AppError> {
        api.create_faculty(&draft.normalized()).await
    }

    async fn update(api: &ApiClient, id: i64, draft: &CreateFacultyDto) -> Result<(), AppError> {
        api.update_faculty(FacultyId::new(id), &draft.normalized())
            .await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError> {
        api.delete_faculty(FacultyId::new(id)).await
    }
}

/// Distinct faculty codes, sorted, for the code filter dropdown.
pub fn faculty_codes(faculties: &[Faculty]) -> Vec<String> {
    let mut codes: Vec<String> = faculties
        .iter()
        .map(|f| f.faculty_code.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    codes.sort();
    codes
}
