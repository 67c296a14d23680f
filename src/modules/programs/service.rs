use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::ids::{DepartmentId, ProgramId};
use registra_models::programs::{CreateProgramDto, Program};

use crate::gateway::ApiClient;
use crate::screen::Resource;

#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    pub q: String,
    pub department_id: Option<DepartmentId>,
}

impl Resource for Program {
    type Draft = CreateProgramDto;
    type Filter = ProgramFilter;

    const NAME: &'static str = "program";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &ProgramFilter, row: &Program) -> bool {
        let q_ok = filter.q.is_empty() || contains_ci(&row.program_name, &filter.q);
        let dept_ok = filter
            .department_id
            .map(|wanted| row.department.as_ref().map(|d| d.id) == Some(wanted))
            .unwrap_or(true);
        q_ok && dept_ok
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Program>, AppError> {
        api.list_programs().await
    }

    async fn create(api: &ApiClient, draft: &CreateProgramDto) -> Result<(), AppError> {
        api.create_program(draft).await
    }

    async fn update(api: &ApiClient, id: i64, draft: &CreateProgramDto) -> Result<(), AppError> {
        api.update_program(ProgramId::new(id), draft).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError> {
        api.delete_program(ProgramId::new(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registra_models::departments::DepartmentRef;

    fn program(id: i64, name: &str, dept: Option<i64>) -> Program {
        Program {
            id: ProgramId::new(id),
            program_name: name.to_string(),
            duration_years: 3,
            department: dept.map(|d| DepartmentRef {
                id: DepartmentId::new(d),
                dept_name: format!("Dept {}", d),
            }),
        }
    }

    #[test]
    fn test_department_filter_exact() {
        let row = program(1, "Computer Science Education", Some(4));
        let filter = ProgramFilter {
            q: String::new(),
            department_id: Some(DepartmentId::new(4)),
        };
        assert!(Program::filter_matches(&filter, &row));

        let filter = ProgramFilter {
            q: String::new(),
            department_id: Some(DepartmentId::new(5)),
        };
        assert!(!Program::filter_matches(&filter, &row));
    }

    #[test]
    fn test_program_without_department_fails_department_filter() {
        let row = program(1, "General Studies", None);
        let filter = ProgramFilter {
            q: String::new(),
            department_id: Some(DepartmentId::new(4)),
        };
        assert!(!Program::filter_matches(&filter, &row));
        assert!(Program::filter_matches(&ProgramFilter::default(), &row));
    }

    #[test]
    fn test_search_matches_name() {
        let row = program(1, "Computer Science Education", Some(4));
        let filter = ProgramFilter {
            q: "science".to_string(),
            department_id: None,
        };
        assert!(Program::filter_matches(&filter, &row));
    }
}
