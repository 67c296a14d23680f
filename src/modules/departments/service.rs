use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::departments::{CreateDepartmentDto, Department};
use registra_models::ids::DepartmentId;

use crate::gateway::ApiClient;
use crate::screen::Resource;

#[derive(Debug, Clone, Default)]
pub struct DepartmentFilter {
    pub q: String,
    pub code: Option<String>,
}

impl Resource for Department {
    type Draft = CreateDepartmentDto;
    type Filter = DepartmentFilter;

    const NAME: &'static str = "department";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &DepartmentFilter, row: &Department) -> bool {
        let q_ok = filter.q.is_empty()
            || contains_ci(&row.dept_name, &filter.q)
            || contains_ci(&row.dept_code, &filter.q);
        let code_ok = filter
            .code
            .as_ref()
            .map(|code| row.dept_code.eq_ignore_ascii_case(code))
            .unwrap_or(true);
        q_ok && code_ok
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Department>, AppError> {
        api.list_departments().await
    }

    async fn create(api: &ApiClient, draft: &CreateDepartmentDto) -> Result<(), AppError> {
        api.create_department(&draft.normalized()).await
    }

    async fn update(api: &ApiClient, id: i64, draft: &CreateDepartmentDto) -> Result<(), AppError> {
        api.update_department(DepartmentId::new(id), &draft.normalized())
            .await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError> {
        api.delete_department(DepartmentId::new(id)).await
    }
}

/// Distinct department codes, sorted, for the code filter dropdown.
pub fn department_codes(departments: &[Department]) -> Vec<String> {
    let mut codes: Vec<String> = departments
        .iter()
        .map(|d| d.dept_code.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    codes.sort();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(id: i64, name: &str, code: &str) -> Department {
        Department {
            id: DepartmentId::new(id),
            dept_name: name.to_string(),
            dept_code: code.to_string(),
            created_date: None,
        }
    }

    #[test]
    fn test_filter_combines_search_and_code() {
        let row = department(1, "Computer Science", "CSC");
        let filter = DepartmentFilter {
            q: "computer".to_string(),
            code: Some("csc".to_string()),
        };
        assert!(Department::filter_matches(&filter, &row));

        let filter = DepartmentFilter {
            q: "computer".to_string(),
            code: Some("PHY".to_string()),
        };
        assert!(!Department::filter_matches(&filter, &row));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let row = department(1, "Computer Science", "CSC");
        assert!(Department::filter_matches(&DepartmentFilter::default(), &row));
    }

    #[test]
    fn test_department_codes_sorted_unique() {
        let rows = vec![
            department(1, "Computer Science", "CSC"),
            department(2, "Physics", "PHY"),
            department(3, "Other CS", "CSC"),
        ];
        assert_eq!(department_codes(&rows), vec!["CSC", "PHY"]);
    }
}
