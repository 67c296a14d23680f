//! Credit-hour rule screen wiring.
//!
//! Rules are append-only from the console: the screen lists and creates,
//! but editing or deleting a rule is refused client-side. Superseding a
//! bound means creating a new rule for the session and semester.

use anyhow::anyhow;

use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::credit_hours::{CreateCreditHourRuleDto, CreditHourRule};

use crate::gateway::ApiClient;
use crate::screen::Resource;

#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    pub q: String,
}

impl Resource for CreditHourRule {
    type Draft = CreateCreditHourRuleDto;
    type Filter = RuleFilter;

    const NAME: &'static str = "credit-hour rule";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &RuleFilter, row: &CreditHourRule) -> bool {
        filter.q.is_empty()
            || row
                .session_name
                .as_deref()
                .map(|name| contains_ci(name, &filter.q))
                .unwrap_or(false)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<CreditHourRule>, AppError> {
        api.list_credit_hours().await
    }

    async fn create(api: &ApiClient, draft: &CreateCreditHourRuleDto) -> Result<(), AppError> {
        api.create_credit_hours(draft).await
    }

    async fn update(
        _api: &ApiClient,
        _id: i64,
        _draft: &CreateCreditHourRuleDto,
    ) -> Result<(), AppError> {
        Err(AppError::validation(anyhow!(
            "Credit-hour rules cannot be edited; create a new rule instead"
        )))
    }

    async fn delete(_api: &ApiClient, _id: i64) -> Result<(), AppError> {
        Err(AppError::validation(anyhow!(
            "Credit-hour rules cannot be deleted from the console"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registra_models::courses::Semester;
    use registra_models::ids::RuleId;

    #[test]
    fn test_filter_matches_session_name() {
        let rule = CreditHourRule {
            id: RuleId::new(1),
            session_name: Some("2025/2026".to_string()),
            semester: Semester::First,
            min_hours: 12,
            max_hours: 24,
            created_date: None,
        };

        let hit = RuleFilter {
            q: "2025".to_string(),
        };
        assert!(CreditHourRule::filter_matches(&hit, &rule));

        let miss = RuleFilter {
            q: "2019".to_string(),
        };
        assert!(!CreditHourRule::filter_matches(&miss, &rule));
    }

    #[test]
    fn test_unnamed_session_only_matches_empty_query() {
        let rule = CreditHourRule {
            id: RuleId::new(1),
            session_name: None,
            semester: Semester::Second,
            min_hours: 10,
            max_hours: 20,
            created_date: None,
        };
        assert!(CreditHourRule::filter_matches(&RuleFilter::default(), &rule));
        let filter = RuleFilter {
            q: "2025".to_string(),
        };
        assert!(!CreditHourRule::filter_matches(&filter, &rule));
    }
}
