use registra_core::errors::AppError;
use registra_models::credit_hours::{CreateCreditHourRuleDto, CreditHourRule};

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_credit_hours(&self) -> Result<Vec<CreditHourRule>, AppError> {
        self.get_list("/api/credit-hours/all").await
    }

    pub async fn create_credit_hours(&self, dto: &CreateCreditHourRuleDto) -> Result<(), AppError> {
        self.post_unit("/api/credit-hours/create", dto).await
    }
}
