use registra_core::errors::AppError;
use registra_core::listing::contains_ci;
use registra_models::ids::SessionId;
use registra_models::sessions::{AcademicSession, CreateSessionDto};

use crate::gateway::ApiClient;
use crate::screen::Resource;

#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub q: String,
}

impl Resource for AcademicSession {
    type Draft = CreateSessionDto;
    type Filter = SessionFilter;

    const NAME: &'static str = "session";

    fn id(&self) -> i64 {
        self.id.into_inner()
    }

    fn filter_matches(filter: &SessionFilter, row: &AcademicSession) -> bool {
        filter.q.is_empty()
            || contains_ci(&row.intake_session, &filter.q)
            || row.intake_year.to_string().contains(&filter.q)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<AcademicSession>, AppError> {
        api.list_sessions().await
    }

    async fn create(api: &ApiClient, draft: &CreateSessionDto) -> Result<(), AppError> {
        api.create_session(&draft.normalized()).await
    }

    async fn update(api: &ApiClient, id: i64, draft: &CreateSessionDto) -> Result<(), AppError> {
        api.update_session(SessionId::new(id), &draft.normalized())
            .await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError> {
        api.delete_session(SessionId::new(id)).await
    }
}
