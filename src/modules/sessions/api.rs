use registra_core::errors::AppError;
use registra_models::ids::SessionId;
use registra_models::sessions::{AcademicSession, CreateSessionDto};

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_sessions(&self) -> Result<Vec<AcademicSession>, AppError> {
        self.get_list("/api/sessions/all").await
    }

    pub async fn create_session(&self, dto: &CreateSessionDto) -> Result<(), AppError> {
        self.post_unit("/api/sessions/create", dto).await
    }

    pub async fn update_session(
        &self,
        id: SessionId,
        dto: &CreateSessionDto,
    ) -> Result<(), AppError> {
        self.put_unit(&format!("/api/sessions/{id}"), dto).await
    }

    pub async fn delete_session(&self, id: SessionId) -> Result<(), AppError> {
        self.delete_unit(&format!("/api/sessions/{id}")).await
    }
}
