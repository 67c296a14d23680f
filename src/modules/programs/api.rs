use registra_core::errors::AppError;
use registra_models::ids::ProgramId;
use registra_models::programs::{CreateProgramDto, Program};

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_programs(&self) -> Result<Vec<Program>, AppError> {
        self.get_list("/api/programs/all").await
    }

    pub async fn create_program(&self, dto: &CreateProgramDto) -> Result<(), AppError> {
        self.post_unit("/api/programs/create", dto).await
    }

    pub async fn update_program(
        &self,
        id: ProgramId,
        dto: &CreateProgramDto,
    ) -> Result<(), AppError> {
        self.put_unit(&format!("/api/programs/update/{id}"), dto)
            .await
    }

    pub async fn delete_program(&self, id: ProgramId) -> Result<(), AppError> {
        self.delete_unit(&format!("/api/programs/delete/{id}"))
            .await
    }
}
