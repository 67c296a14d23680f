use registra_core::errors::AppError;
use registra_models::faculties::{CreateFacultyDto, Faculty};
use registra_models::ids::FacultyId;

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_faculties(&self) -> Result<Vec<Faculty>, AppError> {
        self.get_list("/api/faculties").await
    }

    pub async fn create_faculty(&self, dto: &CreateFacultyDto) -> Result<(), AppError> {
        self.post_unit("/api/faculties/create", dto).await
    }

    pub async fn update_faculty(
        &self,
        id: FacultyId,
        dto: &CreateFacultyDto,
    ) -> Result<(), AppError> {
        self.put_unit(&format!("/api/faculties/{id}"), dto).await
    }

    pub async fn delete_faculty(&self, id: FacultyId) -> Result<(), AppError> {
        self.delete_unit(&format!("/api/faculties/{id}")).await
    }
}
