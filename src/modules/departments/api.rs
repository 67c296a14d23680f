use registra_core::errors::AppError;
use registra_models::departments::{CreateDepartmentDto, Department};
use registra_models::ids::DepartmentId;

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        self.get_list("/api/departments/all").await
    }

    pub async fn create_department(&self, dto: &CreateDepartmentDto) -> Result<(), AppError> {
        self.post_unit("/api/departments/create", dto).await
    }

    pub async fn update_department(
        &self,
        id: DepartmentId,
        dto: &CreateDepartmentDto,
    ) -> Result<(), AppError> {
        self.put_unit(&format!("/api/departments/update/{id}"), dto)
            .await
    }

    pub async fn delete_department(&self, id: DepartmentId) -> Result<(), AppError> {
        self.delete_unit(&format!("/api/departments/delete/{id}"))
            .await
    }
}
