use registra_core::errors::AppError;
use registra_models::courses::{Course, CreateCourseDto};
use registra_models::ids::CourseId;

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.get_list("/api/courses/all").await
    }

    pub async fn create_course(&self, dto: &CreateCourseDto) -> Result<(), AppError> {
        self.post_unit("/api/courses/create", dto).await
    }

    pub async fn update_course(&self, id: CourseId, dto: &CreateCourseDto) -> Result<(), AppError> {
        self.put_unit(&format!("/api/courses/update/{id}"), dto)
            .await
    }

    pub async fn delete_course(&self, id: CourseId) -> Result<(), AppError> {
        self.delete_unit(&format!("/api/courses/delete/{id}")).await
    }
}
