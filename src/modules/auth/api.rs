use registra_core::errors::AppError;
use registra_models::auth::{AuthResponse, LoginRequest, SignupRequest};

use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.post_json("/api/auth/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, AppError> {
        self.post_json("/api/auth/signup", request).await
    }
}
