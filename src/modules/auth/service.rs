//! Login, signup, and logout flows.
//!
//! The console is admin-only: a login that authenticates but carries
//! neither `ADMIN` nor `SUPERADMIN` is refused *before* the session is
//! persisted, so a staff account can never end up with a stored token it
//! cannot use.

use anyhow::anyhow;
use tracing::{info, instrument};

use registra_core::errors::AppError;
use registra_models::auth::{AuthUser, LoginRequest, SignupRequest};
use registra_session::SessionStore;

use crate::gateway::ApiClient;
use crate::validation::validate_dto;

#[instrument(skip(api, password))]
pub async fn login_admin(
    api: &ApiClient,
    username: &str,
    password: &str,
) -> Result<AuthUser, AppError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    validate_dto(&request)?;

    let response = api.login(&request).await?;
    let token = response.token.clone();
    let user = response.into_user();

    if !user.may_administer() {
        return Err(AppError::validation(anyhow!(
            "Access denied: only ADMIN or SUPERADMIN accounts can use this console"
        )));
    }

    api.session().login(&token, user.clone())?;
    info!(username = %user.username, "admin logged in");
    Ok(user)
}

#[instrument(skip(api, request))]
pub async fn signup(api: &ApiClient, request: SignupRequest) -> Result<AuthUser, AppError> {
    validate_dto(&request)?;

    let response = api.signup(&request).await?;
    let token = response.token.clone();
    let user = response.into_user();

    // A signup that lands an admin role starts a session immediately; any
    // other role can still be created here but must log in elsewhere.
    if user.may_administer() {
        api.session().login(&token, user.clone())?;
    }
    Ok(user)
}

pub fn logout(session: &SessionStore) {
    session.logout();
    info!("logged out");
}
