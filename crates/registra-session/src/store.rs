use std::fs;
use std::sync::RwLock;

use tracing::{info, warn};

use registra_config::StorageConfig;
use registra_core::errors::AppError;
use registra_models::auth::{AuthUser, Role};

#[derive(Debug, Clone)]
struct Session {
    token: String,
    user: AuthUser,
}

/// Single source of truth for the current login session.
///
/// Mutations happen through [`login`](SessionStore::login) and
/// [`logout`](SessionStore::logout) only; everything else is a read.
/// Consumers never get a mutable handle to the inner state.
#[derive(Debug)]
pub struct SessionStore {
    config: StorageConfig,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Opens the store and restores any previously persisted session.
    ///
    /// Restoring never fails: a missing directory, unreadable file, or
    /// malformed profile JSON all degrade to "no session". This runs before
    /// any command so protected operations never observe a half-restored
    /// state.
    pub fn open(config: StorageConfig) -> Self {
        let current = Self::restore(&config);
        if current.is_some() {
            info!(dir = %config.dir().display(), "restored persisted session");
        }
        Self {
            config,
            current: RwLock::new(current),
        }
    }

    fn restore(config: &StorageConfig) -> Option<Session> {
        let token = fs::read_to_string(config.token_path()).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }

        let user_raw = fs::read_to_string(config.user_path()).ok()?;
        match serde_json::from_str::<AuthUser>(&user_raw) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                warn!(error = %err, "stored user profile is malformed, treating as logged out");
                None
            }
        }
    }

    /// Persists a new session and updates in-memory state.
    ///
    /// After this returns, [`is_authenticated`](SessionStore::is_authenticated)
    /// is true and role checks reflect `user.roles`.
    pub fn login(&self, token: &str, user: AuthUser) -> Result<(), AppError> {
        fs::create_dir_all(self.config.dir())?;
        fs::write(self.config.token_path(), token)?;
        let profile = serde_json::to_string(&user)
            .map_err(|e| AppError::validation(anyhow::anyhow!("failed to encode profile: {e}")))?;
        fs::write(self.config.user_path(), profile)?;

        let mut current = self.current.write().expect("session lock poisoned");
        *current = Some(Session {
            token: token.to_string(),
            user,
        });
        info!("session persisted");
        Ok(())
    }

    /// Clears the persisted and in-memory session. Idempotent: logging out
    /// while logged out is a no-op.
    pub fn logout(&self) {
        for path in [self.config.token_path(), self.config.user_path()] {
            if let Err(err) = fs::remove_file(&path)
                && err.kind() != std::io::ErrorKind::NotFound
            {
                warn!(path = %path.display(), error = %err, "failed to remove session file");
            }
        }

        let mut current = self.current.write().expect("session lock poisoned");
        if current.take().is_some() {
            info!("session cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .is_some()
    }

    /// The bearer token, if a session is active.
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// The logged-in user's profile, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// Pure query against the in-memory role set. Always false when logged
    /// out.
    pub fn has_role(&self, role: Role) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.has_role(role))
            .unwrap_or(false)
    }
}
