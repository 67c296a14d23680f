use std::env;
use std::path::{Path, PathBuf};

/// Location of the durable session state.
///
/// Two fixed files live under the storage directory: the raw bearer token
/// and the user profile JSON. They are always written and cleared together.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let dir = env::var("REGISTRA_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("storage/session"));
        Self { dir }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn token_path(&self) -> PathBuf {
        self.dir.join("auth_token")
    }

    pub fn user_path(&self) -> PathBuf {
        self.dir.join("auth_user.json")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
