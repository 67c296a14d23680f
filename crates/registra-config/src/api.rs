use std::env;

/// Backend endpoint configuration.
///
/// The console talks to exactly one backend; every request shares the same
/// base URL and per-request ceiling. There is no retry policy.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(15);

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 15,
        }
    }
}
