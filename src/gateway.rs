//! Shared HTTP plumbing for every backend call.
//!
//! One [`ApiClient`] serves the whole console. Per-resource operations are
//! declared as `impl ApiClient` blocks next to the module that owns them;
//! this file holds only the pieces they share: base-URL joining, bearer
//! authentication, the error taxonomy mapping, and request logging.
//!
//! Policies encoded here, all deliberate:
//!
//! - No retries and no response caching; callers re-fetch when they need
//!   fresh data.
//! - List responses normalise a `null`/empty body to an empty `Vec`.
//! - Non-2xx responses surface the backend's body verbatim.
//! - **401 is not auto-handled.** A dead token produces an error for the
//!   caller to display; the stored session is left untouched so the user
//!   is never bounced through a logout they did not ask for.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use registra_config::ApiConfig;
use registra_core::errors::AppError;
use registra_session::SessionStore;

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AppError::transport)?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Attaches the bearer token when a session is active.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn classify(err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::timeout(anyhow!("request timed out: {err}"))
        } else {
            AppError::transport(anyhow!("request failed: {err}"))
        }
    }

    /// Sends a request and applies the error taxonomy to the outcome.
    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, AppError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        let response = request.send().await.map_err(Self::classify)?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis();

        if status.is_success() {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency_ms,
                "request completed"
            );
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency_ms,
            "backend rejected request"
        );

        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body
        };
        Err(AppError::backend(status.as_u16(), anyhow!("{}", message)))
    }

    /// GET returning a collection; `null` or missing bodies become an empty
    /// `Vec` so list handling downstream is branch-free.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, AppError> {
        let request = self.authorize(self.http.get(self.url(path)));
        let response = self.dispatch("GET", path, request).await?;
        let rows: Option<Vec<T>> = response
            .json()
            .await
            .context("failed to decode list response")
            .map_err(AppError::transport)?;
        Ok(rows.unwrap_or_default())
    }

    /// POST with a JSON body, decoding the response as `T`.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        let response = self.dispatch("POST", path, request).await?;
        response
            .json()
            .await
            .context("failed to decode response")
            .map_err(AppError::transport)
    }

    /// POST where the caller only cares that the backend accepted the
    /// record; the representation (or empty success body) is discarded.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        self.dispatch("POST", path, request).await?;
        Ok(())
    }

    /// PUT counterpart of [`post_unit`](Self::post_unit).
    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let request = self.authorize(self.http.put(self.url(path)).json(body));
        self.dispatch("PUT", path, request).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), AppError> {
        let request = self.authorize(self.http.delete(self.url(path)));
        self.dispatch("DELETE", path, request).await?;
        Ok(())
    }

    /// Multipart upload of one file under the `file` form field, decoding
    /// the response as `T`.
    pub(crate) async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file: &Path,
    ) -> Result<T, AppError> {
        let bytes = tokio::fs::read(file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))
            .map_err(AppError::validation)?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.authorize(self.http.post(self.url(path)).multipart(form));
        let response = self.dispatch("POST", path, request).await?;
        response
            .json()
            .await
            .context("failed to decode upload report")
            .map_err(AppError::transport)
    }
}
