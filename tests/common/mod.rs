//! In-process mock backend for integration tests.
//!
//! Serves the REST surface the console consumes, with a small in-memory
//! store, the same bearer-token gate the real backend applies, and
//! configurable upload behaviour (forced failure, artificial delay).

// Each integration binary compiles its own copy of this module and uses a
// different subset of it.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use registra::gateway::ApiClient;
use registra_config::{ApiConfig, StorageConfig};
use registra_session::SessionStore;

pub const ADMIN_TOKEN: &str = "tok-admin";

#[derive(Default)]
struct Inner {
    courses: Vec<Value>,
    faculties: Vec<Value>,
    departments: Vec<Value>,
    next_id: i64,
    fail_uploads: bool,
    upload_delay_ms: u64,
}

#[derive(Clone, Default)]
pub struct BackendState {
    inner: Arc<Mutex<Inner>>,
}

#[allow(dead_code)]
impl BackendState {
    fn next_id(&self) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        inner.next_id + 100
    }

    pub fn seed_course(&self, id: i64, code: &str, title: &str, dept: i64, level: &str) {
        self.inner.lock().unwrap().courses.push(json!({
            "id": id,
            "courseCode": code,
            "courseTitle": title,
            "creditUnit": 2,
            "status": "CORE",
            "semester": "FIRST",
            "level": level,
            "department": {"id": dept, "deptName": format!("Dept {}", dept)},
            "prerequisites": [],
        }));
    }

    pub fn seed_faculty(&self, id: i64, name: &str, code: &str) {
        self.inner.lock().unwrap().faculties.push(json!({
            "id": id,
            "facultyName": name,
            "facultyCode": code,
            "institution": "FCE Test",
        }));
    }

    pub fn seed_department(&self, id: i64, name: &str, code: &str) {
        self.inner.lock().unwrap().departments.push(json!({
            "id": id,
            "deptName": name,
            "deptCode": code,
        }));
    }

    pub fn course_count(&self) -> usize {
        self.inner.lock().unwrap().courses.len()
    }

    pub fn faculty_count(&self) -> usize {
        self.inner.lock().unwrap().faculties.len()
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        self.inner.lock().unwrap().fail_uploads = fail;
    }

    pub fn set_upload_delay_ms(&self, delay: u64) {
        self.inner.lock().unwrap().upload_delay_ms = delay;
    }
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ADMIN_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "Missing or invalid token").into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match (username, password) {
        ("admin", "secret") => Json(json!({
            "token": ADMIN_TOKEN,
            "username": "admin",
            "roles": ["ADMIN"],
            "identifier": 1,
        }))
        .into_response(),
        ("staff", "secret") => Json(json!({
            "token": "tok-staff",
            "username": "staff",
            "roles": ["STAFF"],
            "identifier": 2,
        }))
        .into_response(),
        _ => (StatusCode::UNAUTHORIZED, "Invalid username or password").into_response(),
    }
}

async fn list_courses(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    Json(state.inner.lock().unwrap().courses.clone()).into_response()
}

async fn create_course(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let id = state.next_id();
    let dept = body["departmentId"].as_i64().unwrap_or(0);
    state.inner.lock().unwrap().courses.push(json!({
        "id": id,
        "courseCode": body["courseCode"],
        "courseTitle": body["courseTitle"],
        "creditUnit": body["creditUnit"],
        "status": body["status"],
        "semester": body["semester"],
        "level": body["level"],
        "courseCategory": body["courseCategory"],
        "department": {"id": dept, "deptName": format!("Dept {}", dept)},
        "prerequisites": [],
    }));
    (StatusCode::CREATED, Json(json!({"id": id}))).into_response()
}

async fn update_course(
    State(state): State<BackendState>,
    UrlPath(id): UrlPath<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let mut inner = state.inner.lock().unwrap();
    let Some(course) = inner
        .courses
        .iter_mut()
        .find(|c| c["id"].as_i64() == Some(id))
    else {
        return (StatusCode::NOT_FOUND, "Course not found").into_response();
    };
    let dept = body["departmentId"].as_i64().unwrap_or(0);
    *course = json!({
        "id": id,
        "courseCode": body["courseCode"],
        "courseTitle": body["courseTitle"],
        "creditUnit": body["creditUnit"],
        "status": body["status"],
        "semester": body["semester"],
        "level": body["level"],
        "courseCategory": body["courseCategory"],
        "department": {"id": dept, "deptName": format!("Dept {}", dept)},
        "prerequisites": [],
    });
    Json(json!({"id": id})).into_response()
}

async fn delete_course(
    State(state): State<BackendState>,
    UrlPath(id): UrlPath<i64>,
    headers: HeaderMap,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let mut inner = state.inner.lock().unwrap();
    let before = inner.courses.len();
    inner.courses.retain(|c| c["id"].as_i64() != Some(id));
    if inner.courses.len() == before {
        return (StatusCode::NOT_FOUND, "Course not found").into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_faculties(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    Json(state.inner.lock().unwrap().faculties.clone()).into_response()
}

async fn create_faculty(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let code = body["facultyCode"].as_str().unwrap_or_default().to_string();
    let id = state.next_id();
    let mut inner = state.inner.lock().unwrap();
    if inner
        .faculties
        .iter()
        .any(|f| f["facultyCode"].as_str() == Some(code.as_str()))
    {
        return (
            StatusCode::BAD_REQUEST,
            "A faculty with this code already exists",
        )
            .into_response();
    }
    inner.faculties.push(json!({
        "id": id,
        "facultyName": body["facultyName"],
        "facultyCode": code,
        "institution": body["institution"],
    }));
    (StatusCode::CREATED, Json(json!({"id": id}))).into_response()
}

async fn update_faculty(
    State(state): State<BackendState>,
    UrlPath(id): UrlPath<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let mut inner = state.inner.lock().unwrap();
    let Some(faculty) = inner
        .faculties
        .iter_mut()
        .find(|f| f["id"].as_i64() == Some(id))
    else {
        return (StatusCode::NOT_FOUND, "Faculty not found").into_response();
    };
    *faculty = json!({
        "id": id,
        "facultyName": body["facultyName"],
        "facultyCode": body["facultyCode"],
        "institution": body["institution"],
    });
    Json(json!({"id": id})).into_response()
}

async fn delete_faculty(
    State(state): State<BackendState>,
    UrlPath(id): UrlPath<i64>,
    headers: HeaderMap,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    let mut inner = state.inner.lock().unwrap();
    let before = inner.faculties.len();
    inner.faculties.retain(|f| f["id"].as_i64() != Some(id));
    if inner.faculties.len() == before {
        return (StatusCode::NOT_FOUND, "Faculty not found").into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_departments(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    Json(state.inner.lock().unwrap().departments.clone()).into_response()
}

/// Some backends null out empty collections; the sessions list does so
/// here to prove the client normalises it.
async fn list_sessions(headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }
    Json(Value::Null).into_response()
}

async fn upload_courses(
    State(state): State<BackendState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !bearer_ok(&headers) {
        return unauthorized();
    }

    let (fail, delay) = {
        let inner = state.inner.lock().unwrap();
        (inner.fail_uploads, inner.upload_delay_ms)
    };
    if delay > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
    }
    if fail {
        return (StatusCode::BAD_REQUEST, "Upload rejected: bad file").into_response();
    }

    let mut file_bytes = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            file_bytes = field.bytes().await.ok();
        }
    }
    let Some(bytes) = file_bytes else {
        return (StatusCode::BAD_REQUEST, "missing file field").into_response();
    };

    // Each non-empty line is a row: "CODE,TITLE" saves a course, anything
    // else is reported as a failed row.
    let content = String::from_utf8_lossy(&bytes).to_string();
    let mut processed = 0;
    let mut saved = 0;
    let mut failed = 0;
    let mut errors = Vec::new();

    for (index, line) in content.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        processed += 1;
        match line.split_once(',') {
            Some((code, title)) => {
                let id = state.next_id();
                state.inner.lock().unwrap().courses.push(json!({
                    "id": id,
                    "courseCode": code.trim(),
                    "courseTitle": title.trim(),
                    "creditUnit": 2,
                    "status": "CORE",
                    "semester": "FIRST",
                    "level": "NCE I",
                    "department": {"id": 1, "deptName": "Dept 1"},
                    "prerequisites": [],
                }));
                saved += 1;
            }
            None => {
                failed += 1;
                errors.push(json!({
                    "rowNumber": index + 1,
                    "message": format!("malformed row: {}", line.trim()),
                }));
            }
        }
    }

    Json(json!({
        "processed": processed,
        "saved": saved,
        "skipped": 0,
        "failed": failed,
        "errors": errors,
    }))
    .into_response()
}

pub struct TestBackend {
    pub base_url: String,
    pub state: BackendState,
}

pub async fn spawn_backend() -> TestBackend {
    let state = BackendState::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/courses/all", get(list_courses))
        .route("/api/courses/create", post(create_course))
        .route("/api/courses/update/{id}", put(update_course))
        .route("/api/courses/delete/{id}", delete(delete_course))
        .route("/api/faculties", get(list_faculties))
        .route("/api/faculties/create", post(create_faculty))
        .route("/api/faculties/{id}", put(update_faculty).delete(delete_faculty))
        .route("/api/departments/all", get(list_departments))
        .route("/api/sessions/all", get(list_sessions))
        .route("/api/upload/courses", post(upload_courses))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// A client over a fresh session directory.
pub fn client_for(base_url: &str, session_dir: &Path) -> Arc<ApiClient> {
    let session = Arc::new(SessionStore::open(StorageConfig::at(session_dir)));
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    Arc::new(ApiClient::new(config, session).expect("failed to build client"))
}

/// Logs the shared admin fixture in and persists its session.
#[allow(dead_code)]
pub async fn login_admin(api: &Arc<ApiClient>) {
    registra::modules::auth::login_admin(api, "admin", "secret")
        .await
        .expect("admin login failed");
}
