//! Bulk-import reconciler.
//!
//! One controller owns the whole import interaction for a screen: guard
//! against concurrent submissions, send the file, retain the reconciliation
//! report until it is dismissed. A 2xx response with failed rows is a
//! normal outcome; only a request-level failure is an error, and in that
//! case no report exists at all.

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use tracing::{info, instrument};

use registra_core::errors::AppError;
use registra_models::uploads::UploadReport;

use crate::gateway::ApiClient;

/// Importable resource types and their upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Courses,
    Faculties,
    Departments,
    Programs,
}

impl ImportKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ImportKind::Courses => "/api/upload/courses",
            ImportKind::Faculties => "/api/upload/faculty",
            ImportKind::Departments => "/api/upload/departments",
            ImportKind::Programs => "/api/upload/programs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImportKind::Courses => "courses",
            ImportKind::Faculties => "faculties",
            ImportKind::Departments => "departments",
            ImportKind::Programs => "programs",
        }
    }
}

pub struct ImportController {
    api: Arc<ApiClient>,
    in_flight: AtomicBool,
    last_report: Mutex<Option<UploadReport>>,
}

impl ImportController {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
            last_report: Mutex::new(None),
        }
    }

    /// Whether an upload is currently outstanding. Callers disable their
    /// upload affordance while this is true.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Sends `file` to the bulk endpoint for `kind`.
    ///
    /// At most one upload may be outstanding per controller; there is no
    /// queueing, a second call while busy fails without issuing a request.
    /// On success the report is retained until [`dismiss`](Self::dismiss);
    /// the caller must re-fetch the owning list since saved rows need to
    /// appear.
    #[instrument(skip(self, file), fields(kind = kind.label()))]
    pub async fn import(&self, kind: ImportKind, file: &Path) -> Result<UploadReport, AppError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::validation(anyhow!(
                "an upload is already in progress"
            )));
        }

        let result = self
            .api
            .upload_file::<UploadReport>(kind.endpoint(), file)
            .await;
        self.in_flight.store(false, Ordering::SeqCst);

        let mut last = self.last_report.lock().expect("report lock poisoned");
        match result {
            Ok(report) => {
                info!(
                    processed = report.processed,
                    saved = report.saved,
                    skipped = report.skipped,
                    failed = report.failed,
                    "bulk import reconciled"
                );
                *last = Some(report.clone());
                Ok(report)
            }
            Err(err) => {
                // Request-level failure: no partial report exists.
                *last = None;
                Err(err)
            }
        }
    }

    /// The report from the most recent successful import, if not yet
    /// dismissed.
    pub fn last_report(&self) -> Option<UploadReport> {
        self.last_report
            .lock()
            .expect("report lock poisoned")
            .clone()
    }

    /// Drops the retained report; it is ephemeral by contract.
    pub fn dismiss(&self) {
        *self.last_report.lock().expect("report lock poisoned") = None;
    }
}
