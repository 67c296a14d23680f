//! Bulk-import reconciliation report.
//!
//! A 2xx upload response always carries a report, even when every row
//! failed; a non-zero `failed` count is a normal outcome, not an error.
//! The report is ephemeral: it belongs to one upload and is dropped when
//! the caller dismisses it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowIssue {
    pub row_number: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub processed: u32,
    pub saved: u32,
    pub skipped: u32,
    pub failed: u32,
    /// Per-row diagnostics in backend order.
    #[serde(default, deserialize_with = "registra_core::serde::null_to_default")]
    pub errors: Vec<RowIssue>,
}

impl UploadReport {
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty()
    }
}
