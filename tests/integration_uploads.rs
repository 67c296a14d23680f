mod common;

use std::sync::Arc;

use common::{client_for, login_admin, spawn_backend};

use registra::upload::{ImportController, ImportKind};
use registra_core::errors::ErrorKind;

fn write_rows(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_import_produces_reconciliation_report() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let file = write_rows(
        dir.path(),
        "courses.csv",
        "CSC 111,Intro to Programming\nMTH 111,Algebra\nnot-a-row\n",
    );

    let importer = ImportController::new(api.clone());
    let report = importer.import(ImportKind::Courses, &file).await.unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(report.saved, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].row_number, 3);
    assert!(report.errors[0].message.contains("not-a-row"));

    // Saved rows are in the backend; the caller re-fetches to see them.
    assert_eq!(backend.state.course_count(), 2);

    // The report is retained until dismissed.
    assert!(importer.last_report().is_some());
    importer.dismiss();
    assert!(importer.last_report().is_none());
    assert!(!importer.is_busy());
}

#[tokio::test]
async fn test_clean_import_reports_no_issues() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let file = write_rows(dir.path(), "courses.csv", "CSC 111,Intro\n");

    let importer = ImportController::new(api.clone());
    let report = importer.import(ImportKind::Courses, &file).await.unwrap();

    assert_eq!(report.failed, 0);
    assert!(report.errors.is_empty());
    assert!(!report.has_issues());
}

#[tokio::test]
async fn test_request_level_failure_leaves_no_report() {
    let backend = spawn_backend().await;
    backend.state.set_fail_uploads(true);

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let file = write_rows(dir.path(), "courses.csv", "CSC 111,Intro\n");

    let importer = ImportController::new(api.clone());
    let err = importer
        .import(ImportKind::Courses, &file)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Backend(400));
    assert_eq!(err.to_string(), "Upload rejected: bad file");
    // No partial report exists after a whole-request failure.
    assert!(importer.last_report().is_none());
    assert!(!importer.is_busy());
    assert_eq!(backend.state.course_count(), 0);
}

#[tokio::test]
async fn test_second_import_refused_while_first_in_flight() {
    let backend = spawn_backend().await;
    backend.state.set_upload_delay_ms(300);

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let file = write_rows(dir.path(), "courses.csv", "CSC 111,Intro\n");

    let importer = Arc::new(ImportController::new(api.clone()));
    let (first, second) = tokio::join!(
        importer.import(ImportKind::Courses, &file),
        importer.import(ImportKind::Courses, &file),
    );

    // Exactly one side goes through; the other is refused without a
    // request (no queueing).
    let (ok, busy) = match (first, second) {
        (Ok(report), Err(err)) | (Err(err), Ok(report)) => (report, err),
        other => panic!("expected one success and one busy rejection, got {:?}", other),
    };
    assert_eq!(ok.saved, 1);
    assert!(busy.is_validation());
    assert!(busy.to_string().contains("already in progress"));
    assert_eq!(backend.state.course_count(), 1);
}

#[tokio::test]
async fn test_missing_local_file_fails_before_any_request() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let importer = ImportController::new(api.clone());
    let err = importer
        .import(ImportKind::Courses, &dir.path().join("nope.csv"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(importer.last_report().is_none());
}
