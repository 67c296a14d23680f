mod common;

use std::sync::Arc;

use common::{client_for, login_admin, spawn_backend};

use registra::gateway::ApiClient;
use registra::modules::courses::CourseFilter;
use registra::screen::ResourceScreen;
use registra_models::courses::{Course, CourseStatus, CreateCourseDto, Semester};
use registra_models::ids::{CourseId, DepartmentId};

fn draft(code: &str, title: &str, level: &str, dept: i64) -> CreateCourseDto {
    CreateCourseDto {
        course_code: code.to_string(),
        course_title: title.to_string(),
        credit_unit: 2,
        status: CourseStatus::Core,
        semester: Semester::First,
        level: level.to_string(),
        course_category: None,
        department_id: DepartmentId::new(dept),
        prerequisite_ids: vec![],
    }
}

async fn course_screen(api: &Arc<ApiClient>) -> ResourceScreen<Course> {
    let mut screen = ResourceScreen::new(api.clone());
    screen.refresh().await.unwrap();
    screen
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "CSC 111", "Intro to Programming", 1, "NCE I");
    backend.state.seed_course(2, "MTH 111", "Algebra", 1, "NCE I");
    backend.state.seed_course(3, "PHY 111", "Mechanics", 2, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    assert_eq!(screen.rows().len(), 3);

    // Department filter narrows to that department's courses only.
    screen.set_filter(CourseFilter {
        department_id: Some(DepartmentId::new(1)),
        ..Default::default()
    });
    let view = screen.visible();
    assert_eq!(view.meta.total, 2);
    assert!(view.rows.iter().all(|c| {
        c.department.as_ref().map(|d| d.id) == Some(DepartmentId::new(1))
    }));

    // Search composes with the department filter.
    screen.set_filter(CourseFilter {
        q: "intro".to_string(),
        department_id: Some(DepartmentId::new(1)),
        ..Default::default()
    });
    let view = screen.visible();
    assert_eq!(view.meta.total, 1);
    assert_eq!(view.rows[0].course_code, "CSC 111");

    // A page far past the end clamps to the last valid page.
    screen.set_filter(CourseFilter::default());
    screen.set_page_size(2);
    screen.set_page(50);
    let view = screen.visible();
    assert_eq!(view.meta.total_pages, 2);
    assert_eq!(view.meta.safe_page, 2);
    assert_eq!(view.rows.len(), 1);
}

#[tokio::test]
async fn test_structural_validation_blocks_submit() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    let err = screen
        .submit(&draft("CSCI1010", "Bad Code", "NCE I", 1))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("3-4 letters"));
    // Nothing reached the backend.
    assert_eq!(backend.state.course_count(), 0);
}

#[tokio::test]
async fn test_numbering_band_blocks_submit() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    let err = screen
        .submit(&draft("CSC 120", "Off By One", "NCE I", 1))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("between 111 and 119"));
    assert_eq!(backend.state.course_count(), 0);
}

#[tokio::test]
async fn test_duplicate_code_blocks_submit_client_side() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "MTH 111", "Algebra", 1, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    // Case and whitespace do not disguise a duplicate.
    let err = screen
        .submit(&draft("mth 111", "Algebra Again", "NCE I", 1))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("already exists"));
    assert_eq!(backend.state.course_count(), 1);
}

#[tokio::test]
async fn test_create_refreshes_from_backend() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "CSC 111", "Intro to Programming", 1, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    screen
        .submit(&draft("CSC 112", "Programming II", "NCE I", 1))
        .await
        .unwrap();

    assert_eq!(backend.state.course_count(), 2);
    // The visible table reflects the backend's state, not a local patch.
    assert!(screen.rows().iter().any(|c| c.course_code == "CSC 112"));
    assert_eq!(screen.editing(), None);
}

#[tokio::test]
async fn test_edit_accepts_own_unchanged_code() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "MTH 111", "Algebra", 1, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    screen.begin_edit(1).unwrap();
    screen
        .submit(&draft("MTH 111", "Algebra, Revised", "NCE I", 1))
        .await
        .unwrap();

    let row = screen
        .rows()
        .iter()
        .find(|c| c.id == CourseId::new(1))
        .unwrap();
    assert_eq!(row.course_title, "Algebra, Revised");
    assert_eq!(backend.state.course_count(), 1);
}

#[tokio::test]
async fn test_self_prerequisite_rejected_on_edit() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "MTH 111", "Algebra", 1, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    screen.begin_edit(1).unwrap();
    let mut dto = draft("MTH 111", "Algebra", "NCE I", 1);
    dto.prerequisite_ids = vec![CourseId::new(1)];

    let err = screen.submit(&dto).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("own prerequisite"));
}

#[tokio::test]
async fn test_delete_refreshes_list() {
    let backend = spawn_backend().await;
    backend.state.seed_course(1, "CSC 111", "Intro to Programming", 1, "NCE I");
    backend.state.seed_course(2, "MTH 111", "Algebra", 1, "NCE I");

    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    let mut screen = course_screen(&api).await;
    screen.remove(1).await.unwrap();

    assert_eq!(screen.rows().len(), 1);
    assert_eq!(screen.rows()[0].course_code, "MTH 111");
}

#[tokio::test]
async fn test_null_list_body_decodes_to_empty() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let api = client_for(&backend.base_url, dir.path());
    login_admin(&api).await;

    // The mock nulls out the sessions collection.
    let sessions = api.list_sessions().await.unwrap();
    assert!(sessions.is_empty());
}
