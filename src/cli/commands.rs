//! Command handlers: each one builds a screen, drives it, and prints the
//! outcome. All state lives in the screen/controller types; handlers stay
//! thin.

use std::path::Path;
use std::sync::Arc;

use anyhow::anyhow;
use dialoguer::{Confirm, Input, Password};
use serde::Serialize;

use registra_core::errors::AppError;
use registra_core::export::{export_csv, export_xlsx};
use registra_models::courses::{
    Course, CreateCourseDto, distinct_codes, distinct_levels, prerequisite_options,
};
use registra_models::credit_hours::{CreateCreditHourRuleDto, CreditHourRule};
use registra_models::departments::{CreateDepartmentDto, Department};
use registra_models::faculties::{CreateFacultyDto, Faculty};
use registra_models::ids::CourseId;
use registra_models::programs::{CreateProgramDto, Program};
use registra_models::sessions::{AcademicSession, CreateSessionDto};

use crate::gateway::ApiClient;
use crate::modules::auth;
use crate::modules::courses::{CourseFilter, autofill_category};
use crate::modules::credit_hours::RuleFilter;
use crate::modules::departments::DepartmentFilter;
use crate::modules::faculties::FacultyFilter;
use crate::modules::programs::ProgramFilter;
use crate::modules::sessions::SessionFilter;
use crate::screen::{Resource, ResourceScreen};
use crate::upload::{ImportController, ImportKind};

use super::{
    Cli, Commands, CourseCommands, CourseFilterArgs, CreditHourCommands, DepartmentCommands,
    FacultyCommands, PageArgs, ProgramCommands, SessionCommands,
};

pub async fn run(cli: Cli, api: Arc<ApiClient>) -> Result<(), AppError> {
    match cli.command {
        Commands::Login { username, password } => login(&api, username, password).await,
        Commands::Signup {
            username,
            email,
            password,
        } => signup(&api, username, email, password).await,
        Commands::Logout => {
            auth::logout(api.session());
            println!("✅ Logged out");
            Ok(())
        }
        Commands::Whoami => whoami(&api),
        Commands::Faculties { command } => {
            require_session(&api)?;
            faculties(&api, command).await
        }
        Commands::Departments { command } => {
            require_session(&api)?;
            departments(&api, command).await
        }
        Commands::Programs { command } => {
            require_session(&api)?;
            programs(&api, command).await
        }
        Commands::Courses { command } => {
            require_session(&api)?;
            courses(&api, command).await
        }
        Commands::Sessions { command } => {
            require_session(&api)?;
            sessions(&api, command).await
        }
        Commands::CreditHours { command } => {
            require_session(&api)?;
            credit_hours(&api, command).await
        }
    }
}

/// Every screen is behind the login gate, the CLI equivalent of a
/// protected route.
fn require_session(api: &ApiClient) -> Result<(), AppError> {
    if api.session().is_authenticated() {
        Ok(())
    } else {
        Err(AppError::validation(anyhow!(
            "Not logged in. Run `registra login` first."
        )))
    }
}

async fn load_screen<R: Resource>(api: &Arc<ApiClient>) -> Result<ResourceScreen<R>, AppError> {
    let mut screen = ResourceScreen::new(api.clone());
    screen.refresh().await?;
    Ok(screen)
}

fn apply_page<R: Resource>(screen: &mut ResourceScreen<R>, page: &PageArgs) {
    screen.set_page_size(page.page_size);
    screen.set_page(page.page);
}

fn confirm_delete(what: &str) -> bool {
    Confirm::new()
        .with_prompt(format!("Delete this {}?", what))
        .default(false)
        .interact()
        .expect("Failed to read confirmation")
}

fn export_rows<T: Serialize>(rows: &[&T], file: &Path) -> Result<(), AppError> {
    let is_xlsx = file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);
    if is_xlsx {
        export_xlsx(rows, file)
    } else {
        export_csv(rows, file)
    }
}

async fn import_and_report<R: Resource>(
    api: &Arc<ApiClient>,
    kind: ImportKind,
    file: &Path,
) -> Result<(), AppError> {
    let importer = ImportController::new(api.clone());
    let report = importer.import(kind, file).await?;
    super::render::upload_report(&report);

    // Saved rows need to appear: re-fetch the owning list.
    let screen = load_screen::<R>(api).await?;
    println!("\n{} {} on record", screen.rows().len(), kind.label());
    Ok(())
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

async fn login(
    api: &Arc<ApiClient>,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), AppError> {
    let username = username.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });
    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .interact()
            .expect("Failed to read password")
    });

    let user = auth::login_admin(api, &username, &password).await?;
    let roles = user
        .roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("✅ Welcome back, {}! (roles: {})", user.username, roles);
    Ok(())
}

async fn signup(
    api: &Arc<ApiClient>,
    username: String,
    email: String,
    password: Option<String>,
) -> Result<(), AppError> {
    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    let user = auth::signup(
        api,
        registra_models::auth::SignupRequest {
            username,
            password,
            email,
        },
    )
    .await?;
    println!("✅ Account created for {}", user.username);
    Ok(())
}

fn whoami(api: &ApiClient) -> Result<(), AppError> {
    match api.session().current_user() {
        Some(user) => {
            super::render::whoami(&user);
            Ok(())
        }
        None => {
            println!("Not logged in.");
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Faculties
// ---------------------------------------------------------------------------

async fn faculties(api: &Arc<ApiClient>, command: FacultyCommands) -> Result<(), AppError> {
    match command {
        FacultyCommands::List { search, code, page } => {
            let mut screen = load_screen::<Faculty>(api).await?;
            screen.set_filter(FacultyFilter {
                q: search.unwrap_or_default(),
                code,
            });
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::faculties(&view.rows);
            super::render::page_footer(&view.meta);
        }
        FacultyCommands::Create {
            name,
            code,
            institution,
        } => {
            let mut screen = load_screen::<Faculty>(api).await?;
            screen
                .submit(&CreateFacultyDto {
                    faculty_name: name,
                    faculty_code: code,
                    institution,
                })
                .await?;
            println!("✅ Faculty created");
        }
        FacultyCommands::Update {
            id,
            name,
            code,
            institution,
        } => {
            let mut screen = load_screen::<Faculty>(api).await?;
            let existing = screen.begin_edit(id)?.clone();
            screen
                .submit(&CreateFacultyDto {
                    faculty_name: name.unwrap_or(existing.faculty_name),
                    faculty_code: code.unwrap_or(existing.faculty_code),
                    institution: institution.unwrap_or(existing.institution),
                })
                .await?;
            println!("✅ Faculty updated");
        }
        FacultyCommands::Delete { id } => {
            if !confirm_delete("faculty") {
                println!("Aborted.");
                return Ok(());
            }
            let mut screen = load_screen::<Faculty>(api).await?;
            screen.remove(id).await?;
            println!("✅ Faculty deleted");
        }
        FacultyCommands::Import { file } => {
            import_and_report::<Faculty>(api, ImportKind::Faculties, &file).await?;
        }
        FacultyCommands::Export { file, search, code } => {
            let mut screen = load_screen::<Faculty>(api).await?;
            screen.set_filter(FacultyFilter {
                q: search.unwrap_or_default(),
                code,
            });
            let rows = screen.filtered();
            export_rows(&rows, &file)?;
            println!("✅ Exported {} rows to {}", rows.len(), file.display());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

async fn departments(api: &Arc<ApiClient>, command: DepartmentCommands) -> Result<(), AppError> {
    match command {
        DepartmentCommands::List { search, code, page } => {
            let mut screen = load_screen::<Department>(api).await?;
            screen.set_filter(DepartmentFilter {
                q: search.unwrap_or_default(),
                code,
            });
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::departments(&view.rows);
            super::render::page_footer(&view.meta);
        }
        DepartmentCommands::Create { name, code } => {
            let mut screen = load_screen::<Department>(api).await?;
            screen
                .submit(&CreateDepartmentDto {
                    dept_name: name,
                    dept_code: code,
                })
                .await?;
            println!("✅ Department created");
        }
        DepartmentCommands::Update { id, name, code } => {
            let mut screen = load_screen::<Department>(api).await?;
            let existing = screen.begin_edit(id)?.clone();
            screen
                .submit(&CreateDepartmentDto {
                    dept_name: name.unwrap_or(existing.dept_name),
                    dept_code: code.unwrap_or(existing.dept_code),
                })
                .await?;
            println!("✅ Department updated");
        }
        DepartmentCommands::Delete { id } => {
            if !confirm_delete("department") {
                println!("Aborted.");
                return Ok(());
            }
            let mut screen = load_screen::<Department>(api).await?;
            screen.remove(id).await?;
            println!("✅ Department deleted");
        }
        DepartmentCommands::Import { file } => {
            import_and_report::<Department>(api, ImportKind::Departments, &file).await?;
        }
        DepartmentCommands::Export { file, search, code } => {
            let mut screen = load_screen::<Department>(api).await?;
            screen.set_filter(DepartmentFilter {
                q: search.unwrap_or_default(),
                code,
            });
            let rows = screen.filtered();
            export_rows(&rows, &file)?;
            println!("✅ Exported {} rows to {}", rows.len(), file.display());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

async fn programs(api: &Arc<ApiClient>, command: ProgramCommands) -> Result<(), AppError> {
    match command {
        ProgramCommands::List {
            search,
            department,
            page,
        } => {
            let mut screen = load_screen::<Program>(api).await?;
            screen.set_filter(ProgramFilter {
                q: search.unwrap_or_default(),
                department_id: department,
            });
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::programs(&view.rows);
            super::render::page_footer(&view.meta);
        }
        ProgramCommands::Create {
            name,
            duration,
            department,
        } => {
            let mut screen = load_screen::<Program>(api).await?;
            screen
                .submit(&CreateProgramDto {
                    program_name: name,
                    duration_years: duration,
                    department_id: department,
                })
                .await?;
            println!("✅ Program created");
        }
        ProgramCommands::Update {
            id,
            name,
            duration,
            department,
        } => {
            let mut screen = load_screen::<Program>(api).await?;
            let existing = screen.begin_edit(id)?.clone();
            let department_id = department
                .or(existing.department.as_ref().map(|d| d.id))
                .ok_or_else(|| AppError::validation(anyhow!("Department is required")))?;
            screen
                .submit(&CreateProgramDto {
                    program_name: name.unwrap_or(existing.program_name),
                    duration_years: duration.unwrap_or(existing.duration_years),
                    department_id,
                })
                .await?;
            println!("✅ Program updated");
        }
        ProgramCommands::Delete { id } => {
            if !confirm_delete("program") {
                println!("Aborted.");
                return Ok(());
            }
            let mut screen = load_screen::<Program>(api).await?;
            screen.remove(id).await?;
            println!("✅ Program deleted");
        }
        ProgramCommands::Import { file } => {
            import_and_report::<Program>(api, ImportKind::Programs, &file).await?;
        }
        ProgramCommands::Export {
            file,
            search,
            department,
        } => {
            let mut screen = load_screen::<Program>(api).await?;
            screen.set_filter(ProgramFilter {
                q: search.unwrap_or_default(),
                department_id: department,
            });
            let rows = screen.filtered();
            export_rows(&rows, &file)?;
            println!("✅ Exported {} rows to {}", rows.len(), file.display());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

fn course_filter(args: CourseFilterArgs) -> CourseFilter {
    CourseFilter {
        q: args.search.unwrap_or_default(),
        department_id: args.department,
        course_code: args.code,
        level: args.level,
    }
}

async fn courses(api: &Arc<ApiClient>, command: CourseCommands) -> Result<(), AppError> {
    match command {
        CourseCommands::List { filter, page } => {
            let mut screen = load_screen::<Course>(api).await?;
            screen.set_filter(course_filter(filter));
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::courses(&view.rows);
            super::render::page_footer(&view.meta);
        }
        CourseCommands::Create {
            code,
            title,
            unit,
            status,
            semester,
            level,
            category,
            department,
            prerequisites,
        } => {
            let mut screen = load_screen::<Course>(api).await?;
            let departments = api.list_departments().await?;
            let mut draft = CreateCourseDto {
                course_code: code,
                course_title: title,
                credit_unit: unit,
                status,
                semester,
                level,
                course_category: category,
                department_id: department,
                prerequisite_ids: prerequisites.into_iter().map(CourseId::new).collect(),
            };
            autofill_category(&mut draft, &departments);
            screen.submit(&draft).await?;
            println!("✅ Course created");
        }
        CourseCommands::Update {
            id,
            code,
            title,
            unit,
            status,
            semester,
            level,
            category,
            department,
            prerequisites,
        } => {
            let mut screen = load_screen::<Course>(api).await?;
            let existing = screen.begin_edit(id)?.clone();
            let department_id = department
                .or(existing.department.as_ref().map(|d| d.id))
                .ok_or_else(|| AppError::validation(anyhow!("Department is required")))?;
            let prerequisite_ids = match prerequisites {
                Some(ids) => ids.into_iter().map(CourseId::new).collect(),
                None => existing.prerequisites.iter().map(|p| p.id).collect(),
            };
            screen
                .submit(&CreateCourseDto {
                    course_code: code.unwrap_or(existing.course_code),
                    course_title: title.unwrap_or(existing.course_title),
                    credit_unit: unit.unwrap_or(existing.credit_unit),
                    status: status.unwrap_or(existing.status),
                    semester: semester.unwrap_or(existing.semester),
                    level: level.unwrap_or(existing.level),
                    course_category: category.or(existing.course_category),
                    department_id,
                    prerequisite_ids,
                })
                .await?;
            println!("✅ Course updated");
        }
        CourseCommands::Delete { id } => {
            if !confirm_delete("course") {
                println!("Aborted.");
                return Ok(());
            }
            let mut screen = load_screen::<Course>(api).await?;
            screen.remove(id).await?;
            println!("✅ Course deleted");
        }
        CourseCommands::Options { department, search } => {
            let screen = load_screen::<Course>(api).await?;
            let rows = screen.rows();

            println!("Course codes:");
            for code in distinct_codes(rows) {
                println!("  {}", code);
            }
            println!("\nLevels:");
            for level in distinct_levels(rows) {
                println!("  {}", level);
            }

            if let Some(dept) = department {
                println!("\nPrerequisite candidates:");
                let candidates = prerequisite_options(rows, dept, &search, None);
                if candidates.is_empty() {
                    println!("  No courses found");
                } else {
                    for c in candidates {
                        println!("  {} — {}", c.course_code, c.course_title);
                    }
                }
            }
        }
        CourseCommands::Import { file } => {
            import_and_report::<Course>(api, ImportKind::Courses, &file).await?;
        }
        CourseCommands::Export { file, filter } => {
            let mut screen = load_screen::<Course>(api).await?;
            screen.set_filter(course_filter(filter));
            let rows = screen.filtered();
            export_rows(&rows, &file)?;
            println!("✅ Exported {} rows to {}", rows.len(), file.display());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

async fn sessions(api: &Arc<ApiClient>, command: SessionCommands) -> Result<(), AppError> {
    match command {
        SessionCommands::List { search, page } => {
            let mut screen = load_screen::<AcademicSession>(api).await?;
            screen.set_filter(SessionFilter {
                q: search.unwrap_or_default(),
            });
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::sessions(&view.rows);
            super::render::page_footer(&view.meta);
        }
        SessionCommands::Create {
            label,
            year,
            current,
        } => {
            let mut screen = load_screen::<AcademicSession>(api).await?;
            screen
                .submit(&CreateSessionDto {
                    intake_session: label,
                    intake_year: year,
                    is_current: current,
                })
                .await?;
            println!("✅ Session created");
        }
        SessionCommands::Update {
            id,
            label,
            year,
            current,
        } => {
            let mut screen = load_screen::<AcademicSession>(api).await?;
            let existing = screen.begin_edit(id)?.clone();
            screen
                .submit(&CreateSessionDto {
                    intake_session: label.unwrap_or(existing.intake_session),
                    intake_year: year.unwrap_or(existing.intake_year),
                    is_current: current.unwrap_or(existing.is_current),
                })
                .await?;
            println!("✅ Session updated");
        }
        SessionCommands::Delete { id } => {
            if !confirm_delete("session") {
                println!("Aborted.");
                return Ok(());
            }
            let mut screen = load_screen::<AcademicSession>(api).await?;
            screen.remove(id).await?;
            println!("✅ Session deleted");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Credit-hour rules
// ---------------------------------------------------------------------------

async fn credit_hours(api: &Arc<ApiClient>, command: CreditHourCommands) -> Result<(), AppError> {
    match command {
        CreditHourCommands::List { search, page } => {
            let mut screen = load_screen::<CreditHourRule>(api).await?;
            screen.set_filter(RuleFilter {
                q: search.unwrap_or_default(),
            });
            apply_page(&mut screen, &page);
            let view = screen.visible();
            super::render::credit_hours(&view.rows);
            super::render::page_footer(&view.meta);
        }
        CreditHourCommands::Create {
            session,
            semester,
            min,
            max,
        } => {
            let mut screen = load_screen::<CreditHourRule>(api).await?;
            screen
                .submit(&CreateCreditHourRuleDto {
                    session_id: session,
                    semester,
                    min_hours: min,
                    max_hours: max,
                })
                .await?;
            println!("✅ Credit-hour rule created");
        }
    }
    Ok(())
}
