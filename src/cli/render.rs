//! Plain-text rendering of tables, pagination footers, and upload reports.

use registra_core::listing::PageMeta;
use registra_models::auth::AuthUser;
use registra_models::courses::Course;
use registra_models::credit_hours::CreditHourRule;
use registra_models::departments::Department;
use registra_models::faculties::Faculty;
use registra_models::programs::Program;
use registra_models::sessions::AcademicSession;
use registra_models::uploads::UploadReport;

const NO_RECORDS: &str = "No records found matching your criteria.";

pub fn page_footer(meta: &PageMeta) {
    println!(
        "\npage {} of {} ({} record{})",
        meta.safe_page,
        meta.total_pages,
        meta.total,
        if meta.total == 1 { "" } else { "s" }
    );
}

pub fn whoami(user: &AuthUser) {
    let roles = user
        .roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} (roles: {})", user.username, roles);
}

pub fn faculties(rows: &[&Faculty]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!(
        "{:<6} {:<32} {:<8} {:<24}",
        "ID", "NAME", "CODE", "INSTITUTION"
    );
    for f in rows {
        println!(
            "{:<6} {:<32} {:<8} {:<24}",
            f.id.to_string(),
            f.faculty_name,
            f.faculty_code,
            f.institution
        );
    }
}

pub fn departments(rows: &[&Department]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!("{:<6} {:<32} {:<8}", "ID", "NAME", "CODE");
    for d in rows {
        println!(
            "{:<6} {:<32} {:<8}",
            d.id.to_string(),
            d.dept_name,
            d.dept_code
        );
    }
}

pub fn programs(rows: &[&Program]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!(
        "{:<6} {:<36} {:<6} {:<24}",
        "ID", "NAME", "YEARS", "DEPARTMENT"
    );
    for p in rows {
        let dept = p
            .department
            .as_ref()
            .map(|d| d.dept_name.as_str())
            .unwrap_or("-");
        println!(
            "{:<6} {:<36} {:<6} {:<24}",
            p.id.to_string(),
            p.program_name,
            p.duration_years,
            dept
        );
    }
}

pub fn courses(rows: &[&Course]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!(
        "{:<6} {:<10} {:<32} {:<5} {:<9} {:<8} {:<8} {:<20}",
        "ID", "CODE", "TITLE", "UNIT", "STATUS", "LEVEL", "SEM", "DEPARTMENT"
    );
    for c in rows {
        let dept = c
            .department
            .as_ref()
            .map(|d| d.dept_name.as_str())
            .unwrap_or("-");
        println!(
            "{:<6} {:<10} {:<32} {:<5} {:<9} {:<8} {:<8} {:<20}",
            c.id.to_string(),
            c.course_code,
            c.course_title,
            c.credit_unit,
            c.status.to_string(),
            c.level,
            c.semester.to_string(),
            dept
        );
    }
}

pub fn sessions(rows: &[&AcademicSession]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!("{:<6} {:<14} {:<6} {:<8}", "ID", "INTAKE", "YEAR", "CURRENT");
    for s in rows {
        println!(
            "{:<6} {:<14} {:<6} {:<8}",
            s.id.to_string(),
            s.intake_session,
            s.intake_year,
            if s.is_current { "yes" } else { "no" }
        );
    }
}

pub fn credit_hours(rows: &[&CreditHourRule]) {
    if rows.is_empty() {
        println!("{}", NO_RECORDS);
        return;
    }
    println!(
        "{:<6} {:<14} {:<9} {:<5} {:<5}",
        "ID", "SESSION", "SEMESTER", "MIN", "MAX"
    );
    for r in rows {
        println!(
            "{:<6} {:<14} {:<9} {:<5} {:<5}",
            r.id.to_string(),
            r.session_name.as_deref().unwrap_or("-"),
            r.semester.to_string(),
            r.min_hours,
            r.max_hours
        );
    }
}

/// Renders the reconciliation outcome of a bulk import.
///
/// Always prints the four counters; the per-row section explicitly states
/// when there is nothing to report rather than printing an empty table.
pub fn upload_report(report: &UploadReport) {
    println!("Upload summary");
    println!("  processed: {}", report.processed);
    println!("  saved:     {}", report.saved);
    println!("  skipped:   {}", report.skipped);
    println!("  failed:    {}", report.failed);

    println!("\nRow issues");
    if report.errors.is_empty() {
        println!("  No errors or duplicates.");
    } else {
        for issue in &report.errors {
            println!("  row {:>4}: {}", issue.row_number, issue.message);
        }
    }
}
