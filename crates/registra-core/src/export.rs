//! CSV and XLSX export of table rows.
//!
//! Exports operate on whatever the caller is currently looking at, which is
//! usually the *filtered* collection rather than the full one. Rows are
//! flattened through `serde_json`: scalar fields become cells, nested
//! objects and arrays are rendered as compact JSON so nothing is silently
//! dropped. Column order follows the flattened field names.

use std::path::Path;

use anyhow::{Context, anyhow};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use umya_spreadsheet::helper::coordinate::coordinate_from_index;

use crate::errors::AppError;

fn flatten_rows<T: Serialize>(rows: &[T]) -> Result<Vec<serde_json::Map<String, Value>>, AppError> {
    rows.iter()
        .map(|row| {
            let value = serde_json::to_value(row)
                .context("failed to serialize row for export")
                .map_err(AppError::validation)?;
            match value {
                Value::Object(map) => Ok(map),
                other => Err(AppError::validation(anyhow!(
                    "export rows must serialize to objects, got {}",
                    other
                ))),
            }
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

/// Writes `rows` to `path` as CSV.
///
/// An empty collection produces an empty file with no header row, matching
/// the "export whatever is visible" contract even when nothing is visible.
pub fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> Result<(), AppError> {
    let flat = flatten_rows(rows)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))
        .map_err(AppError::transport)?;

    if let Some(first) = flat.first() {
        let headers: Vec<&String> = first.keys().collect();
        writer
            .write_record(headers.iter().map(|h| h.as_str()))
            .context("failed to write CSV header")
            .map_err(AppError::transport)?;

        for row in &flat {
            let record: Vec<String> = headers
                .iter()
                .map(|h| row.get(*h).map(cell_text).unwrap_or_default())
                .collect();
            writer
                .write_record(&record)
                .context("failed to write CSV row")
                .map_err(AppError::transport)?;
        }
    }

    writer
        .flush()
        .context("failed to flush CSV output")
        .map_err(AppError::transport)?;

    info!(path = %path.display(), rows = rows.len(), "exported CSV");
    Ok(())
}

/// Writes `rows` to `path` as an XLSX workbook with a single sheet.
pub fn export_xlsx<T: Serialize>(rows: &[T], path: &Path) -> Result<(), AppError> {
    let flat = flatten_rows(rows)?;

    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_by_name_mut("Sheet1")
        .map_err(|_| AppError::transport(anyhow!("workbook is missing its default sheet")))?;

    if let Some(first) = flat.first() {
        let headers: Vec<&String> = first.keys().collect();
        for (col, header) in headers.iter().enumerate() {
            sheet
                .get_cell_mut(coordinate_from_index(&(col as u32 + 1), &1u32))
                .set_value(header.as_str());
        }
        for (row_idx, row) in flat.iter().enumerate() {
            for (col, header) in headers.iter().enumerate() {
                let text = row.get(*header).map(cell_text).unwrap_or_default();
                sheet
                    .get_cell_mut(coordinate_from_index(
                        &(col as u32 + 1),
                        &(row_idx as u32 + 2),
                    ))
                    .set_value(text);
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| {
            AppError::transport(anyhow!("failed to write workbook to {}: {e:?}", path.display()))
        })?;

    info!(path = %path.display(), rows = rows.len(), "exported XLSX");
    Ok(())
}
