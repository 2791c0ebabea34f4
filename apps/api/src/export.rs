//! Spreadsheet export: one fixed-layout sheet per batch.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use uuid::Uuid;

use crate::extraction::record::CvRecord;

const SHEET_NAME: &str = "CV Data";
const HEADERS: [&str; 3] = ["Text", "Email", "Phone Numbers"];

/// A failed export is fatal for the whole request; there is no partial
/// export and no retry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet write failed: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Serializes the batch into `<out_dir>/extracted_data_<uuid>.xlsx` and
/// returns the path.
///
/// Layout: one header row, then one row per record with the summary text and
/// the `", "`-joined email and phone lists. The request-scoped filename keeps
/// concurrent requests from overwriting each other's output.
pub fn export(records: &[CvRecord], out_dir: &Path) -> Result<PathBuf, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, &record.summary)?;
        sheet.write_string(row, 1, record.emails.join(", "))?;
        sheet.write_string(row, 2, record.phones.join(", "))?;
    }

    let path = out_dir.join(format!("extracted_data_{}.xlsx", Uuid::new_v4()));
    workbook.save(&path)?;

    Ok(path)
}
