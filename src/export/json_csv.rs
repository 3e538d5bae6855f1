use crate::errors::{AppError, AppResult};
use crate::export::model::{EntryExport, entry_to_row, get_headers};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for e in entries {
        wtr.write_record(entry_to_row(e))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}
