use crate::errors::{AppError, AppResult};
use crate::models::DataTable;
use csv::ReaderBuilder;
use std::path::Path;

/// Reads a delimited file whose first record is the header row.
///
/// Short rows are padded with empty cells; a row with more fields than the
/// header is rejected.
pub(super) fn read_csv(path: &Path) -> AppResult<DataTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if let Some(first) = headers.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(AppError::RowTooWide {
                row: i + 1,
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(DataTable::new(headers, rows))
}
