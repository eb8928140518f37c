//! Read uploaded workbook bytes into rows of text cells.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::ApiError;

/// Read every row of the first worksheet as text cells.
///
/// Cells are rendered in their display form; empty cells become empty
/// strings. The range is rectangular, so every row carries the full sheet
/// width. Sheets beyond the first are ignored.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, ApiError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ApiError::Parse(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ApiError::Parse("workbook has no worksheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
