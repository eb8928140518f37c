//! Transactional import of store locations from an uploaded workbook.

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::excel;
use crate::store::{self, NewStoreLocation};

/// Columns a data row must carry.
const EXPECTED_COLUMNS: usize = 7;

/// Import every data row of the workbook's first sheet inside one
/// transaction, returning the number of inserted records.
///
/// Row 1 is treated as a header and never validated. Any invalid row aborts
/// the whole batch: the error propagates, the transaction is dropped, and
/// sqlx rolls it back, so a failed import leaves no trace. A failed commit
/// surfaces as a database error with no further recovery.
pub async fn import_workbook(pool: &SqlitePool, bytes: &[u8]) -> Result<usize, ApiError> {
    let rows = excel::reader::read_rows(bytes)?;

    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (index, cells) in rows.iter().enumerate().skip(1) {
        // 1-based position as the row appears in the source file
        let row = index + 1;

        if cells.iter().any(|cell| cell.is_empty()) {
            return Err(ApiError::EmptyField { row });
        }
        if cells.len() < EXPECTED_COLUMNS {
            return Err(ApiError::ShortRow {
                row,
                found: cells.len(),
                expected: EXPECTED_COLUMNS,
            });
        }

        let location = NewStoreLocation::from_cells(cells);
        if store::locations::find_by_code(&mut tx, &location.code)
            .await?
            .is_some()
        {
            return Err(ApiError::DuplicateCode(location.code));
        }

        store::locations::insert(&mut tx, &location).await?;
        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}
