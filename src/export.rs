//! Export of all persisted store locations as a workbook.

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::excel;
use crate::store;

/// Serialize every persisted location into xlsx bytes: the fixed header row,
/// then the records in store iteration order. Nothing is returned on error.
pub async fn export_workbook(pool: &SqlitePool) -> Result<Vec<u8>, ApiError> {
    let locations = store::locations::list_all(pool).await?;
    let bytes = excel::writer::write_locations(&locations)?;
    Ok(bytes)
}
