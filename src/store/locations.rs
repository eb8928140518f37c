//! Repository for the store_locations table.

use sqlx::{SqliteConnection, SqlitePool};

/// One persisted store location. `id` is assigned by the database and never
/// supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoreLocation {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub city: String,
    pub operation_hour: String,
}

/// Field values of a location before it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStoreLocation {
    pub code: String,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub city: String,
    pub operation_hour: String,
}

impl NewStoreLocation {
    /// Positional mapping of a data row: code, name, latitude, longitude,
    /// address, city, operation_hour. Callers must have checked the cell
    /// count first.
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            code: cells[0].clone(),
            name: cells[1].clone(),
            latitude: cells[2].clone(),
            longitude: cells[3].clone(),
            address: cells[4].clone(),
            city: cells[5].clone(),
            operation_hour: cells[6].clone(),
        }
    }
}

/// Look up a location by business key. Returns `None` when no row matches,
/// so a stored id of 0 still counts as found.
pub async fn find_by_code(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<Option<StoreLocation>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, code, name, latitude, longitude, address, city, operation_hour
         FROM store_locations WHERE code = ?",
    )
    .bind(code)
    .fetch_optional(conn)
    .await
}

pub async fn insert(
    conn: &mut SqliteConnection,
    location: &NewStoreLocation,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO store_locations (code, name, latitude, longitude, address, city, operation_hour)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&location.code)
    .bind(&location.name)
    .bind(&location.latitude)
    .bind(&location.longitude)
    .bind(&location.address)
    .bind(&location.city)
    .bind(&location.operation_hour)
    .execute(conn)
    .await?;

    Ok(())
}

/// All persisted locations in store default order.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<StoreLocation>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, code, name, latitude, longitude, address, city, operation_hour
         FROM store_locations",
    )
    .fetch_all(pool)
    .await
}
