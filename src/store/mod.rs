//! SQLite access: pool setup, embedded migrations, and the repository.

pub mod locations;

pub use locations::{NewStoreLocation, StoreLocation};

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a pool against `url` and bring the schema up to date.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let pool = SqlitePool::connect(url)
        .await
        .with_context(|| format!("Failed to open database {url}"))?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
