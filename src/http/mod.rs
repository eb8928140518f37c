//! HTTP surface: router construction and the two handlers.
//!
//! The handlers only extract the upload and shape responses; all business
//! logic lives in the import and export processors, which take the pool as
//! an argument.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::header::{self, HeaderName};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::{export, import};

pub const EXPORT_FILE_NAME: &str = "store_locations_export.xlsx";

/// Uploads beyond this size are rejected by the multipart extractor (20MB).
const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn build_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/api/import", post(import_handler))
        .route("/api/export", get(export_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .with_state(AppState { pool })
}

#[derive(Debug, Serialize)]
struct ImportResponse {
    message: &'static str,
    imported: usize,
}

async fn import_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut file: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            file = Some(field.bytes().await?.to_vec());
            break;
        }
    }
    let bytes = file.ok_or(ApiError::MissingFile)?;

    let imported = import::import_workbook(&state.pool, &bytes).await?;
    log::info!("imported {imported} store locations");

    Ok(Json(ImportResponse {
        message: "Data imported successfully",
        imported,
    }))
}

async fn export_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bytes = export::export_workbook(&state.pool).await?;
    log::info!("exported {} bytes of store locations", bytes.len());

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={EXPORT_FILE_NAME}"),
        ),
        (
            HeaderName::from_static("content-transfer-encoding"),
            "binary".to_string(),
        ),
    ];

    Ok((headers, bytes))
}
