//! Request-path error type and its HTTP mapping.
//!
//! Every failure a handler can hit is one [`ApiError`] variant; the
//! `IntoResponse` impl turns it into a JSON `{"error": ...}` body with the
//! matching status code.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Upload without a `file` form field (400)
    #[error("No file field named 'file' in the upload")]
    MissingFile,

    /// Malformed multipart body (400)
    #[error("Failed to read uploaded file: {0}")]
    Multipart(#[from] MultipartError),

    /// Bytes that are not a readable workbook (400)
    #[error("Uploaded file is not a valid spreadsheet: {0}")]
    Parse(String),

    /// Empty cell in a data row; `row` is the 1-based position in the file (400)
    #[error("There is an empty field on row {row}")]
    EmptyField { row: usize },

    /// Data row with too few columns (400)
    #[error("Row {row} has {found} columns, expected {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Business-key collision (409)
    #[error("Data with code {0} already exists")]
    DuplicateCode(String),

    /// Any database failure, including a failed commit (500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// xlsx serialization failure during export (500)
    #[error("Failed to build spreadsheet: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile
            | Self::Multipart(_)
            | Self::Parse(_)
            | Self::EmptyField { .. }
            | Self::ShortRow { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateCode(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Workbook(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {self}");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_client_errors() {
        assert_eq!(ApiError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Parse("bad zip".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::EmptyField { row: 4 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ShortRow {
                row: 2,
                found: 5,
                expected: 7
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let err = ApiError::DuplicateCode("S1".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Data with code S1 already exists");
    }

    #[test]
    fn storage_failures_are_server_errors() {
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn empty_field_names_the_source_row() {
        assert_eq!(
            ApiError::EmptyField { row: 3 }.to_string(),
            "There is an empty field on row 3"
        );
    }
}
