//! Spreadsheet codec: calamine for reading uploads, rust_xlsxwriter for
//! building exports.

pub mod reader;
pub mod writer;

/// Column headers of the export sheet, in output order. Imported files are
/// mapped positionally to the same order; header names are never inspected.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Code",
    "Name",
    "Latitude",
    "Longitude",
    "Address",
    "City",
    "Operation Hour",
];
