//! Build the export workbook.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::excel::EXPORT_HEADERS;
use crate::store::StoreLocation;

/// Serialize locations into a one-sheet workbook: the fixed header row
/// first, then one row per record in the order given. The database id is
/// not written. Returns the xlsx bytes.
pub fn write_locations(locations: &[StoreLocation]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (idx, location) in locations.iter().enumerate() {
        let row = (idx + 1) as u32;
        let cells = [
            &location.code,
            &location.name,
            &location.latitude,
            &location.longitude,
            &location.address,
            &location.city,
            &location.operation_hour,
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(row, col as u16, value.as_str())?;
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::reader::read_rows;

    fn location(id: i64, code: &str) -> StoreLocation {
        StoreLocation {
            id,
            code: code.to_string(),
            name: format!("Store {code}"),
            latitude: "-6.2088".to_string(),
            longitude: "106.8456".to_string(),
            address: "1 Example Road".to_string(),
            city: "Jakarta".to_string(),
            operation_hour: "09:00-21:00".to_string(),
        }
    }

    #[test]
    fn empty_store_yields_header_only() {
        let bytes = write_locations(&[]).unwrap();
        let rows = read_rows(&bytes).unwrap();
        assert_eq!(rows, vec![EXPORT_HEADERS.map(String::from).to_vec()]);
    }

    #[test]
    fn records_follow_the_header_without_ids() {
        let bytes = write_locations(&[location(1, "S1"), location(2, "S2")]).unwrap();
        let rows = read_rows(&bytes).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "S1");
        assert_eq!(rows[2][0], "S2");
        // 7 field columns, no id anywhere
        assert_eq!(rows[1].len(), 7);
        assert!(!rows[1].contains(&"1".to_string()));
    }
}
