//! Excel generation (shared library)
//!
//! Writes pipeline records to a single-sheet workbook using the column
//! layout in `layout.rs`.

use crate::layout::OUTPUT_COLUMNS;
use crate::types::VesselRecord;
use rust_xlsxwriter::*;

/// Sheet name of the generated workbook.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Values of one record in output column order.
fn record_values(record: &VesselRecord) -> [&str; 10] {
    [
        &record.eta,
        &record.vessel_name,
        &record.vessel_type,
        &record.vessel_imo,
        record.operator.as_deref().unwrap_or(""),
        &record.group_owner,
        &record.registered_owner,
        &record.last_bunkering_start_date,
        &record.last_bunkering_location,
        &record.salesperson_code,
    ]
}

/// Columns written as numbers when the value is all digits (IMO).
const NUMERIC_COLUMNS: [usize; 1] = [3];

/// Plain digit strings only; `1e5`, `inf` or `-3` stay text.
fn digits_as_number(value: &str) -> Option<f64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Build the output workbook in memory.
///
/// # Arguments
/// * `records` - pipeline output, written in order below a header row
/// * `sheet_name` - worksheet name
pub fn generate_excel_buffer(records: &[VesselRecord], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("sheet name error: {}", e))?;

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, column) in OUTPUT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, column.width)
            .map_err(|e| format!("column width error: {}", e))?;
        worksheet
            .write_string_with_format(0, col, column.header, &header_format)
            .map_err(|e| format!("header write error: {}", e))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record_values(record).iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let numeric = NUMERIC_COLUMNS
                .contains(&col)
                .then(|| digits_as_number(value))
                .flatten();
            let written = match numeric {
                Some(n) => worksheet.write_number(row, col as u16, n).map(|_| ()),
                None => worksheet.write_string(row, col as u16, *value).map(|_| ()),
            };
            written.map_err(|e| format!("cell write error (row {}): {}", row, e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("freeze pane error: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel save error: {}", e))
}
