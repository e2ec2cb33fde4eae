//! Date cell parsing and formatting
//!
//! Workbooks deliver dates as real datetime cells, as bare Excel serial
//! numbers, or as text. All three resolve to a calendar date; the time of day
//! is dropped before any window comparison.

use crate::error::{Error, Result};
use crate::types::CellValue;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Output format for dates (`05/03/26`).
pub const OUTPUT_DATE_FORMAT: &str = "%d/%m/%y";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// slash dates are month first
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Convert an Excel serial number (1900 date system) to a datetime.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    // exact from serial 61 (1900-03-01) onward, Excel counts a phantom 1900-02-29
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}

/// Parse a text date in one of the accepted formats.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Calendar date of a cell.
///
/// `Ok(None)` for an empty cell, `Err` for a value that is present but not a
/// date.
pub fn cell_to_date(cell: &CellValue) -> Result<Option<NaiveDate>> {
    let parsed = match cell {
        CellValue::Empty => return Ok(None),
        CellValue::Text(s) if s.trim().is_empty() => return Ok(None),
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Number(n) => from_excel_serial(*n),
        CellValue::Text(s) => parse_date_text(s),
        CellValue::Bool(_) => None,
    };

    parsed
        .map(|dt| Some(dt.date()))
        .ok_or_else(|| Error::InvalidDate(cell.as_text().unwrap_or_default()))
}

/// Render a date as `DD/MM/YY`.
pub fn format_output_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}
