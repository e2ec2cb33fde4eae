use calamine::Data;
use vessel_mapper_common::dates::{from_excel_serial, parse_date_text};
use vessel_mapper_common::CellValue;

/// Convert a calamine cell into a [`CellValue`].
///
/// Datetime cells become dates (1900 date system assumed); ISO datetime
/// strings are parsed, anything unparseable stays as text.
pub fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            match from_excel_serial(serial) {
                Some(value) => CellValue::DateTime(value),
                None => CellValue::Number(serial),
            }
        }
        Data::DateTimeIso(s) => match parse_date_text(s) {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
