mod cell;

pub use cell::to_cell_value;

use crate::error::{Result, VesselMapError};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use vessel_mapper_common::{CellValue, Table};

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether a path has a spreadsheet extension (case-insensitive).
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SPREADSHEET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Sheet names of a workbook, in workbook order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(VesselMapError::FileNotFound(path.display().to_string()));
    }
    let workbook = open_workbook_auto(path).map_err(|e| VesselMapError::ExcelRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(workbook.sheet_names().to_vec())
}

/// Load one sheet as a [`Table`], first row as headers.
///
/// Columns left of the used range are padded with empty cells so that
/// column positions match the sheet. Completely empty rows are skipped.
pub fn read_sheet(path: &Path, sheet_name: &str) -> Result<Table> {
    if !path.exists() {
        return Err(VesselMapError::FileNotFound(path.display().to_string()));
    }

    let read_error = |message: String| VesselMapError::ExcelRead {
        path: path.display().to_string(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(e.to_string()))?;

    let names = workbook.sheet_names().to_vec();
    if !names.iter().any(|n| n == sheet_name) {
        return Err(VesselMapError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet_name.to_string(),
            available: names.join(", "),
        });
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| read_error(format!("sheet '{}': {}", sheet_name, e)))?;

    let (_, start_col) = range.start().unwrap_or((0, 0));
    let padding = start_col as usize;

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| {
            std::iter::repeat(CellValue::Empty)
                .take(padding)
                .chain(row.iter().map(to_cell_value))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(Table::from_rows(rows))
}
