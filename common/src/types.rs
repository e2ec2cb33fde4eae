//! Shared data types
//!
//! - CellValue / Table: raw sheet contents as loaded by the reader
//! - ReferenceEntry: one row of the salesperson master list
//! - VesselRecord: one output row of the pipeline

use chrono::NaiveDateTime;

/// A single spreadsheet cell, independent of the workbook library.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text rendering of the cell, `None` for a missing value.
    ///
    /// Whole numbers drop their fractional part so that a code stored as
    /// `101.0` reads back as `"101"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Contents of one sheet: the first sheet row becomes `headers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table whose first row is the header row.
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows
            .remove(0)
            .iter()
            .map(|c| c.as_text().unwrap_or_default())
            .collect();
        Self { headers, rows }
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `(row, col)`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One master list row: (operator name, salesperson code).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub operator: Option<String>,
    pub salesperson_code: Option<String>,
}

impl ReferenceEntry {
    pub fn new(operator: &str, salesperson_code: &str) -> Self {
        Self {
            operator: Some(operator.to_string()),
            salesperson_code: Some(salesperson_code.to_string()),
        }
    }
}

/// Pipeline output row. Dates are already rendered as `DD/MM/YY`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselRecord {
    pub eta: String,
    pub vessel_name: String,
    pub vessel_type: String,
    pub vessel_imo: String,
    /// Lowercased operator name; `None` when the cell was empty
    pub operator: Option<String>,
    pub group_owner: String,
    pub registered_owner: String,
    pub last_bunkering_start_date: String,
    pub last_bunkering_location: String,
    pub salesperson_code: String,
}
