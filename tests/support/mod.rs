//! Fixture workbooks for the integration tests

#![allow(dead_code)]

use chrono::{Datelike, Duration, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;
use vessel_mapper_common::layout::REQUIRED_COLUMNS;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn in_days(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// Excel serial number of a date (1900 system).
pub fn serial(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (date - epoch).num_days() as f64
}

/// A fixture cell
#[derive(Debug, Clone)]
pub enum Cell {
    Blank,
    Text(&'static str),
    Number(f64),
    Date(NaiveDate),
}

impl From<&'static str> for Cell {
    fn from(s: &'static str) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        Cell::Date(d)
    }
}

/// Write one sheet with a header row and data rows.
pub fn write_workbook(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Cell::Date(d) => {
                    let dt = ExcelDateTime::from_ymd(d.year() as u16, d.month() as u8, d.day() as u8)
                        .unwrap();
                    worksheet.write_datetime_with_format(r, c, &dt, &date_format).unwrap();
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// A vessel report row in `REQUIRED_COLUMNS` order.
pub fn vessel(eta: Cell, name: &'static str, vessel_type: &'static str, imo: f64, operator: Cell) -> Vec<Cell> {
    vec![
        eta,
        name.into(),
        vessel_type.into(),
        imo.into(),
        operator,
        "Star Group".into(),
        "Star Holdings".into(),
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap().into(),
        "Colombo".into(),
    ]
}

pub fn write_vessels(path: &Path, rows: &[Vec<Cell>]) {
    write_workbook(path, "report", &REQUIRED_COLUMNS, rows);
}

pub fn write_master(path: &Path) {
    write_workbook(
        path,
        "master list",
        &["Operator", "Code"],
        &[
            vec!["Maersk Line".into(), "MSK01".into()],
            vec!["Evergreen Marine".into(), 204.0.into()],
            vec!["Pacific Basin".into(), "PBS03".into()],
            vec!["Pacific Basin Shipping".into(), "PBS09".into()],
            vec![Cell::Blank, "ORPHAN".into()],
            vec!["-".into(), "DASH".into()],
        ],
    );
}

/// The standard vessel report used by the end-to-end tests.
pub fn standard_vessels() -> Vec<Vec<Cell>> {
    vec![
        vessel(in_days(5).into(), "Star Ocean", "Bulk Carrier", 9312345.0, "Maersk Line A/S".into()),
        vessel(
            serial(in_days(12)).into(),
            "Blue Wave",
            "Chemical Tanker",
            9400001.0,
            "Evergreen Marine Corporation".into(),
        ),
        vessel(in_days(4).into(), "Early Bird", "Bulk Carrier", 9400002.0, "Early Lines".into()),
        vessel("2026-10-26".into(), "Sun Rise", "Passenger Ship", 9400003.0, "Sun Cruises".into()),
        vessel(in_days(8).into(), "Second Star", "Bulk Carrier", 9400004.0, "MAERSK LINE A/S".into()),
        vessel(in_days(9).into(), "Nameless", "Ore Carrier", 9400005.0, Cell::Blank),
        vessel("TBA".into(), "Unknown Eta", "Bulk Carrier", 9400006.0, "Mystery Shipping".into()),
        vessel(
            in_days(10).into(),
            "Pacific Jade",
            "Products Tanker",
            9400007.0,
            "Pacific Basin Shipping Ltd".into(),
        ),
    ]
}
