//! End-to-end mapping runs over real workbooks

mod support;

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;
use support::{in_days, today, write_master, write_vessels};
use tempfile::tempdir;
use vessel_mapper::config::Config;
use vessel_mapper::runner::{self, RunRequest};
use vessel_mapper::reader;
use vessel_mapper_common::{PipelineStage, PipelineStats, APPROACH};

fn read_output(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open output");
    let range = workbook.worksheet_range("Sheet1").expect("Sheet1 missing");
    range.rows().map(|r| r.to_vec()).collect()
}

fn text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[test]
fn test_full_run() {
    let dir = tempdir().expect("Failed to create temp dir");
    let vessel_path = dir.path().join("vessels.xlsx");
    let master_path = dir.path().join("master.xlsx");
    let output_path = dir.path().join("out").join("Filtered_Vessel_Data.xlsx");
    write_vessels(&vessel_path, &support::standard_vessels());
    write_master(&master_path);

    let request = RunRequest {
        vessel_path: &vessel_path,
        master_path: &master_path,
        output_path: &output_path,
        today: today(),
    };
    let mut stages = Vec::new();
    let output = runner::run_files(&request, &Config::default(), &mut |s| stages.push(s)).unwrap();

    assert_eq!(stages, PipelineStage::ALL.to_vec());

    let names: Vec<&str> = output.records.iter().map(|r| r.vessel_name.as_str()).collect();
    assert_eq!(names, vec!["Star Ocean", "Blue Wave", "Nameless", "Pacific Jade"]);

    let codes: Vec<&str> = output
        .records
        .iter()
        .map(|r| r.salesperson_code.as_str())
        .collect();
    assert_eq!(codes, vec!["MSK01", "204", APPROACH, "PBS03/PBS09"]);

    let stats = &output.stats;
    assert_eq!(stats.vessel_rows, 8);
    assert_eq!(stats.reference_entries, 6);
    assert_eq!(stats.invalid_dates, 1);
    assert_eq!(stats.outside_window, 1);
    assert_eq!(stats.excluded_types, 1);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.unmatched, 1);

    let summary_path = dir.path().join("out").join("summary.json");
    runner::write_summary(stats, &summary_path).unwrap();
    let content = std::fs::read_to_string(&summary_path).unwrap();
    assert!(content.contains("\"invalidDates\": 1"));
    let reloaded: PipelineStats = serde_json::from_str(&content).unwrap();
    assert_eq!(&reloaded, stats);

    let rows = read_output(&output_path);
    assert_eq!(rows.len(), 5);
    assert_eq!(text(&rows[0][0]), "ETA");
    assert_eq!(text(&rows[0][9]), "Salesperson Code");

    assert_eq!(text(&rows[1][0]), "24/10/26");
    assert_eq!(text(&rows[1][1]), "Star Ocean");
    assert_eq!(rows[1][3], Data::Float(9312345.0));
    assert_eq!(text(&rows[1][4]), "maersk line a/s");
    assert_eq!(text(&rows[1][7]), "01/09/26");
    assert_eq!(text(&rows[1][9]), "MSK01");

    // bare serial number date
    assert_eq!(text(&rows[2][0]), "31/10/26");
    assert_eq!(text(&rows[3][9]), APPROACH);
    assert_eq!(text(&rows[4][9]), "PBS03/PBS09");
}

#[test]
fn test_window_boundaries_inclusive() {
    let dir = tempdir().expect("Failed to create temp dir");
    let vessel_path = dir.path().join("vessels.xlsx");
    let master_path = dir.path().join("master.xlsx");
    let output_path = dir.path().join("out.xlsx");

    write_vessels(
        &vessel_path,
        &[
            support::vessel(in_days(4).into(), "Too Early", "Bulk Carrier", 1.0, "a".into()),
            support::vessel(in_days(5).into(), "First Day", "Bulk Carrier", 2.0, "b".into()),
            support::vessel(in_days(12).into(), "Last Day", "Bulk Carrier", 3.0, "c".into()),
            support::vessel(in_days(13).into(), "Too Late", "Bulk Carrier", 4.0, "d".into()),
        ],
    );
    write_master(&master_path);

    let request = RunRequest {
        vessel_path: &vessel_path,
        master_path: &master_path,
        output_path: &output_path,
        today: today(),
    };
    let output = runner::run_files(&request, &Config::default(), &mut |_| {}).unwrap();

    let names: Vec<&str> = output.records.iter().map(|r| r.vessel_name.as_str()).collect();
    assert_eq!(names, vec!["First Day", "Last Day"]);
    assert_eq!(output.stats.outside_window, 2);
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let vessel_path = dir.path().join("vessels.xlsx");
    let master_path = dir.path().join("master.xlsx");
    let output_path = dir.path().join("out.xlsx");

    support::write_workbook(
        &vessel_path,
        "report",
        &["ETA", "Vessel Name", "Vessel Type"],
        &[vec![in_days(6).into(), "Star Ocean".into(), "Bulk Carrier".into()]],
    );
    write_master(&master_path);

    let request = RunRequest {
        vessel_path: &vessel_path,
        master_path: &master_path,
        output_path: &output_path,
        today: today(),
    };
    let err = runner::run_files(&request, &Config::default(), &mut |_| {}).unwrap_err();

    assert!(err.to_string().contains("Vessel IMO"));
    assert!(!output_path.exists());
}

#[test]
fn test_custom_sheet_names_and_threshold() {
    let dir = tempdir().expect("Failed to create temp dir");
    let vessel_path = dir.path().join("vessels.xlsx");
    let master_path = dir.path().join("master.xlsx");
    let output_path = dir.path().join("out.xlsx");

    support::write_workbook(
        &vessel_path,
        "arrivals",
        &vessel_mapper_common::layout::REQUIRED_COLUMNS,
        &[support::vessel(
            in_days(7).into(),
            "Half Match",
            "Chemical Tanker",
            5.0,
            "Maersk Tankers".into(),
        )],
    );
    write_master(&master_path);

    let config = Config {
        vessel_sheet: "arrivals".into(),
        ..Default::default()
    };
    let request = RunRequest {
        vessel_path: &vessel_path,
        master_path: &master_path,
        output_path: &output_path,
        today: today(),
    };
    let output = runner::run_files(&request, &config, &mut |_| {}).unwrap();
    assert_eq!(output.records[0].salesperson_code, APPROACH);

    let config = Config {
        match_threshold_percent: 50.0,
        ..config
    };
    let output = runner::run_files(&request, &config, &mut |_| {}).unwrap();
    assert_eq!(output.records[0].salesperson_code, "MSK01");
}

#[test]
fn test_load_matcher() {
    let dir = tempdir().expect("Failed to create temp dir");
    let master_path = dir.path().join("master.xlsx");
    write_master(&master_path);

    let config = Config::default();
    let matcher = runner::load_matcher(&master_path, &config, 90.0).unwrap();
    assert_eq!(matcher.entries().len(), 6);
    assert_eq!(matcher.scorable_entries(), 4);
    assert_eq!(matcher.match_operator(Some("evergreen marine corp")), "204");
    assert_eq!(matcher.match_operator(Some("unknown shipping")), APPROACH);

    // header row read as data
    let config = Config {
        reference_has_header: false,
        ..Default::default()
    };
    let matcher = runner::load_matcher(&master_path, &config, 90.0).unwrap();
    assert_eq!(matcher.entries().len(), 7);
    assert_eq!(matcher.match_operator(Some("operator")), "Code");
}

#[test]
fn test_read_sheet_types() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("vessels.xlsx");
    write_vessels(&path, &support::standard_vessels());

    let table = reader::read_sheet(&path, "report").unwrap();
    assert_eq!(table.len(), 8);
    assert_eq!(table.column_index("Operator"), Some(4));

    use vessel_mapper_common::CellValue;
    assert!(matches!(table.cell(0, 0), CellValue::DateTime(_)));
    assert!(matches!(table.cell(1, 0), CellValue::Number(_)));
    assert_eq!(table.cell(3, 0), &CellValue::from("2026-10-26"));
    assert!(table.cell(5, 4).is_empty());
}
