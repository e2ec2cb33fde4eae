//! Vessel report → salesperson mapping pipeline
//!
//! ## Flow
//! 1. Check the master list layout and parse its first two columns into
//!    reference entries
//! 2. Select the required vessel columns, lowercasing the operator
//! 3. Parse ETA / last bunkering dates and keep the ETA window
//! 4. Keep allowed vessel types
//! 5. Match salesperson codes
//! 6. Drop repeated operators (first row wins)
//!
//! Every step runs over the whole table; any error aborts the run and no
//! partial result is returned.

use crate::dates::{cell_to_date, format_output_date};
use crate::error::{Error, Result};
use crate::layout;
use crate::matcher::{SalespersonMatcher, APPROACH, DEFAULT_MATCH_THRESHOLD};
use crate::types::{CellValue, ReferenceEntry, Table, VesselRecord};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default ETA window, in days from today (inclusive on both ends).
pub const DEFAULT_ETA_WINDOW_START_DAYS: i64 = 5;
pub const DEFAULT_ETA_WINDOW_END_DAYS: i64 = 12;

/// Vessel types kept by default. Compared case-sensitively.
pub const DEFAULT_ALLOWED_VESSEL_TYPES: [&str; 12] = [
    "Vehicles Carrier",
    "Products Tanker",
    "Ore Carrier",
    "General Cargo Ship (Open Hatch)",
    "General Cargo Ship",
    "Drilling Rig, jack up",
    "Crude/Oil Products Tanker",
    "Crude Oil Tanker",
    "Chemical/Products Tanker",
    "Chemical Tanker",
    "Bulk Carrier",
    "Aggregates Carrier",
];

/// Pipeline stage, reported through the progress callback once completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    VesselsLoaded,
    MasterListLoaded,
    ColumnsSelected,
    DatesFiltered,
    VesselTypesFiltered,
    CodesMatched,
    Deduplicated,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 7] = [
        PipelineStage::VesselsLoaded,
        PipelineStage::MasterListLoaded,
        PipelineStage::ColumnsSelected,
        PipelineStage::DatesFiltered,
        PipelineStage::VesselTypesFiltered,
        PipelineStage::CodesMatched,
        PipelineStage::Deduplicated,
    ];

    pub const TOTAL: usize = Self::ALL.len();

    /// 1-based position of the stage
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    pub fn description(self) -> &'static str {
        match self {
            PipelineStage::VesselsLoaded => "Vessel data loaded",
            PipelineStage::MasterListLoaded => "Master list loaded",
            PipelineStage::ColumnsSelected => "Columns selected",
            PipelineStage::DatesFiltered => "ETA window applied",
            PipelineStage::VesselTypesFiltered => "Vessel types filtered",
            PipelineStage::CodesMatched => "Salesperson codes matched",
            PipelineStage::Deduplicated => "Duplicate operators removed",
        }
    }
}

/// Run settings
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Calendar date the ETA window is anchored to
    pub today: NaiveDate,
    pub match_threshold_percent: f64,
    pub eta_window_start_days: i64,
    pub eta_window_end_days: i64,
    pub allowed_vessel_types: Vec<String>,
    /// Whether the first master list row is a header rather than data
    pub reference_has_header: bool,
    /// Name of the vessel source used in error messages
    pub vessel_source: String,
    /// Name of the master list source used in error messages
    pub reference_source: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
            match_threshold_percent: DEFAULT_MATCH_THRESHOLD,
            eta_window_start_days: DEFAULT_ETA_WINDOW_START_DAYS,
            eta_window_end_days: DEFAULT_ETA_WINDOW_END_DAYS,
            allowed_vessel_types: DEFAULT_ALLOWED_VESSEL_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reference_has_header: true,
            vessel_source: "vessel data".to_string(),
            reference_source: "master list".to_string(),
        }
    }
}

impl PipelineOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.match_threshold_percent) {
            return Err(Error::Config(format!(
                "match threshold must be between 0 and 100 (got {})",
                self.match_threshold_percent
            )));
        }
        if self.eta_window_start_days > self.eta_window_end_days {
            return Err(Error::Config(format!(
                "ETA window start ({} days) is after its end ({} days)",
                self.eta_window_start_days, self.eta_window_end_days
            )));
        }
        if self.allowed_vessel_types.is_empty() {
            return Err(Error::Config("allowed vessel type list is empty".into()));
        }
        Ok(())
    }

    /// Inclusive ETA window as calendar dates.
    pub fn eta_window(&self) -> Result<(NaiveDate, NaiveDate)> {
        let shift = |days: i64| {
            self.today
                .checked_add_signed(Duration::days(days))
                .ok_or_else(|| Error::Config(format!("ETA window offset out of range: {} days", days)))
        };
        Ok((shift(self.eta_window_start_days)?, shift(self.eta_window_end_days)?))
    }
}

/// Row counts collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub vessel_rows: usize,
    pub reference_entries: usize,
    /// Rows dropped for a missing or unreadable date
    pub invalid_dates: usize,
    pub outside_window: usize,
    pub excluded_types: usize,
    pub duplicates_removed: usize,
    /// Output rows that ended up as APPROACH
    pub unmatched: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub records: Vec<VesselRecord>,
    pub stats: PipelineStats,
}

/// Parse master list rows into reference entries.
///
/// Only the first two columns are read. When `has_header` is false the
/// table's header row is treated as the first entry. Rows with both cells
/// empty are skipped.
pub fn parse_reference(table: &Table, has_header: bool) -> Vec<ReferenceEntry> {
    let mut entries = Vec::with_capacity(table.len() + 1);

    if !has_header && !table.headers.is_empty() {
        let header_cell = |i: usize| {
            table
                .headers
                .get(i)
                .filter(|h| !h.is_empty())
                .cloned()
        };
        push_entry(&mut entries, header_cell(0), header_cell(1));
    }

    for row in 0..table.len() {
        push_entry(
            &mut entries,
            table.cell(row, 0).as_text(),
            table.cell(row, 1).as_text(),
        );
    }

    entries
}

/// Check the master list layout, then parse it.
///
/// The sheet must span at least two columns and yield at least one entry
/// with an operator name.
pub fn load_reference(table: &Table, has_header: bool, source: &str) -> Result<Vec<ReferenceEntry>> {
    let width = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);
    if width == 0 {
        return Err(Error::EmptySheet(source.to_string()));
    }
    if width < 2 {
        return Err(Error::schema(source, layout::SALESPERSON_CODE));
    }

    let entries = parse_reference(table, has_header);
    if !entries.iter().any(|e| e.operator.is_some()) {
        return Err(Error::EmptySheet(source.to_string()));
    }
    Ok(entries)
}

fn push_entry(entries: &mut Vec<ReferenceEntry>, operator: Option<String>, code: Option<String>) {
    if operator.is_none() && code.is_none() {
        return;
    }
    entries.push(ReferenceEntry {
        operator: operator.map(|s| s.to_lowercase()),
        salesperson_code: code,
    });
}

/// Vessel row restricted to the required columns, dates still unparsed.
#[derive(Debug, Clone)]
struct SelectedRow {
    eta: CellValue,
    vessel_name: String,
    vessel_type: String,
    vessel_imo: String,
    operator: Option<String>,
    group_owner: String,
    registered_owner: String,
    last_bunkering_start_date: CellValue,
    last_bunkering_location: String,
}

/// Select the required columns; any missing column is a schema error.
fn select_columns(table: &Table, source: &str) -> Result<Vec<SelectedRow>> {
    let mut indices = [0usize; layout::REQUIRED_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(layout::REQUIRED_COLUMNS) {
        *slot = table
            .column_index(column)
            .ok_or_else(|| Error::schema(source, column))?;
    }
    let [eta, name, vessel_type, imo, operator, group, registered, bunker_date, bunker_loc] =
        indices;

    let text = |row: usize, col: usize| table.cell(row, col).as_text().unwrap_or_default();

    Ok((0..table.len())
        .map(|row| SelectedRow {
            eta: table.cell(row, eta).clone(),
            vessel_name: text(row, name),
            vessel_type: text(row, vessel_type),
            vessel_imo: text(row, imo),
            operator: table.cell(row, operator).as_text().map(|s| s.to_lowercase()),
            group_owner: text(row, group),
            registered_owner: text(row, registered),
            last_bunkering_start_date: table.cell(row, bunker_date).clone(),
            last_bunkering_location: text(row, bunker_loc),
        })
        .collect())
}

enum DateCheck {
    Keep(VesselRecord),
    InvalidDate,
    OutsideWindow,
}

/// Parse both dates of a row and test the ETA against the window.
fn check_dates(row: SelectedRow, window: (NaiveDate, NaiveDate)) -> DateCheck {
    let eta = match cell_to_date(&row.eta) {
        Ok(Some(date)) => date,
        Ok(None) | Err(_) => return DateCheck::InvalidDate,
    };
    let last_bunkering = match cell_to_date(&row.last_bunkering_start_date) {
        Ok(date) => date,
        Err(_) => return DateCheck::InvalidDate,
    };

    if eta < window.0 || eta > window.1 {
        return DateCheck::OutsideWindow;
    }

    DateCheck::Keep(VesselRecord {
        eta: format_output_date(eta),
        vessel_name: row.vessel_name,
        vessel_type: row.vessel_type,
        vessel_imo: row.vessel_imo,
        operator: row.operator,
        group_owner: row.group_owner,
        registered_owner: row.registered_owner,
        last_bunkering_start_date: last_bunkering.map(format_output_date).unwrap_or_default(),
        last_bunkering_location: row.last_bunkering_location,
        salesperson_code: String::new(),
    })
}

/// Run the pipeline over already loaded sheets.
///
/// `progress` is called after each stage from [`PipelineStage::ColumnsSelected`]
/// onward; loading stages are reported by the caller.
pub fn run(
    vessels: &Table,
    reference: &Table,
    options: &PipelineOptions,
    progress: &mut dyn FnMut(PipelineStage),
) -> Result<PipelineOutput> {
    options.validate()?;
    let window = options.eta_window()?;

    let entries = load_reference(reference, options.reference_has_header, &options.reference_source)?;
    let mut stats = PipelineStats {
        vessel_rows: vessels.len(),
        reference_entries: entries.len(),
        ..Default::default()
    };

    let selected = select_columns(vessels, &options.vessel_source)?;
    progress(PipelineStage::ColumnsSelected);

    let mut records = Vec::with_capacity(selected.len());
    for row in selected {
        match check_dates(row, window) {
            DateCheck::Keep(record) => records.push(record),
            DateCheck::InvalidDate => stats.invalid_dates += 1,
            DateCheck::OutsideWindow => stats.outside_window += 1,
        }
    }
    progress(PipelineStage::DatesFiltered);

    let allowed: HashSet<&str> = options
        .allowed_vessel_types
        .iter()
        .map(String::as_str)
        .collect();
    let before = records.len();
    records.retain(|r| allowed.contains(r.vessel_type.as_str()));
    stats.excluded_types = before - records.len();
    progress(PipelineStage::VesselTypesFiltered);

    let matcher = SalespersonMatcher::new(entries, options.match_threshold_percent);
    for record in &mut records {
        record.salesperson_code = matcher.match_operator(record.operator.as_deref());
    }
    progress(PipelineStage::CodesMatched);

    let before = records.len();
    let records = deduplicate_operators(records);
    stats.duplicates_removed = before - records.len();
    stats.unmatched = records
        .iter()
        .filter(|r| r.salesperson_code == APPROACH)
        .count();
    progress(PipelineStage::Deduplicated);

    Ok(PipelineOutput { records, stats })
}

/// Keep the first record per operator; a missing operator is one key.
pub fn deduplicate_operators(records: Vec<VesselRecord>) -> Vec<VesselRecord> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.operator.clone()))
        .collect()
}
