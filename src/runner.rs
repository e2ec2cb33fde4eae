//! File-level run: read both workbooks, run the pipeline, write the result.

use crate::config::Config;
use crate::error::Result;
use crate::export::excel;
use crate::reader;
use chrono::NaiveDate;
use std::path::Path;
use vessel_mapper_common::pipeline::{self, load_reference};
use vessel_mapper_common::{PipelineOutput, PipelineStage, PipelineStats, SalespersonMatcher};

/// Inputs of one mapping run
#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    pub vessel_path: &'a Path,
    pub master_path: &'a Path,
    pub output_path: &'a Path,
    pub today: NaiveDate,
}

/// Run the whole mapping and write the output workbook.
///
/// The output file is only written after the pipeline succeeded.
pub fn run_files(
    request: &RunRequest<'_>,
    config: &Config,
    progress: &mut dyn FnMut(PipelineStage),
) -> Result<PipelineOutput> {
    let vessels = reader::read_sheet(request.vessel_path, &config.vessel_sheet)?;
    progress(PipelineStage::VesselsLoaded);

    let master = reader::read_sheet(request.master_path, &config.reference_sheet)?;
    progress(PipelineStage::MasterListLoaded);

    let options = config.pipeline_options(request.today);
    let output = pipeline::run(&vessels, &master, &options, progress)?;

    excel::generate_excel(&output.records, request.output_path)?;
    Ok(output)
}

/// Write the run counts as pretty-printed JSON.
pub fn write_summary(stats: &PipelineStats, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load the master list into a matcher with the given threshold.
pub fn load_matcher(master_path: &Path, config: &Config, threshold: f64) -> Result<SalespersonMatcher> {
    let master = reader::read_sheet(master_path, &config.reference_sheet)?;
    let entries = load_reference(&master, config.reference_has_header, &config.reference_source())?;
    Ok(SalespersonMatcher::new(entries, threshold))
}
