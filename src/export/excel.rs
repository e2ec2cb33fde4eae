//! Excel generation (CLI)
//!
//! Thin file wrapper around `excel_core` from the common library.

use crate::error::{Result, VesselMapError};
use std::path::Path;
use vessel_mapper_common::export::excel_core::{generate_excel_buffer, DEFAULT_SHEET_NAME};
use vessel_mapper_common::VesselRecord;

/// Write records to `output_path`, creating parent directories as needed.
pub fn generate_excel(records: &[VesselRecord], output_path: &Path) -> Result<()> {
    let buffer =
        generate_excel_buffer(records, DEFAULT_SHEET_NAME).map_err(VesselMapError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer).map_err(|e| {
        VesselMapError::ExcelGeneration(format!("{}: {}", output_path.display(), e))
    })?;

    Ok(())
}
