//! Interactive spreadsheet selection
//!
//! Used when `run` is started without `--vessels` / `--master`.

use crate::error::{Result, VesselMapError};
use crate::reader::is_spreadsheet;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::{Path, PathBuf};

/// Spreadsheet files directly inside `dir`, sorted by file name.
pub fn list_spreadsheets(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_spreadsheet(&path) {
                continue;
            }
            // Excel lock files
            let is_lock_file = path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with("~$"))
                .unwrap_or(false);
            if !is_lock_file {
                files.push(path);
            }
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}

/// Spreadsheets in `dir` other than `exclude`, compared as canonical paths.
fn candidates(dir: &Path, exclude: Option<&Path>) -> Vec<PathBuf> {
    let excluded = exclude.map(canonical);
    list_spreadsheets(dir)
        .into_iter()
        .filter(|p| excluded.as_ref() != Some(&canonical(p)))
        .collect()
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Ask the user to pick one spreadsheet from `dir`.
///
/// `purpose` names the input in the prompt ("vessel data", "master list").
pub fn select_spreadsheet(dir: &Path, purpose: &str, exclude: Option<&Path>) -> Result<PathBuf> {
    let files = candidates(dir, exclude);

    if files.is_empty() {
        println!("⚠ No spreadsheet files found in {}", dir.display());
        return Err(VesselMapError::NoInputSelected(purpose.to_string()));
    }

    let labels: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select the {} file", purpose))
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| VesselMapError::Prompt(e.to_string()))?;

    match choice {
        Some(index) => {
            println!("→ Using {}", labels[index]);
            Ok(files[index].clone())
        }
        None => Err(VesselMapError::NoInputSelected(purpose.to_string())),
    }
}
