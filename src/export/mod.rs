pub mod excel;

use std::path::{Path, PathBuf};

/// Resolve the output workbook path: a directory (or a path without an
/// extension) receives `file_name`, anything else is used as is.
pub fn output_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert_eq!(
            output_path(dir.path(), "Filtered_Vessel_Data.xlsx"),
            dir.path().join("Filtered_Vessel_Data.xlsx")
        );
        assert_eq!(
            output_path(Path::new("out"), "result.xlsx"),
            Path::new("out").join("result.xlsx")
        );
    }

    #[test]
    fn test_output_path_for_file() {
        assert_eq!(
            output_path(Path::new("weekly.xlsx"), "Filtered_Vessel_Data.xlsx"),
            PathBuf::from("weekly.xlsx")
        );
    }
}
