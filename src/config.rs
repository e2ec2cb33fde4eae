use crate::error::{Result, VesselMapError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vessel_mapper_common::pipeline::{
    PipelineOptions, DEFAULT_ALLOWED_VESSEL_TYPES, DEFAULT_ETA_WINDOW_END_DAYS,
    DEFAULT_ETA_WINDOW_START_DAYS,
};
use vessel_mapper_common::DEFAULT_MATCH_THRESHOLD;

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Filtered_Vessel_Data.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub match_threshold_percent: f64,
    pub eta_window_start_days: i64,
    pub eta_window_end_days: i64,
    pub allowed_vessel_types: Vec<String>,
    /// Sheet holding the vessel arrival report
    pub vessel_sheet: String,
    /// Sheet holding the salesperson master list
    pub reference_sheet: String,
    pub reference_has_header: bool,
    pub output_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VesselMapError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("vessel-mapper").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            match_threshold_percent: DEFAULT_MATCH_THRESHOLD,
            eta_window_start_days: DEFAULT_ETA_WINDOW_START_DAYS,
            eta_window_end_days: DEFAULT_ETA_WINDOW_END_DAYS,
            allowed_vessel_types: DEFAULT_ALLOWED_VESSEL_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vessel_sheet: "report".into(),
            reference_sheet: "master list".into(),
            reference_has_header: true,
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.pipeline_options(NaiveDate::MIN).validate()?;
        if self.vessel_sheet.is_empty() || self.reference_sheet.is_empty() {
            return Err(VesselMapError::Config("sheet names must not be empty".into()));
        }
        Ok(())
    }

    /// Pipeline settings for a run anchored at `today`.
    pub fn pipeline_options(&self, today: NaiveDate) -> PipelineOptions {
        PipelineOptions {
            today,
            match_threshold_percent: self.match_threshold_percent,
            eta_window_start_days: self.eta_window_start_days,
            eta_window_end_days: self.eta_window_end_days,
            allowed_vessel_types: self.allowed_vessel_types.clone(),
            reference_has_header: self.reference_has_header,
            vessel_source: format!("vessel sheet '{}'", self.vessel_sheet),
            reference_source: self.reference_source(),
        }
    }

    /// Master list name used in error messages
    pub fn reference_source(&self) -> String {
        format!("master list sheet '{}'", self.reference_sheet)
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        self.match_threshold_percent = threshold;
        self.validate()?;
        self.save()
    }

    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default_config();
        self.save()
    }
}
