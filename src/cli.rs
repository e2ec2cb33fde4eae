use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vessel-mapper")]
#[command(about = "Map vessel operators in an arrival report to salesperson codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print per-stage counts and every matched row
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the vessel report and map operators to salesperson codes
    Run {
        /// Vessel data workbook (chosen interactively when omitted)
        #[arg(long)]
        vessels: Option<PathBuf>,

        /// Salesperson master list workbook (chosen interactively when omitted)
        #[arg(short, long)]
        master: Option<PathBuf>,

        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Match threshold in percent (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Anchor date for the ETA window, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Sheet name of the vessel report
        #[arg(long)]
        vessel_sheet: Option<String>,

        /// Sheet name of the master list
        #[arg(long)]
        master_sheet: Option<String>,

        /// Treat the first master list row as data rather than a header
        #[arg(long)]
        no_master_header: bool,

        /// Also write the run counts as JSON to this file
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Match a single operator name against the master list
    Match {
        /// Operator name to look up
        #[arg(required = true)]
        name: String,

        /// Salesperson master list workbook
        #[arg(short, long, required = true)]
        master: PathBuf,

        /// Match threshold in percent (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Sheet name of the master list
        #[arg(long)]
        master_sheet: Option<String>,
    },

    /// Show or edit the saved settings
    Config {
        /// Show the current settings
        #[arg(long)]
        show: bool,

        /// Save a new default match threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Restore the built-in defaults
        #[arg(long)]
        reset: bool,
    },
}
