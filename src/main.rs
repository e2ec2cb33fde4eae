use clap::Parser;
use std::path::{Path, PathBuf};
use vessel_mapper::{cli, config, error, export, progress, runner, selector};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use progress::StageProgress;
use runner::RunRequest;
use vessel_mapper_common::{tokenize, PipelineStats, SalespersonMatcher};

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Run {
            vessels,
            master,
            output,
            threshold,
            today,
            vessel_sheet,
            master_sheet,
            no_master_header,
            summary,
        } => {
            println!("🚢 vessel-mapper - salesperson mapping\n");

            if let Some(threshold) = threshold {
                config.match_threshold_percent = threshold;
            }
            if let Some(sheet) = vessel_sheet {
                config.vessel_sheet = sheet;
            }
            if let Some(sheet) = master_sheet {
                config.reference_sheet = sheet;
            }
            if no_master_header {
                config.reference_has_header = false;
            }
            config.validate()?;

            // 1. Input selection
            println!("[1/3] Selecting input files...");
            let cwd = PathBuf::from(".");
            let vessel_path = match vessels {
                Some(path) => path,
                None => selector::select_spreadsheet(&cwd, "vessel data", None)?,
            };
            let master_path = match master {
                Some(path) => path,
                None => selector::select_spreadsheet(&cwd, "master list", Some(vessel_path.as_path()))?,
            };
            println!("✔ Vessel data: {} (sheet '{}')", vessel_path.display(), config.vessel_sheet);
            println!("✔ Master list: {} (sheet '{}')\n", master_path.display(), config.reference_sheet);

            // 2. Pipeline
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let output_dir = output.unwrap_or_else(|| cwd.clone());
            let output_path = export::output_path(&output_dir, &config.output_file_name);
            let options = config.pipeline_options(today);
            let (window_start, window_end) = options.eta_window()?;
            println!(
                "[2/3] Processing (ETA {} to {}, threshold {}%)...",
                window_start.format("%d/%m/%y"),
                window_end.format("%d/%m/%y"),
                config.match_threshold_percent
            );

            let request = RunRequest {
                vessel_path: &vessel_path,
                master_path: &master_path,
                output_path: &output_path,
                today,
            };
            let mut progress = StageProgress::new(cli.verbose);
            let result = runner::run_files(&request, &config, &mut |stage| progress.on_stage(stage));
            let result = match result {
                Ok(result) => {
                    progress.finish();
                    result
                }
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };
            println!("✔ Processing complete\n");

            if cli.verbose {
                for record in &result.records {
                    println!(
                        "  {} | {} | {}",
                        record.vessel_name,
                        record.operator.as_deref().unwrap_or("-"),
                        record.salesperson_code
                    );
                }
                println!();
            }

            // 3. Output
            println!("[3/3] Saved: {}", output_path.display());
            if let Some(summary_path) = summary {
                runner::write_summary(&result.stats, &summary_path)?;
                println!("✔ Summary: {}", summary_path.display());
            }
            print_summary(&result.stats, result.records.len());
            println!("\n✅ Done. The filtered file is ready.");
        }

        Commands::Match {
            name,
            master,
            threshold,
            master_sheet,
        } => {
            println!("🔎 vessel-mapper - operator lookup\n");

            if let Some(sheet) = master_sheet {
                config.reference_sheet = sheet;
            }
            let threshold = threshold.unwrap_or(config.match_threshold_percent);
            config.match_threshold_percent = threshold;
            config.validate()?;

            let matcher = runner::load_matcher(&master, &config, threshold)?;
            print_candidates(&matcher, &name, cli.verbose);
            println!("\nResult: {}", matcher.match_operator(Some(name.as_str())));
        }

        Commands::Config {
            show,
            set_threshold,
            reset,
        } => {
            if reset {
                config.reset()?;
                println!("✔ Settings restored to defaults");
            }

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ Match threshold set to {}%", threshold);
            }

            if show || (!reset && set_threshold.is_none()) {
                print_config(&config)?;
            }
        }
    }

    Ok(())
}

fn print_summary(stats: &PipelineStats, written: usize) {
    println!("  Vessel rows read:        {}", stats.vessel_rows);
    println!("  Master list entries:     {}", stats.reference_entries);
    println!("  Invalid dates dropped:   {}", stats.invalid_dates);
    println!("  Outside ETA window:      {}", stats.outside_window);
    println!("  Vessel type excluded:    {}", stats.excluded_types);
    println!("  Duplicate operators:     {}", stats.duplicates_removed);
    println!("  Rows written:            {}", written);
    if stats.unmatched > 0 {
        println!("⚠ {} operators without a confident match (APPROACH)", stats.unmatched);
    }
}

fn print_candidates(matcher: &SalespersonMatcher, name: &str, verbose: bool) {
    let mut tokens: Vec<String> = tokenize(name).into_iter().collect();
    tokens.sort();
    println!("Query tokens: {}", tokens.join(", "));
    println!(
        "Master list: {} entries ({} with tokens), threshold {}%\n",
        matcher.entries().len(),
        matcher.scorable_entries(),
        matcher.threshold()
    );

    let candidates = matcher.score_candidates(name);
    if candidates.is_empty() {
        println!("  (no master list entry shares a word with this name)");
        return;
    }

    for candidate in candidates {
        let hit = candidate.score >= matcher.threshold();
        if !hit && !verbose {
            continue;
        }
        println!(
            "  {} row {:>4}  {:<40} {:>6.1}% ({}/{})  → {}",
            if hit { "✔" } else { " " },
            candidate.index + 1,
            candidate.operator,
            candidate.score,
            candidate.overlap,
            candidate.reference_tokens,
            candidate.salesperson_code.as_deref().unwrap_or("-")
        );
    }
}

fn print_config(config: &Config) -> Result<()> {
    let path = Config::config_path()?;
    println!("Settings ({}):", display_existing(&path));
    println!("  Match threshold:   {}%", config.match_threshold_percent);
    println!(
        "  ETA window:        today+{} .. today+{} days",
        config.eta_window_start_days, config.eta_window_end_days
    );
    println!("  Vessel sheet:      {}", config.vessel_sheet);
    println!("  Master list sheet: {}", config.reference_sheet);
    println!("  Master has header: {}", config.reference_has_header);
    println!("  Output file:       {}", config.output_file_name);
    println!("  Vessel types:");
    for vessel_type in &config.allowed_vessel_types {
        println!("    - {}", vessel_type);
    }
    Ok(())
}

fn display_existing(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{}, not saved yet", path.display())
    }
}
