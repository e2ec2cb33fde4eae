//! Console progress for a pipeline run (indicatif)

use indicatif::{ProgressBar, ProgressStyle};
use vessel_mapper_common::PipelineStage;

pub struct StageProgress {
    bar: ProgressBar,
    verbose: bool,
}

impl StageProgress {
    pub fn new(verbose: bool) -> Self {
        let bar = ProgressBar::new(PipelineStage::TOTAL as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg} ({elapsed})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
        bar.set_style(style);
        Self { bar, verbose }
    }

    /// Progress that draws nothing (tests, non-interactive use).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            verbose: false,
        }
    }

    pub fn on_stage(&mut self, stage: PipelineStage) {
        self.bar.set_position(stage.number() as u64);
        self.bar.set_message(stage.description());
        if self.verbose {
            self.bar.println(format!(
                "  [{}/{}] {}",
                stage.number(),
                PipelineStage::TOTAL,
                stage.description()
            ));
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("processing complete");
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
