mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::passes::PassSummary;
use miette::Result;
use std::path::PathBuf;

/// Output format for run summaries
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for the results of a pass run
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    pub fn report(&self, summaries: &[PassSummary], dry_run: bool) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => TerminalReporter::new(dry_run).report(summaries),
            ReportFormat::Json => {
                JsonReporter::new(self.output_path.clone()).report(summaries, dry_run)
            }
        }
    }
}
