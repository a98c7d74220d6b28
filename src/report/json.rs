use crate::passes::{FileOutcome, PassSummary};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, summaries: &[PassSummary], dry_run: bool) -> Result<()> {
        let report = JsonReport::from_summaries(summaries, dry_run);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    dry_run: bool,
    files_modified: usize,
    passes: Vec<JsonPass>,
}

#[derive(Serialize)]
struct JsonPass {
    name: String,
    files_scanned: usize,
    modified: Vec<JsonModified>,
    skipped: Vec<JsonSkipped>,
}

#[derive(Serialize)]
struct JsonModified {
    file: String,
    changes: Vec<String>,
    persisted: bool,
}

#[derive(Serialize)]
struct JsonSkipped {
    file: String,
    reason: String,
}

impl JsonReport {
    fn from_summaries(summaries: &[PassSummary], dry_run: bool) -> Self {
        let mut modified_paths: BTreeSet<PathBuf> = BTreeSet::new();

        let passes: Vec<JsonPass> = summaries
            .iter()
            .map(|summary| {
                let mut modified = Vec::new();
                let mut skipped = Vec::new();

                for report in &summary.files {
                    match &report.outcome {
                        FileOutcome::Modified { details, persisted } => {
                            modified_paths.insert(report.path.clone());
                            modified.push(JsonModified {
                                file: report.path.to_string_lossy().to_string(),
                                changes: details.clone(),
                                persisted: *persisted,
                            });
                        }
                        FileOutcome::Skipped { reason } => {
                            skipped.push(JsonSkipped {
                                file: report.path.to_string_lossy().to_string(),
                                reason: reason.clone(),
                            });
                        }
                        FileOutcome::Unchanged => {}
                    }
                }

                JsonPass {
                    name: summary.pass.clone(),
                    files_scanned: summary.scanned(),
                    modified,
                    skipped,
                }
            })
            .collect();

        Self {
            version: "1.0",
            dry_run,
            files_modified: modified_paths.len(),
            passes,
        }
    }
}
