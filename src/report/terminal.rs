use crate::passes::{FileOutcome, PassSummary};
use colored::Colorize;
use miette::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Terminal reporter with colored output: one line per modified file
/// naming what changed, one line per skip with its reason, and a final
/// summary with the modified-file count.
pub struct TerminalReporter {
    dry_run: bool,
}

impl TerminalReporter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn report(&self, summaries: &[PassSummary]) -> Result<()> {
        let mut modified_paths: BTreeSet<PathBuf> = BTreeSet::new();

        for summary in summaries {
            if summary.modified().next().is_none() && summary.skipped().next().is_none() {
                continue;
            }

            println!();
            println!("{}", summary.pass.cyan().bold());

            for report in summary.modified() {
                if let FileOutcome::Modified { details, .. } = &report.outcome {
                    let marker = if self.dry_run {
                        "○".yellow()
                    } else {
                        "✓".green()
                    };
                    println!(
                        "  {} {}: {}",
                        marker,
                        report.path.display(),
                        details.join(", ")
                    );
                    modified_paths.insert(report.path.clone());
                }
            }

            for report in summary.skipped() {
                if let FileOutcome::Skipped { reason } = &report.outcome {
                    println!("  {} {}: {}", "⚠".yellow(), report.path.display(), reason);
                }
            }
        }

        let scanned = summaries
            .iter()
            .map(|summary| summary.scanned())
            .max()
            .unwrap_or(0);

        println!();
        println!("{}", "─".repeat(60).dimmed());
        if modified_paths.is_empty() {
            println!("{}", format!("0 of {scanned} files modified").green());
        } else if self.dry_run {
            println!(
                "{}",
                format!(
                    "Dry run - {} of {} files would be modified",
                    modified_paths.len(),
                    scanned
                )
                .yellow()
                .bold()
            );
        } else {
            println!(
                "{}",
                format!("{} of {} files modified", modified_paths.len(), scanned)
                    .yellow()
                    .bold()
            );
        }

        Ok(())
    }
}
