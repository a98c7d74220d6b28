use super::Pass;
use crate::config::Config;
use crate::discovery::{FileFinder, SourceFile};
use crate::parser::JsParser;
use crate::rewrite::{apply_edits, persist};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use miette::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a pass run treats the files it touches
#[derive(Debug, Clone, Copy, Default)]
pub struct PassOptions {
    /// Plan and report without writing anything
    pub dry_run: bool,

    /// Confirm each modified file before writing; forces sequential runs
    pub interactive: bool,

    /// Process files on a rayon pool
    pub parallel: bool,

    /// Show a progress bar while scanning
    pub progress: bool,
}

/// Terminal state of one file in a pass run.
///
/// Every file ends as `Unchanged`, `Modified`, or `Skipped`; a skip always
/// carries the reason so nothing is dropped silently.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Unchanged,
    Modified {
        details: Vec<String>,
        persisted: bool,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Result of running one pass over the source tree
#[derive(Debug, Clone)]
pub struct PassSummary {
    pub pass: String,
    pub files: Vec<FileReport>,
}

impl PassSummary {
    pub fn scanned(&self) -> usize {
        self.files.len()
    }

    pub fn modified(&self) -> impl Iterator<Item = &FileReport> + '_ {
        self.files
            .iter()
            .filter(|report| matches!(report.outcome, FileOutcome::Modified { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileReport> + '_ {
        self.files
            .iter()
            .filter(|report| matches!(report.outcome, FileOutcome::Skipped { .. }))
    }
}

/// Orchestrates one pass: discover, parse, plan, apply, persist.
///
/// Files are independent, so the only cross-file state is the summary. A
/// parse failure or write failure skips that file and the run continues;
/// only discovery failure aborts.
pub struct PassDriver<'a> {
    config: &'a Config,
    options: PassOptions,
}

impl<'a> PassDriver<'a> {
    pub fn new(config: &'a Config, options: PassOptions) -> Self {
        Self { config, options }
    }

    pub fn run(&self, pass: &dyn Pass, root: &Path) -> Result<PassSummary> {
        let finder = FileFinder::new(self.config);
        let files = finder.find_files(root)?;
        debug!("{}: scanning {} files", pass.name(), files.len());

        let reports = if self.options.parallel && !self.options.interactive {
            files
                .par_iter()
                .map(|file| {
                    let mut parser = JsParser::new();
                    self.process_file(&mut parser, file, pass)
                })
                .collect()
        } else {
            let progress = self.options.progress.then(|| {
                let pb = ProgressBar::new(files.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                        .unwrap()
                        .progress_chars("#>-"),
                );
                pb
            });

            let mut parser = JsParser::new();
            let mut reports = Vec::with_capacity(files.len());
            for file in &files {
                reports.push(self.process_file(&mut parser, file, pass));
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            reports
        };

        Ok(PassSummary {
            pass: pass.name().to_string(),
            files: reports,
        })
    }

    fn process_file(&self, parser: &mut JsParser, file: &SourceFile, pass: &dyn Pass) -> FileReport {
        let path = file.path.clone();

        let tree = match parser.parse_file(file) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return FileReport {
                    path,
                    outcome: FileOutcome::Skipped {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let change = pass.plan(&tree);
        if change.edits.is_empty() {
            return FileReport {
                path,
                outcome: FileOutcome::Unchanged,
            };
        }

        let rewritten = match apply_edits(tree.source(), &change.edits) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return FileReport {
                    path,
                    outcome: FileOutcome::Skipped {
                        reason: e.to_string(),
                    },
                };
            }
        };

        if self.options.dry_run {
            return FileReport {
                path,
                outcome: FileOutcome::Modified {
                    details: change.details,
                    persisted: false,
                },
            };
        }

        if self.options.interactive && !self.confirm(&path, &change.details) {
            return FileReport {
                path,
                outcome: FileOutcome::Skipped {
                    reason: "declined interactively".to_string(),
                },
            };
        }

        match persist(&path, tree.source(), &rewritten) {
            Ok(_) => FileReport {
                path,
                outcome: FileOutcome::Modified {
                    details: change.details,
                    persisted: true,
                },
            },
            Err(e) => {
                warn!("Failed to write {}: {}", path.display(), e);
                FileReport {
                    path,
                    outcome: FileOutcome::Skipped {
                        reason: format!("write failed: {e}"),
                    },
                }
            }
        }
    }

    fn confirm(&self, path: &Path, details: &[String]) -> bool {
        println!();
        println!("{}", path.display().to_string().cyan().bold());
        for detail in details {
            println!("  {} {}", "→".dimmed(), detail);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Apply these changes?")
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
