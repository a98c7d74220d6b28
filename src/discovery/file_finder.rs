// File discovery utilities - some reserved for future use
#![allow(dead_code)]

use crate::config::Config;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Type of source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Javascript,
    Jsx,
    TypeScript,
    Tsx,
}

impl FileType {
    /// Determine file type from path
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;

        match extension {
            "js" | "mjs" | "cjs" => Some(FileType::Javascript),
            "jsx" => Some(FileType::Jsx),
            "ts" | "mts" | "cts" => Some(FileType::TypeScript),
            "tsx" => Some(FileType::Tsx),
            _ => None,
        }
    }

    /// Check if the grammar for this file type is TypeScript-based
    pub fn is_typescript(&self) -> bool {
        matches!(self, FileType::TypeScript | FileType::Tsx)
    }

    /// Check if the file type can contain JSX markup
    pub fn is_jsx(&self) -> bool {
        // Plain .js files routinely carry JSX in React codebases, so the
        // javascript grammar (which accepts JSX) covers them too.
        matches!(self, FileType::Javascript | FileType::Jsx | FileType::Tsx)
    }
}

/// Represents a discovered source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Type of source file
    pub file_type: FileType,

    /// Contents of the file (loaded lazily)
    contents: Option<String>,
}

impl SourceFile {
    pub fn new(path: PathBuf, file_type: FileType) -> Self {
        Self {
            path,
            file_type,
            contents: None,
        }
    }

    /// Load file contents
    pub fn load(&mut self) -> Result<&str> {
        if self.contents.is_none() {
            let contents = std::fs::read_to_string(&self.path).into_diagnostic()?;
            self.contents = Some(contents);
        }
        Ok(self.contents.as_ref().unwrap())
    }

    /// Get contents if already loaded
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Load and return owned contents
    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).into_diagnostic()
    }
}

/// File finder for discovering source files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all source files under the given root.
    ///
    /// A missing or unreadable root aborts the run; unreadable entries
    /// below it are skipped with a warning.
    pub fn find_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        if !root.is_dir() {
            return Err(miette::miette!(
                "Source root does not exist or is not a directory: {}",
                root.display()
            ));
        }

        debug!("Scanning for files in: {}", root.display());

        let targets = if self.config.targets.is_empty() {
            vec![root.to_path_buf()]
        } else {
            self.config.targets.iter().map(|t| root.join(t)).collect()
        };

        let mut files: Vec<SourceFile> = targets
            .par_iter()
            .flat_map(|target| self.scan_directory(target))
            .collect();

        // Deterministic processing order regardless of walker interleaving
        files.sort_by(|a, b| a.path.cmp(&b.path));

        debug!("Found {} files", files.len());
        Ok(files)
    }

    /// Scan a single directory for source files
    fn scan_directory(&self, dir: &Path) -> Vec<SourceFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }

        let walker = WalkBuilder::new(dir)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();

                // Check exclusion patterns
                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                // Determine file type
                let file_type = FileType::from_path(path)?;

                let extension = path.extension()?.to_str()?;
                if !self.config.is_source_extension(extension) {
                    return None;
                }

                trace!("Found {:?}: {}", file_type, path.display());
                Some(SourceFile::new(path.to_path_buf(), file_type))
            })
            .collect()
    }
}

/// Statistics about discovered files
#[derive(Debug, Default)]
pub struct FileStats {
    pub javascript_files: usize,
    pub jsx_files: usize,
    pub typescript_files: usize,
    pub tsx_files: usize,
}

impl FileStats {
    pub fn from_files(files: &[SourceFile]) -> Self {
        let mut stats = Self::default();
        for file in files {
            match file.file_type {
                FileType::Javascript => stats.javascript_files += 1,
                FileType::Jsx => stats.jsx_files += 1,
                FileType::TypeScript => stats.typescript_files += 1,
                FileType::Tsx => stats.tsx_files += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.javascript_files + self.jsx_files + self.typescript_files + self.tsx_files
    }
}
