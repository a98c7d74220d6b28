// Configuration loader - some methods reserved for future use
#![allow(dead_code)]

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for sweepjs passes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target directories to rewrite, relative to the root
    pub targets: Vec<PathBuf>,

    /// Patterns to exclude from discovery
    pub exclude: Vec<String>,

    /// File extensions treated as source files
    pub extensions: Vec<String>,

    /// Pass selection
    pub passes: PassConfig,

    /// Icon-import pass configuration
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PassConfig {
    /// Enable unused named-import removal
    pub unused_imports: bool,

    /// Enable unused destructured-element prefixing
    pub unused_destructured: bool,

    /// Enable unused variable-declaration prefixing
    pub unused_variables: bool,

    /// Enable missing icon-import insertion
    pub icon_imports: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Package the icon pass imports from
    pub package: String,

    /// Component name suffix that marks an icon tag
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: vec![],
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/build/**".to_string(),
                "**/dist/**".to_string(),
                "**/.next/**".to_string(),
                "**/coverage/**".to_string(),
            ],
            extensions: vec![
                "js".to_string(),
                "jsx".to_string(),
                "ts".to_string(),
                "tsx".to_string(),
            ],
            passes: PassConfig::default(),
            icons: IconConfig::default(),
        }
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            unused_imports: true,
            unused_destructured: true,
            unused_variables: true,
            icon_imports: true,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            package: "@mui/icons-material".to_string(),
            suffix: "Icon".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".sweepjs.yml",
            ".sweepjs.yaml",
            ".sweepjs.toml",
            "sweepjs.yml",
            "sweepjs.yaml",
            "sweepjs.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a pattern matches for exclusion
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }

    /// Check if an extension is a recognized source extension
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

/// Simple glob matching for patterns like "*.test.ts" or "**/dist/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    // Handle simple wildcard patterns
    if pattern.starts_with('*') && !pattern.contains('/') {
        // Pattern like "*.stories.tsx" matches "Button.stories.tsx"
        let suffix = &pattern[1..];
        return text.ends_with(suffix);
    }

    if pattern.ends_with('*') && !pattern.contains('/') {
        // Pattern like "legacy*" matches "legacyHelpers"
        let prefix = &pattern[..pattern.len() - 1];
        return text.starts_with(prefix);
    }

    // Handle path patterns with **
    if pattern.contains("**") {
        let cleaned = pattern.replace("**/", "").replace("/**", "");

        // If pattern is like "**/dist/**", check if "/dist/" is in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = cleaned.trim_matches('/');
            // Must match as a complete directory name, not substring
            // "/dist/" matches, but "/distros/" should not match
            let dir_pattern = format!("/{}/", dir_name);
            return text.contains(&dir_pattern);
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true; // Pattern is just "**"
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            // Both prefix and suffix
            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    // Exact match
    text == pattern
}
