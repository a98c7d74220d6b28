use crate::config::IconConfig;
use crate::parser::{descendants, SourceTree};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collect JSX tag names matching the icon naming convention, in order of
/// first appearance. Only plain-identifier tags count; member-expression
/// tags like `<Icons.Save />` are already resolved through their import.
pub fn icon_candidates(tree: &SourceTree, pattern: &Regex) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for node in descendants(tree.root()) {
        if node.kind() != "identifier" {
            continue;
        }
        let Some(parent) = node.parent() else {
            continue;
        };
        if !matches!(
            parent.kind(),
            "jsx_opening_element" | "jsx_self_closing_element"
        ) {
            continue;
        }

        let name = tree.text(node);
        if pattern.is_match(name) && seen.insert(name.to_string()) {
            candidates.push(name.to_string());
        }
    }

    candidates
}

/// Resolves icon component names to module paths inside the configured
/// icon package.
///
/// The package directory is located by walking up from the source root
/// until a `node_modules/<package>` directory is found; its top-level
/// modules are listed once per run. A name resolves only when the package
/// ships a module for it, so made-up icon tags are skipped rather than
/// turned into broken imports.
pub struct IconResolver {
    package: String,
    suffix: String,
    available: Option<HashSet<String>>,
}

impl IconResolver {
    pub fn new(source_root: &Path, config: &IconConfig) -> Self {
        let package_dir = find_package_dir(source_root, &config.package);
        let available = match &package_dir {
            Some(dir) => {
                let modules = scan_modules(dir);
                debug!(
                    "Found {} with {} modules",
                    config.package,
                    modules.len()
                );
                Some(modules)
            }
            None => {
                warn!(
                    "{} not found in any node_modules above {}; icon imports will be skipped",
                    config.package,
                    source_root.display()
                );
                None
            }
        };

        Self {
            package: config.package.clone(),
            suffix: config.suffix.clone(),
            available,
        }
    }

    /// Module path for an icon tag name, e.g. `SaveIcon` ->
    /// `@mui/icons-material/Save`. None when the name does not carry the
    /// suffix or the package has no such module.
    pub fn resolve(&self, tag: &str) -> Option<String> {
        let base = tag.strip_suffix(&self.suffix)?;
        if base.is_empty() {
            return None;
        }
        let available = self.available.as_ref()?;
        if available.contains(base) {
            Some(format!("{}/{}", self.package, base))
        } else {
            None
        }
    }
}

fn find_package_dir(source_root: &Path, package: &str) -> Option<PathBuf> {
    let root = source_root
        .canonicalize()
        .unwrap_or_else(|_| source_root.to_path_buf());

    for dir in root.ancestors() {
        let candidate = dir.join("node_modules").join(package);
        if candidate.is_dir() {
            return Some(candidate);
        }
    }
    None
}

/// Top-level module names the package ships (`Save.js` -> `Save`)
fn scan_modules(dir: &Path) -> HashSet<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?;
            name.strip_suffix(".js")
                .or_else(|| name.strip_suffix(".d.ts"))
                .map(String::from)
        })
        .collect()
}
