mod driver;
mod icon_imports;
mod unused_destructured;
mod unused_imports;
mod unused_variables;

pub use driver::{FileOutcome, FileReport, PassDriver, PassOptions, PassSummary};
pub use icon_imports::IconImportsPass;
pub use unused_destructured::UnusedDestructuredPass;
pub use unused_imports::UnusedImportsPass;
pub use unused_variables::UnusedVariablesPass;

use crate::config::Config;
use crate::parser::SourceTree;
use crate::rewrite::Edit;
use std::path::{Path, PathBuf};

/// Default source root when neither `--root` nor `SRC_ROOT` is given
pub const DEFAULT_ROOT: &str = "src";

/// One codemod pass: plans edits for a parsed file.
///
/// Passes hold no per-file state, so a single instance can plan files in
/// parallel. Applying and persisting the edits is the driver's job.
pub trait Pass: Sync {
    fn name(&self) -> &'static str;

    /// Plan the edits this pass would make to `tree`, with one
    /// human-readable detail line per affected binding.
    fn plan(&self, tree: &SourceTree) -> PlannedChange;
}

/// Planned edits for one file plus the per-binding detail lines
#[derive(Debug, Default)]
pub struct PlannedChange {
    pub edits: Vec<Edit>,
    pub details: Vec<String>,
}

/// Whether a variable declarator sits inside an `export` statement.
///
/// Exported bindings exist for other files; the whole-file count cannot see
/// those references, so the rename passes leave them alone (a false
/// negative, which is the safe direction).
pub(crate) fn declarator_is_exported(declarator: tree_sitter::Node<'_>) -> bool {
    declarator
        .parent()
        .and_then(|declaration| declaration.parent())
        .is_some_and(|node| node.kind() == "export_statement")
}

/// Resolve the source root: `--root` flag, then the `SRC_ROOT` environment
/// variable, then the compiled-in default.
pub fn resolve_root(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("SRC_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

/// The enabled passes in recommended order.
///
/// Import removal runs first: it changes reference counts for names that
/// also appear as destructured or variable bindings. Icon insertion runs
/// last so it sees the final import list.
pub fn all_passes(config: &Config, root: &Path) -> Vec<Box<dyn Pass>> {
    let mut passes: Vec<Box<dyn Pass>> = Vec::new();
    if config.passes.unused_imports {
        passes.push(Box::new(UnusedImportsPass));
    }
    if config.passes.unused_destructured {
        passes.push(Box::new(UnusedDestructuredPass));
    }
    if config.passes.unused_variables {
        passes.push(Box::new(UnusedVariablesPass));
    }
    if config.passes.icon_imports {
        passes.push(Box::new(IconImportsPass::new(root, config)));
    }
    passes
}
