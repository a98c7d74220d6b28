use super::{Pass, PlannedChange};
use crate::analysis::{icon_candidates, IconResolver};
use crate::config::Config;
use crate::parser::SourceTree;
use crate::rewrite::imports::{collect_imports, imported_locals, insert_import};
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Inserts default imports for icon tags that are used in markup but never
/// imported.
///
/// Unlike the other passes this one looks for used-but-undeclared names: a
/// candidate legitimately has two or more occurrences once imported, so the
/// already-imported check compares against every imported local instead of
/// using the reference-count heuristic.
pub struct IconImportsPass {
    resolver: IconResolver,
    pattern: Regex,
}

impl IconImportsPass {
    pub fn new(source_root: &Path, config: &Config) -> Self {
        let pattern = Regex::new(&format!(
            "^[A-Z][A-Za-z0-9]*{}$",
            regex::escape(&config.icons.suffix)
        ))
        .expect("icon suffix forms a valid pattern");

        Self {
            resolver: IconResolver::new(source_root, &config.icons),
            pattern,
        }
    }
}

impl Pass for IconImportsPass {
    fn name(&self) -> &'static str {
        "icon-imports"
    }

    fn plan(&self, tree: &SourceTree) -> PlannedChange {
        let mut change = PlannedChange::default();
        if !tree.file_type().is_jsx() {
            return change;
        }

        let imported = imported_locals(&collect_imports(tree));

        for name in icon_candidates(tree, &self.pattern) {
            if imported.contains(&name) {
                debug!("{}: {} already imported", tree.path().display(), name);
                continue;
            }
            let Some(module) = self.resolver.resolve(&name) else {
                warn!(
                    "{}: no module for <{} />, skipping",
                    tree.path().display(),
                    name
                );
                continue;
            };
            match insert_import(tree, &name, &module) {
                Ok(edit) => {
                    change.edits.push(edit);
                    change
                        .details
                        .push(format!("added import {name} from '{module}'"));
                }
                Err(conflict) => {
                    warn!("{}: {}", tree.path().display(), conflict);
                }
            }
        }

        change
    }
}
