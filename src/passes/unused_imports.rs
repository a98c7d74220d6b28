use super::{Pass, PlannedChange};
use crate::analysis::is_unused;
use crate::parser::SourceTree;
use crate::rewrite::imports::{collect_imports, remove_specifiers};

/// Removes named import specifiers whose local name never appears again in
/// the file, cascading to the whole declaration when it ends up empty.
/// Default and namespace imports are left alone.
pub struct UnusedImportsPass;

impl Pass for UnusedImportsPass {
    fn name(&self) -> &'static str {
        "unused-imports"
    }

    fn plan(&self, tree: &SourceTree) -> PlannedChange {
        let mut change = PlannedChange::default();

        for decl in collect_imports(tree) {
            let doomed: Vec<usize> = decl
                .named
                .iter()
                .enumerate()
                .filter(|(_, spec)| is_unused(tree, &spec.local))
                .map(|(index, _)| index)
                .collect();

            if doomed.is_empty() {
                continue;
            }

            let cascades = doomed.len() == decl.named.len()
                && decl.default.is_none()
                && decl.namespace.is_none();

            change.edits.extend(remove_specifiers(tree, &decl, &doomed));
            for &index in &doomed {
                change
                    .details
                    .push(format!("removed {} from '{}'", decl.named[index].local, decl.module));
            }
            if cascades {
                change
                    .details
                    .push(format!("dropped empty import of '{}'", decl.module));
            }
        }

        change
    }
}
