use super::{declarator_is_exported, Pass, PlannedChange};
use crate::analysis::is_unused;
use crate::parser::{descendants, SourceTree};
use crate::rewrite::Edit;

/// Prefixes unused plain variable declarators with `_`.
///
/// Destructured declarators belong to the destructure pass; this one only
/// touches `const x = ...` / `let x = ...` / `var x = ...` names.
pub struct UnusedVariablesPass;

impl Pass for UnusedVariablesPass {
    fn name(&self) -> &'static str {
        "unused-variables"
    }

    fn plan(&self, tree: &SourceTree) -> PlannedChange {
        let mut change = PlannedChange::default();

        for node in descendants(tree.root()) {
            if node.kind() != "variable_declarator" || declarator_is_exported(node) {
                continue;
            }
            let Some(name) = node.child_by_field_name("name") else {
                continue;
            };
            if name.kind() != "identifier" {
                continue;
            }

            let binding = tree.text(name);
            if binding.starts_with('_') {
                continue;
            }
            if is_unused(tree, binding) {
                change.edits.push(Edit::replace(
                    name.start_byte(),
                    name.end_byte(),
                    format!("_{binding}"),
                ));
                change.details.push(format!("renamed {binding} -> _{binding}"));
            }
        }

        change
    }
}
