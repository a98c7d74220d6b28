use super::{declarator_is_exported, Pass, PlannedChange};
use crate::analysis::is_unused;
use crate::parser::{descendants, SourceTree};
use crate::rewrite::Edit;
use tree_sitter::Node;

/// Prefixes unused destructuring elements with `_`.
///
/// Covers object and array patterns in variable declarators, including
/// nested patterns, aliased keys (`{ a: b }`), and defaulted elements.
/// Rest elements are left alone. Names already starting with `_` are
/// considered intentionally unused, which keeps the pass idempotent.
pub struct UnusedDestructuredPass;

impl Pass for UnusedDestructuredPass {
    fn name(&self) -> &'static str {
        "unused-destructured"
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
            if !matches!(name.kind(), "object_pattern" | "array_pattern") {
                continue;
            }

            for site in pattern_bindings(name) {
                let binding = tree.text(site);
                if binding.starts_with('_') {
                    continue;
                }
                if is_unused(tree, binding) {
                    change.edits.push(Edit::replace(
                        site.start_byte(),
                        site.end_byte(),
                        format!("_{binding}"),
                    ));
                    change.details.push(format!("renamed {binding} -> _{binding}"));
                }
            }
        }

        change
    }
}

/// Identifier sites bound by a destructuring pattern
fn pattern_bindings(pattern: Node<'_>) -> Vec<Node<'_>> {
    let mut sites = Vec::new();
    collect_bindings(pattern, &mut sites);
    sites
}

fn collect_bindings<'a>(node: Node<'a>, sites: &mut Vec<Node<'a>>) {
    match node.kind() {
        "object_pattern" | "array_pattern" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                collect_bindings(child, sites);
            }
        }
        "shorthand_property_identifier_pattern" | "identifier" => {
            sites.push(node);
        }
        // `{ key: local }` binds the value side only
        "pair_pattern" => {
            if let Some(value) = node.child_by_field_name("value") {
                collect_bindings(value, sites);
            }
        }
        // `{ a = 1 }` and `[a = 1]` bind the left side
        "object_assignment_pattern" | "assignment_pattern" => {
            if let Some(left) = node.child_by_field_name("left") {
                collect_bindings(left, sites);
            }
        }
        _ => {}
    }
}
