use crate::parser::{descendants, SourceTree};

/// Count leaf nodes whose source text equals `name`, across the whole file.
///
/// This is deliberately lexical, not scope-aware: property keys, shorthand
/// properties, and string fragments that spell the name all count. The four
/// passes rely on this exact heuristic staying consistent between them - a
/// coincidental textual match keeps a binding alive, which is the safe
/// direction for an in-place rewrite.
pub fn count_identifier_text(tree: &SourceTree, name: &str) -> usize {
    descendants(tree.root())
        .filter(|node| node.child_count() == 0)
        .filter(|node| tree.text(*node) == name)
        .count()
}

/// A binding is unused iff its name occurs exactly once: the declaration
/// itself. A count of zero cannot happen for a just-parsed declaration and
/// is treated as used.
pub fn is_unused(tree: &SourceTree, name: &str) -> bool {
    count_identifier_text(tree, name) == 1
}
