//! Import-statement scanning and edit planning.
//!
//! Removal follows the cascade rule: a declaration left with no default
//! import, no namespace import, and zero named specifiers is deleted
//! entirely, line ending included. An emptied named group next to a
//! surviving default drops only the `, { ... }` segment.

use crate::parser::{children_of_kind, SourceTree};
use crate::rewrite::{Edit, RewriteError};
use std::collections::HashSet;

/// One local binding introduced by an import statement
#[derive(Debug, Clone)]
pub struct Specifier {
    /// Local name bound in this file (the alias when one is present)
    pub local: String,
    /// Byte range of the whole specifier node
    pub start: usize,
    pub end: usize,
}

/// A top-level import statement and the bindings it introduces
#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub start: usize,
    pub end: usize,
    /// Module path without quotes
    pub module: String,
    pub default: Option<Specifier>,
    pub namespace: Option<Specifier>,
    pub named: Vec<Specifier>,
    /// Byte range of the `{ ... }` named-import group
    named_group: Option<(usize, usize)>,
}

impl ImportDecl {
    /// Every local name this declaration binds
    pub fn locals(&self) -> impl Iterator<Item = &str> {
        self.default
            .iter()
            .chain(self.namespace.iter())
            .chain(self.named.iter())
            .map(|spec| spec.local.as_str())
    }
}

/// Scan the top-level import statements of a parsed file
pub fn collect_imports(tree: &SourceTree) -> Vec<ImportDecl> {
    let root = tree.root();
    let mut cursor = root.walk();
    let mut imports = Vec::new();

    for stmt in root.named_children(&mut cursor) {
        if stmt.kind() != "import_statement" {
            continue;
        }
        let Some(source_node) = stmt.child_by_field_name("source") else {
            continue;
        };

        let raw = tree.text(source_node);
        // Strip the quotes around the module path
        let module = raw[1..raw.len() - 1].to_string();

        let mut decl = ImportDecl {
            start: stmt.start_byte(),
            end: stmt.end_byte(),
            module,
            default: None,
            namespace: None,
            named: Vec::new(),
            named_group: None,
        };

        if let Some(clause) = children_of_kind(stmt, "import_clause").into_iter().next() {
            let mut clause_cursor = clause.walk();
            for child in clause.named_children(&mut clause_cursor) {
                match child.kind() {
                    "identifier" => {
                        decl.default = Some(Specifier {
                            local: tree.text(child).to_string(),
                            start: child.start_byte(),
                            end: child.end_byte(),
                        });
                    }
                    "namespace_import" => {
                        if let Some(name) =
                            children_of_kind(child, "identifier").into_iter().next()
                        {
                            decl.namespace = Some(Specifier {
                                local: tree.text(name).to_string(),
                                start: child.start_byte(),
                                end: child.end_byte(),
                            });
                        }
                    }
                    "named_imports" => {
                        decl.named_group = Some((child.start_byte(), child.end_byte()));
                        for spec in children_of_kind(child, "import_specifier") {
                            let local_node = spec
                                .child_by_field_name("alias")
                                .or_else(|| spec.child_by_field_name("name"));
                            if let Some(local_node) = local_node {
                                decl.named.push(Specifier {
                                    local: tree.text(local_node).to_string(),
                                    start: spec.start_byte(),
                                    end: spec.end_byte(),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        imports.push(decl);
    }

    imports
}

/// All local names imported anywhere in the file, regardless of style
pub fn imported_locals(decls: &[ImportDecl]) -> HashSet<String> {
    decls
        .iter()
        .flat_map(|decl| decl.locals())
        .map(String::from)
        .collect()
}

/// Plan the removal of the named specifiers at `remove` (indices into
/// `decl.named`), cascading to the group or the whole declaration when
/// nothing would remain.
pub fn remove_specifiers(tree: &SourceTree, decl: &ImportDecl, remove: &[usize]) -> Vec<Edit> {
    if remove.is_empty() {
        return Vec::new();
    }

    let removing_all = remove.len() == decl.named.len();

    if removing_all && decl.default.is_none() && decl.namespace.is_none() {
        // Nothing left to import: the whole statement goes, line ending too
        let mut end = decl.end;
        let rest = &tree.source()[end..];
        if rest.starts_with("\r\n") {
            end += 2;
        } else if rest.starts_with('\n') {
            end += 1;
        }
        return vec![Edit::delete(decl.start, end)];
    }

    if removing_all {
        // `React, { A, B }` -> `React`
        let anchor = decl
            .default
            .as_ref()
            .or(decl.namespace.as_ref())
            .map(|spec| spec.end);
        if let (Some(anchor), Some((_, group_end))) = (anchor, decl.named_group) {
            return vec![Edit::delete(anchor, group_end)];
        }
    }

    // Partial removal: delete each maximal run of doomed specifiers along
    // with one adjacent comma.
    let mut removed = vec![false; decl.named.len()];
    for &index in remove {
        if index < removed.len() {
            removed[index] = true;
        }
    }

    let mut edits = Vec::new();
    let mut i = 0;
    while i < decl.named.len() {
        if !removed[i] {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < decl.named.len() && removed[i] {
            i += 1;
        }
        let run_end = i - 1;

        if run_end + 1 < decl.named.len() {
            // `Foo, Bar` minus Foo: eat up to the next specifier
            edits.push(Edit::delete(
                decl.named[run_start].start,
                decl.named[run_end + 1].start,
            ));
        } else if run_start > 0 {
            // Trailing run: eat back from the previous survivor
            edits.push(Edit::delete(
                decl.named[run_start - 1].end,
                decl.named[run_end].end,
            ));
        }
    }

    edits
}

/// Plan a default-import insertion for `name` from `module`, placed after
/// the last top-level import (or at the top of the file when there is
/// none). An existing import of the same name/module pair is a conflict.
pub fn insert_import(tree: &SourceTree, name: &str, module: &str) -> Result<Edit, RewriteError> {
    for decl in collect_imports(tree) {
        if decl.module == module && decl.locals().any(|local| local == name) {
            return Err(RewriteError::DuplicateImport {
                name: name.to_string(),
                module: module.to_string(),
            });
        }
    }

    let line = format!("import {name} from '{module}';\n");

    let root = tree.root();
    let mut cursor = root.walk();
    let last_import = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() == "import_statement")
        .last();

    let Some(stmt) = last_import else {
        return Ok(Edit::insert(0, line));
    };

    // Insert on the line after the last import, past any trailing comment
    let end = stmt.end_byte();
    match tree.source()[end..].find('\n') {
        Some(offset) => Ok(Edit::insert(end + offset + 1, line)),
        None => Ok(Edit::insert(tree.source().len(), format!("\n{line}"))),
    }
}
