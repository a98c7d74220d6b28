//! Invariant tests for the codemod pipeline
//!
//! These assert the contract-level properties of the passes: idempotence,
//! rename safety, cascade removal, and the deliberately lexical (not
//! scope-aware) reference-count heuristic.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use sweepjs::discovery::FileType;
use sweepjs::passes::{all_passes, Pass, PassDriver, PassOptions};
use sweepjs::{count_identifier_text, Config, JsParser};

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn run_pass(pass: &dyn Pass, root: &Path) -> usize {
    let config = Config::default();
    let driver = PassDriver::new(&config, PassOptions::default());
    let summary = driver.run(pass, root).expect("pass run failed");
    summary.modified().count()
}

fn count_in_source(source: &str, name: &str) -> usize {
    let tree = JsParser::new()
        .parse(Path::new("check.jsx"), FileType::Jsx, source.to_string())
        .unwrap();
    count_identifier_text(&tree, name)
}

/// Fixture exercising every binding kind at once
fn mixed_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "node_modules/@mui/icons-material/Save.js",
        "export default 0;",
    );
    write_file(
        dir.path(),
        "src/page.jsx",
        concat!(
            "import React, { useState, useCallback } from 'react';\n",
            "import { fetchRows } from './api';\n",
            "\n",
            "export default function Page() {\n",
            "  const [rows, setRows] = useState([]);\n",
            "  const { total, pending } = fetchRows();\n",
            "  const refresh = useCallback(() => setRows(fetchRows()), []);\n",
            "  const draft = pending;\n",
            "  return <div onClick={refresh}><SaveIcon />{rows}{total}</div>;\n",
            "}\n",
        ),
    );
    dir
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_every_pass_reaches_a_fixed_point_in_one_sweep() {
    let dir = mixed_tree();
    let root = dir.path().join("src");
    let config = Config::default();

    for pass in all_passes(&config, &root) {
        run_pass(pass.as_ref(), &root);
    }
    let after_first = read_file(dir.path(), "src/page.jsx");

    for pass in all_passes(&config, &root) {
        let modified = run_pass(pass.as_ref(), &root);
        assert_eq!(modified, 0, "{} changed files on second sweep", pass.name());
    }
    assert_eq!(read_file(dir.path(), "src/page.jsx"), after_first);
}

// ============================================================================
// Rename safety
// ============================================================================

#[test]
fn test_rename_leaves_no_occurrence_of_the_original_name() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/a.js",
        "const { alpha, beta } = getThing();\nconsole.log(beta);\nconst omega = 1;\nexport { beta };\n",
    );
    let root = dir.path().join("src");
    let config = Config::default();
    let driver = PassDriver::new(&config, PassOptions::default());

    for pass in all_passes(&config, &root) {
        driver.run(pass.as_ref(), &root).unwrap();
    }

    let rewritten = read_file(dir.path(), "src/a.js");
    // Renamed bindings must be gone entirely; `_alpha` is not a match for
    // `alpha` under identifier-text search.
    assert_eq!(count_in_source(&rewritten, "alpha"), 0);
    assert_eq!(count_in_source(&rewritten, "omega"), 0);
    assert_eq!(count_in_source(&rewritten, "_alpha"), 1);
    assert!(count_in_source(&rewritten, "beta") >= 2);
}

// ============================================================================
// Cascade removal
// ============================================================================

#[test]
fn test_emptied_import_declaration_is_absent() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/b.ts",
        "import { Foo, Bar } from 'dead-lib';\nimport { Used } from 'live-lib';\nUsed();\n",
    );
    let root = dir.path().join("src");

    run_pass(&sweepjs::UnusedImportsPass, &root);

    let rewritten = read_file(dir.path(), "src/b.ts");
    assert!(!rewritten.contains("dead-lib"));
    assert!(!rewritten.contains("import {  }"));
    assert_eq!(
        rewritten,
        "import { Used } from 'live-lib';\nUsed();\n"
    );
}

// ============================================================================
// Conservativeness of the reference counter
// ============================================================================

#[test]
fn test_property_key_match_keeps_the_binding() {
    let dir = TempDir::new().unwrap();
    let source = "import { Foo } from 'lib';\nconst config = { Foo: 1 };\nexport { config };\n";
    write_file(dir.path(), "src/c.js", source);

    let modified = run_pass(&sweepjs::UnusedImportsPass, &dir.path().join("src"));

    assert_eq!(modified, 0);
    assert_eq!(read_file(dir.path(), "src/c.js"), source);
}

#[test]
fn test_string_match_keeps_the_binding() {
    let dir = TempDir::new().unwrap();
    let source = "const alpha = 1;\nconst label = \"alpha\";\nexport { label };\n";
    write_file(dir.path(), "src/d.js", source);

    let modified = run_pass(&sweepjs::UnusedVariablesPass, &dir.path().join("src"));

    assert_eq!(modified, 0);
    assert_eq!(read_file(dir.path(), "src/d.js"), source);
}

#[test]
fn test_shadowing_is_deliberately_not_understood() {
    // A scope-aware tool would flag the outer `delta`; the whole-file
    // heuristic must not.
    let dir = TempDir::new().unwrap();
    let source = "const delta = 1;\nfunction f() { const delta = 2; return delta; }\nexport { f };\n";
    write_file(dir.path(), "src/e.js", source);

    let modified = run_pass(&sweepjs::UnusedVariablesPass, &dir.path().join("src"));

    assert_eq!(modified, 0);
    assert_eq!(read_file(dir.path(), "src/e.js"), source);
}

// ============================================================================
// Pass composition
// ============================================================================

#[test]
fn test_import_removal_unlocks_rename_on_next_pass() {
    // The module path string "stale" counts as a textual occurrence, so the
    // variable stays alive until the unused import cascades away. This is
    // why the import pass runs first in the recommended order.
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/f.js",
        "import { Foo } from 'stale';\nconst stale = 1;\n",
    );
    let root = dir.path().join("src");

    let untouched = run_pass(&sweepjs::UnusedVariablesPass, &root);
    assert_eq!(untouched, 0);

    run_pass(&sweepjs::UnusedImportsPass, &root);
    let modified = run_pass(&sweepjs::UnusedVariablesPass, &root);

    assert_eq!(modified, 1);
    assert_eq!(read_file(dir.path(), "src/f.js"), "const _stale = 1;\n");
}

#[test]
fn test_passes_compose_in_either_order() {
    let fixture = "import { Foo } from 'lib';\nconst stale = 1;\nconst live = 2;\nexport { live };\n";
    let expected = "const _stale = 1;\nconst live = 2;\nexport { live };\n";

    let forward = TempDir::new().unwrap();
    write_file(forward.path(), "src/g.js", fixture);
    run_pass(&sweepjs::UnusedImportsPass, &forward.path().join("src"));
    run_pass(&sweepjs::UnusedVariablesPass, &forward.path().join("src"));

    let reverse = TempDir::new().unwrap();
    write_file(reverse.path(), "src/g.js", fixture);
    run_pass(&sweepjs::UnusedVariablesPass, &reverse.path().join("src"));
    run_pass(&sweepjs::UnusedImportsPass, &reverse.path().join("src"));

    assert_eq!(read_file(forward.path(), "src/g.js"), expected);
    assert_eq!(read_file(reverse.path(), "src/g.js"), expected);
}
