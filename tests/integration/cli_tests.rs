//! CLI integration tests
//!
//! These tests verify that the sweepjs binaries work correctly with
//! various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

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

fn sweepjs() -> Command {
    Command::cargo_bin("sweepjs").expect("binary not built")
}

/// Tree with one rewritable file and one clean file
fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/unused.js",
        "import { Foo, Bar } from 'lib';\nBar();\n",
    );
    write_file(dir.path(), "src/clean.js", "export const ok = 1;\n");
    dir
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    sweepjs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sweepjs"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--parallel"));
}

#[test]
fn test_cli_version() {
    sweepjs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sweepjs"));
}

#[test]
fn test_cli_sweeps_fixture_tree() {
    let dir = fixture_tree();

    sweepjs()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("removed Foo from 'lib'"))
        .stdout(predicate::str::contains("1 of 2 files modified"));

    assert_eq!(
        read_file(dir.path(), "src/unused.js"),
        "import { Bar } from 'lib';\nBar();\n"
    );
    assert_eq!(read_file(dir.path(), "src/clean.js"), "export const ok = 1;\n");
}

#[test]
fn test_cli_src_root_env_var() {
    let dir = fixture_tree();

    sweepjs()
        .env("SRC_ROOT", dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 files modified"));

    assert_eq!(
        read_file(dir.path(), "src/unused.js"),
        "import { Bar } from 'lib';\nBar();\n"
    );
}

#[test]
fn test_cli_root_flag_beats_env_var() {
    let flag_dir = fixture_tree();
    let env_dir = fixture_tree();

    sweepjs()
        .env("SRC_ROOT", env_dir.path().join("src"))
        .args(["--root"])
        .arg(flag_dir.path().join("src"))
        .assert()
        .success();

    // Only the flag's tree was rewritten
    assert_eq!(
        read_file(flag_dir.path(), "src/unused.js"),
        "import { Bar } from 'lib';\nBar();\n"
    );
    assert_eq!(
        read_file(env_dir.path(), "src/unused.js"),
        "import { Foo, Bar } from 'lib';\nBar();\n"
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_cli_missing_root_fails() {
    sweepjs()
        .args(["--root", "/nonexistent/path/to/sweep"])
        .assert()
        .failure();
}

#[test]
fn test_cli_empty_directory_succeeds() {
    let dir = TempDir::new().unwrap();

    sweepjs()
        .args(["--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No JavaScript or TypeScript files found",
        ));
}

#[test]
fn test_cli_zero_changes_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/clean.js", "export const ok = 1;\n");

    sweepjs()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 1 files modified"));
}

#[test]
fn test_cli_parse_error_is_logged_and_run_continues() {
    let dir = fixture_tree();
    write_file(dir.path(), "src/broken.js", "const = = nope(;\n");

    sweepjs()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("broken.js"));

    assert_eq!(
        read_file(dir.path(), "src/unused.js"),
        "import { Bar } from 'lib';\nBar();\n"
    );
}

// ============================================================================
// Mode Tests
// ============================================================================

#[test]
fn test_cli_dry_run_writes_nothing() {
    let dir = fixture_tree();
    let before = read_file(dir.path(), "src/unused.js");

    sweepjs()
        .args(["--dry-run", "--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(read_file(dir.path(), "src/unused.js"), before);
}

#[test]
fn test_cli_pass_selection_flags() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/mixed.js",
        "import { Foo } from 'lib';\nconst { alpha } = getThing();\nexport { getThing };\nfunction getThing() { return {}; }\n",
    );

    // Only the import pass runs; the destructured binding stays untouched
    sweepjs()
        .args(["--imports", "--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success();

    let rewritten = read_file(dir.path(), "src/mixed.js");
    assert!(!rewritten.contains("import"));
    assert!(rewritten.contains("{ alpha }"));
}

#[test]
fn test_cli_parallel_mode() {
    let dir = fixture_tree();

    sweepjs()
        .args(["--parallel", "--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 files modified"));
}

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn test_cli_json_output() {
    let dir = fixture_tree();

    let output = sweepjs()
        .args(["--format", "json", "--quiet", "--root"])
        .arg(dir.path().join("src"))
        .output()
        .expect("failed to run sweepjs");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    assert_eq!(report["files_modified"], 1);
    assert_eq!(report["dry_run"], false);
    let passes = report["passes"].as_array().unwrap();
    assert!(passes.iter().any(|p| p["name"] == "unused-imports"));
}

#[test]
fn test_cli_json_output_to_file() {
    let dir = fixture_tree();
    let report_path = dir.path().join("report.json");

    sweepjs()
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&report_path)
        .arg("--root")
        .arg(dir.path().join("src"))
        .assert()
        .success();

    let contents = fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(report["files_modified"], 1);
}

// ============================================================================
// Standalone pass binaries
// ============================================================================

#[test]
fn test_standalone_import_binary() {
    let dir = fixture_tree();

    Command::cargo_bin("sweepjs-remove-unused-imports")
        .unwrap()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("removed Foo from 'lib'"));

    assert_eq!(
        read_file(dir.path(), "src/unused.js"),
        "import { Bar } from 'lib';\nBar();\n"
    );
}

#[test]
fn test_standalone_destructure_binary() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/a.js",
        "const { alpha, beta } = getThing();\nconsole.log(beta);\n",
    );

    Command::cargo_bin("sweepjs-prefix-unused-destructured")
        .unwrap()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed alpha -> _alpha"));

    assert_eq!(
        read_file(dir.path(), "src/a.js"),
        "const { _alpha, beta } = getThing();\nconsole.log(beta);\n"
    );
}

#[test]
fn test_standalone_vars_binary_dry_run() {
    let dir = TempDir::new().unwrap();
    let source = "const stale = 1;\n";
    write_file(dir.path(), "src/a.js", source);

    Command::cargo_bin("sweepjs-rename-unused-vars")
        .unwrap()
        .args(["--dry-run", "--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed stale -> _stale"));

    assert_eq!(read_file(dir.path(), "src/a.js"), source);
}

#[test]
fn test_standalone_icon_binary() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "node_modules/@mui/icons-material/Save.js",
        "export default 0;",
    );
    write_file(
        dir.path(),
        "src/App.jsx",
        "import React from 'react';\nexport default () => <SaveIcon />;\n",
    );

    Command::cargo_bin("sweepjs-add-icon-imports")
        .unwrap()
        .args(["--root"])
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "added import SaveIcon from '@mui/icons-material/Save'",
        ));

    assert_eq!(
        read_file(dir.path(), "src/App.jsx"),
        "import React from 'react';\nimport SaveIcon from '@mui/icons-material/Save';\nexport default () => <SaveIcon />;\n"
    );
}
