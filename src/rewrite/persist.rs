use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::Path;
use tracing::debug;

/// Write rewritten contents back to `path` if they differ from the original.
///
/// The write goes to a temp file in the same directory followed by a rename,
/// so an interrupted run never leaves a half-written source file. Unchanged
/// files are left alone entirely (no mtime churn). Returns whether the file
/// was written.
pub fn persist(path: &Path, original: &str, rewritten: &str) -> Result<bool> {
    if original == rewritten {
        return Ok(false);
    }

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("sweepjs");
    let tmp = dir.join(format!(".{file_name}.sweepjs~"));

    std::fs::write(&tmp, rewritten)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to replace {}", path.display()))?;

    debug!("Wrote {}", path.display());
    Ok(true)
}
