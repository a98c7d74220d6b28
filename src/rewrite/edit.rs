use thiserror::Error;

/// A planned byte-range replacement against a file's original text.
///
/// Edits carry offsets into the *original* source; they are resolved in a
/// single splice so untouched regions round-trip byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl Edit {
    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            replacement: String::new(),
        }
    }

    pub fn replace(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            replacement: text.into(),
        }
    }
}

/// Errors from the rewrite primitives
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("edit range {start}..{end} is outside the {len}-byte source")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("overlapping edits at byte {at}")]
    Overlap { at: usize },

    #[error("'{name}' is already imported from '{module}'")]
    DuplicateImport { name: String, module: String },
}

/// Splice a set of edits into the original source text.
///
/// Ranges may touch but never overlap; insertions at the same offset are
/// kept in plan order.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, RewriteError> {
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.start, e.end));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;

    for edit in sorted {
        if edit.end > source.len() || edit.start > edit.end {
            return Err(RewriteError::OutOfBounds {
                start: edit.start,
                end: edit.end,
                len: source.len(),
            });
        }
        if edit.start < cursor {
            return Err(RewriteError::Overlap { at: edit.start });
        }

        out.push_str(&source[cursor..edit.start]);
        out.push_str(&edit.replacement);
        cursor = edit.end;
    }

    out.push_str(&source[cursor..]);
    Ok(out)
}
