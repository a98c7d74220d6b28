//! sweepjs - Fast unused-binding codemods for JavaScript/TypeScript
//!
//! This library provides static analysis and source rewriting for JS/TS
//! projects: finding unused imports, destructured elements, and variable
//! declarations, and fixing them in place.
//!
//! # Architecture
//!
//! Each codemod pass is a pipeline of:
//! 1. **File Discovery** - Find all .js, .jsx, .ts, .tsx files
//! 2. **Parsing** - Parse source files using tree-sitter
//! 3. **Binding Analysis** - Collect bindings and count identifier references
//! 4. **Rewriting** - Plan byte-range edits against the parse tree
//! 5. **Persistence** - Atomically write modified files back to disk
//! 6. **Reporting** - Output a per-pass summary in various formats

pub mod config;
pub mod discovery;
pub mod parser;
pub mod analysis;
pub mod rewrite;
pub mod passes;
pub mod report;
pub mod watch;

pub use config::Config;
pub use discovery::{FileFinder, FileType, SourceFile};
pub use parser::{JsParser, SourceTree};
pub use analysis::{count_identifier_text, is_unused, IconResolver};
pub use rewrite::{Edit, RewriteError};
pub use passes::{
    all_passes, resolve_root, Pass, PassDriver, PassOptions, PassSummary,
    IconImportsPass, UnusedDestructuredPass, UnusedImportsPass, UnusedVariablesPass,
};
pub use report::{Reporter, ReportFormat};

/// Initialize the tracing subscriber shared by every sweepjs binary
pub fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}
