use clap::Parser;
use miette::Result;
use std::path::{Path, PathBuf};

use sweepjs::passes::{resolve_root, PassDriver, PassOptions, UnusedImportsPass};
use sweepjs::report::{ReportFormat, Reporter};
use sweepjs::{init_logging, Config};

/// Remove unused named imports across a JS/TS source tree
#[derive(Parser, Debug)]
#[command(name = "sweepjs-remove-unused-imports")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the source tree to rewrite (defaults to SRC_ROOT or "src")
    #[arg(long)]
    root: Option<PathBuf>,

    /// Show planned changes without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config::from_default_locations(Path::new("."))?;
    let root = resolve_root(cli.root);

    let options = PassOptions {
        dry_run: cli.dry_run,
        ..Default::default()
    };
    let driver = PassDriver::new(&config, options);
    let summary = driver.run(&UnusedImportsPass, &root)?;

    Reporter::new(ReportFormat::Terminal, None).report(&[summary], cli.dry_run)
}
