use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use sweepjs::discovery::{FileFinder, FileStats};
use sweepjs::passes::{all_passes, resolve_root, PassDriver, PassOptions, PassSummary};
use sweepjs::report::{ReportFormat, Reporter};
use sweepjs::watch::FileWatcher;
use sweepjs::{init_logging, Config};

/// sweepjs - Fast unused-binding codemods for JavaScript/TypeScript
#[derive(Parser, Debug)]
#[command(name = "sweepjs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the source tree to rewrite (defaults to SRC_ROOT or "src")
    #[arg(long)]
    root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target directories relative to the root (can be specified multiple times)
    #[arg(short, long)]
    target: Vec<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Run the unused named-import removal pass
    #[arg(long)]
    imports: bool,

    /// Run the unused destructured-element prefix pass
    #[arg(long)]
    destructured: bool,

    /// Run the unused variable prefix pass
    #[arg(long)]
    variables: bool,

    /// Run the missing icon-import insertion pass
    #[arg(long)]
    icons: bool,

    /// Show planned changes without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Confirm each modified file before writing
    #[arg(long)]
    interactive: bool,

    /// Process files in parallel
    #[arg(long)]
    parallel: bool,

    /// Re-run the selected passes when source files change
    #[arg(long)]
    watch: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("sweepjs v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let root = resolve_root(cli.root.clone());

    if cli.watch {
        run_watch_mode(&config, &cli, &root)
    } else {
        let options = PassOptions {
            dry_run: cli.dry_run,
            interactive: cli.interactive,
            parallel: cli.parallel && !cli.interactive,
            progress: matches!(cli.format, OutputFormat::Terminal)
                && !cli.quiet
                && !cli.parallel
                && !cli.interactive,
        };
        run_sweep(
            &config,
            &root,
            cli.format.clone().into(),
            cli.output.clone(),
            options,
            cli.quiet,
        )
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(Path::new("."))?
    };

    // Override with CLI arguments
    if !cli.target.is_empty() {
        config.targets = cli.target.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }

    // Explicit pass flags replace the configured selection
    if cli.imports || cli.destructured || cli.variables || cli.icons {
        config.passes.unused_imports = cli.imports;
        config.passes.unused_destructured = cli.destructured;
        config.passes.unused_variables = cli.variables;
        config.passes.icon_imports = cli.icons;
    }

    Ok(config)
}

fn run_sweep(
    config: &Config,
    root: &Path,
    format: ReportFormat,
    output: Option<PathBuf>,
    options: PassOptions,
    quiet: bool,
) -> Result<()> {
    let start_time = Instant::now();

    info!("Discovering files...");
    let finder = FileFinder::new(config);
    let files = finder.find_files(root)?;

    if files.is_empty() {
        println!("{}", "No JavaScript or TypeScript files found.".yellow());
        return Ok(());
    }

    let stats = FileStats::from_files(&files);
    debug!(
        "Found {} files ({} js, {} jsx, {} ts, {} tsx)",
        stats.total(),
        stats.javascript_files,
        stats.jsx_files,
        stats.typescript_files,
        stats.tsx_files
    );

    let driver = PassDriver::new(config, options);
    let mut summaries: Vec<PassSummary> = Vec::new();
    for pass in all_passes(config, root) {
        summaries.push(driver.run(pass.as_ref(), root)?);
    }

    let reporter = Reporter::new(format, output);
    reporter.report(&summaries, options.dry_run)?;

    let elapsed = start_time.elapsed();
    if !quiet {
        println!(
            "{}",
            format!(
                "⏱  Swept {} files in {:.2}s",
                files.len(),
                elapsed.as_secs_f64()
            )
            .dimmed()
        );
    }

    Ok(())
}

fn run_watch_mode(config: &Config, cli: &Cli, root: &Path) -> Result<()> {
    let watcher = FileWatcher::new().with_extensions(config.extensions.clone());

    // Clone what we need for the closure
    let config = config.clone();
    let sweep_root = root.to_path_buf();
    let cli_format = cli.format.clone();
    let cli_output = cli.output.clone();
    let cli_quiet = cli.quiet;
    let options = PassOptions {
        dry_run: cli.dry_run,
        interactive: false, // prompts make no sense in a watch loop
        parallel: cli.parallel,
        progress: false,
    };

    watcher
        .watch(root, move || {
            match run_sweep(
                &config,
                &sweep_root,
                cli_format.clone().into(),
                cli_output.clone(),
                options,
                cli_quiet,
            ) {
                Ok(_) => {
                    println!();
                    println!("{}", "✓ Sweep complete. Waiting for changes...".green());
                    true
                }
                Err(e) => {
                    eprintln!("{}: {}", "Sweep error".red(), e);
                    true // Continue watching
                }
            }
        })
        .map_err(|e| miette::miette!("Watch error: {}", e))?;

    Ok(())
}
