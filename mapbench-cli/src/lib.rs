#![warn(missing_docs)]
//! mapbench CLI Library
//!
//! Command-line entry point for the mapping benchmark. With no flags and no
//! `mapbench.toml` it prints the alphabet followed by four timing lines:
//!
//! ```text
//! ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n']
//! for loop ran in 0.012345 s
//! list comp ran in 0.006789 s
//! for loop ran in 0.004321 s
//! list comp ran in 0.002468 s
//! ```
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     mapbench_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    ExecutionConfig, ExecutionResult, Executor, build_report, format_alphabet,
    format_human_output, format_timing_line,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mapbench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use std::io::IsTerminal;
use std::path::PathBuf;

/// mapbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "mapbench")]
#[command(
    author,
    version,
    about = "Times explicit accumulation against iterator collection for elementwise mapping"
)]
pub struct Cli {
    /// Optional subcommand; defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: discover mapbench.toml upwards from cwd)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Characters the character workload draws from
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Number of random characters to map
    #[arg(long)]
    pub characters: Option<usize>,

    /// Length of the integer sequence to map
    #[arg(long)]
    pub integers: Option<usize>,

    /// Seed the random generator for reproducible input
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the output equivalence check
    #[arg(long)]
    pub no_verify: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark (default)
    Run,
    /// Print a default mapbench.toml
    Init,
}

/// Run the mapbench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the mapbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", MapbenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = MapbenchConfig::resolve(cli.config.as_deref())?;
            run_benchmark(&cli, &config)
        }
    }
}

/// Logs go to stderr; stdout carries only the report.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "mapbench=debug"
    } else {
        "mapbench=info"
    };
    // A subscriber may already be installed (e.g. repeated calls in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build an ExecutionConfig by layering: mapbench.toml defaults → CLI overrides.
pub fn build_execution_config(cli: &Cli, config: &MapbenchConfig) -> ExecutionConfig {
    let alphabet = cli
        .alphabet
        .as_deref()
        .unwrap_or(&config.workload.alphabet)
        .chars()
        .collect();

    ExecutionConfig {
        alphabet,
        character_count: cli.characters.unwrap_or(config.workload.character_count),
        integer_count: cli.integers.unwrap_or(config.workload.integer_count),
        seed: cli.seed.or(config.workload.seed),
        verify_equivalence: config.runner.verify_equivalence && !cli.no_verify,
    }
}

/// Resolve the output format: CLI wins, then mapbench.toml
pub fn resolve_output_format(cli: &Cli, config: &MapbenchConfig) -> anyhow::Result<OutputFormat> {
    cli.format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Human => format_human_output(report),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
    })
}

fn run_benchmark(cli: &Cli, config: &MapbenchConfig) -> anyhow::Result<()> {
    let format = resolve_output_format(cli, config)?;
    let exec_config = build_execution_config(cli, config);

    tracing::debug!(?exec_config, ?format, "resolved configuration");

    let mut executor =
        Executor::new(exec_config.clone()).with_progress(std::io::stderr().is_terminal());
    let result = executor.execute()?;
    let report = build_report(&result, &exec_config);
    let output = render_report(&report, format)?;

    match cli.output.as_ref().or(config.output.path.as_ref()) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, output.as_bytes())
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => print!("{}", output),
    }

    ensure_equivalent(&result)
}

/// Fail when any workload's strategies disagreed
pub fn ensure_equivalent(result: &ExecutionResult) -> anyhow::Result<()> {
    let mismatched: Vec<String> = result.mismatches().map(|c| c.workload.to_string()).collect();
    if !mismatched.is_empty() {
        anyhow::bail!(
            "strategies produced different output for: {}",
            mismatched.join(", ")
        );
    }
    Ok(())
}
