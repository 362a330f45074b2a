//! CLI entry point for depsift

use std::path::PathBuf;
use std::process;

use clap::Parser;
use depsift::{AuditError, Auditor, ColorWhen, OutputConfig, WalkerConfig, print_json, print_report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "depsift")]
#[command(about = "Sort a Go module's imports and find go.sum entries nothing imports directly")]
#[command(version)]
struct Args {
    /// Directory to audit
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorWhen,

    /// Honor .gitignore files and skip hidden entries while walking
    #[arg(long = "gitignore")]
    gitignore: bool,

    /// Skip files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Log each visited file to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("depsift=debug")
        } else {
            EnvFilter::new("depsift=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<(), AuditError> {
    let walker_config = WalkerConfig {
        respect_gitignore: args.gitignore,
        ignore_patterns: args.ignore.clone(),
    };

    let report = Auditor::run(&args.path, walker_config)?;

    let written = if args.json {
        print_json(&report)
    } else {
        print_report(&report, &OutputConfig::new(args.color))
    };
    written.map_err(|source| AuditError::Output { source })
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("depsift: {}", e);
        process::exit(1);
    }
}
