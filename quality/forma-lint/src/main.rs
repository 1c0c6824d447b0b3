//! forma-lint CLI - heuristic FORMA diagnostics

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use forma_lint::{
    project, simulate_output, AnalysisResult, Analyzer, AnalyzerConfig, Severity, TextFormatter,
};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "forma-lint")]
#[command(about = "Heuristic diagnostics for FORMA source files")]
#[command(version)]
struct Cli {
    /// FORMA file to check (or - for stdin)
    file: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Config file path (default: auto-detect .formalintrc.json)
    #[arg(short, long, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not look for a config file
    #[arg(long)]
    no_config: bool,

    /// Only show errors (text and json formats)
    #[arg(long)]
    errors_only: bool,

    /// Also print the output simulated from print() calls (stderr for JSON formats)
    #[arg(long)]
    simulate: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Issue list with a metrics summary
    Text,
    /// Full analysis result as JSON
    Json,
    /// Single-issue diagnostic report as JSON
    Report,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    if let Some(path) = &cli.config {
        return AnalyzerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    if cli.no_config {
        return Ok(AnalyzerConfig::default());
    }

    let start_dir = std::env::current_dir().context("failed to read current directory")?;
    match AnalyzerConfig::find_and_load(&start_dir)? {
        Some((path, config)) => {
            info!("using config {}", path.display());
            Ok(config)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn read_source(file: &str) -> Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read {file}"))
    }
}

fn run(cli: Cli) -> Result<bool> {
    let analyzer = Analyzer::with_config(load_config(&cli)?)?;
    debug!("thresholds: {:?}", analyzer.config());
    let source = read_source(&cli.file)?;
    debug!("checking {} ({} bytes)", cli.file, source.len());

    let result = analyzer.analyze(&source);
    let has_errors = result.has_errors();

    match cli.format {
        OutputFormat::Text => {
            let shown = filtered(&result, cli.errors_only);
            let formatter = if cli.no_color {
                TextFormatter::new().without_color()
            } else {
                TextFormatter::new()
            };
            print!("{}", formatter.format(&shown));
        }
        OutputFormat::Json => {
            let shown = filtered(&result, cli.errors_only);
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        OutputFormat::Report => {
            println!("{}", serde_json::to_string_pretty(&project(&result))?);
        }
    }

    if cli.simulate {
        let simulation = simulate_output(&source);
        match cli.format {
            OutputFormat::Text => println!("\n{simulation}"),
            // keep stdout a single JSON document
            OutputFormat::Json | OutputFormat::Report => eprintln!("{simulation}"),
        }
    }

    Ok(has_errors)
}

fn filtered(result: &AnalysisResult, errors_only: bool) -> AnalysisResult {
    let mut shown = result.clone();
    if errors_only {
        shown.issues.retain(|i| i.severity == Severity::Error);
    }
    shown
}
