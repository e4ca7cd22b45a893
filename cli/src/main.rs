use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use switch_report_core::{ParsedRecord, SHOW_INTERFACE_FIELDS, validate_record};
use switch_report_parser::InterfaceStatusParser;
use switch_report_parser::output::{OutputFormat, format_record, format_records};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "switch-report")]
#[command(about = "Parse switch CLI status reports into typed records")]
#[command(version)]
struct Cli {
    /// Log parser diagnostics to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one `show interface` report from stdin.
    ParseStdin(ParseStdinArgs),
    /// Parse `show interface` reports from one or more files.
    ParseFile(ParseFileArgs),
    /// Check that JSON record files carry exactly the `show interface` fields.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Files containing captured report text.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Number of parallel parse jobs (default: number of CPUs).
    #[arg(long)]
    jobs: Option<usize>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// JSON record files, as written by `parse-file --format json`.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::ParseFile(args) => run_parse_file(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the formatted records.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;

    let record = InterfaceStatusParser
        .parse(&raw)
        .map_err(|err| format!("stdin: {err}"))?;
    println!("{}", format_record(&record, args.format)?);
    Ok(())
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let jobs = args.jobs.filter(|jobs| *jobs > 0).unwrap_or(0);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|err| format!("Failed to build thread pool: {err}"))?;

    let results: Vec<Result<(String, ParsedRecord), String>> = pool.install(|| {
        args.inputs
            .par_iter()
            .map(|path| parse_one_file(path))
            .collect()
    });

    let mut records = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(labelled) => records.push(labelled),
            Err(err) => failures.push(err),
        }
    }

    if !failures.is_empty() {
        return Err(failures.join("\n"));
    }

    info!(files = records.len(), "Parsed reports");
    let rendered = match records.as_slice() {
        [(_, record)] => format_record(record, args.format)?,
        _ => format_records(&records, args.format)?,
    };
    println!("{rendered}");
    Ok(())
}

fn parse_one_file(path: &Path) -> Result<(String, ParsedRecord), String> {
    let label = path.display().to_string();
    debug!(path = %label, "Parsing report file");

    let raw = fs::read_to_string(path).map_err(|err| format!("Failed to read '{label}': {err}"))?;
    let record = InterfaceStatusParser
        .parse(&raw)
        .map_err(|err| format!("{label}: {err}"))?;
    Ok((label, record))
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = Vec::new();

    for path in &args.inputs {
        let label = path.display().to_string();
        let raw =
            fs::read_to_string(path).map_err(|err| format!("Failed to read '{label}': {err}"))?;
        let record: ParsedRecord = serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{label}' as a record: {err}"))?;

        let errors = validate_record(&record, SHOW_INTERFACE_FIELDS);
        if errors.is_empty() {
            println!("OK {label}");
        } else {
            let detail = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            failures.push(format!("{label}: {detail}"));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
