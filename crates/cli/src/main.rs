mod commands;
mod table;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gedcom_core::{Elaborated, GedcomError, Pipeline, PipelineOptions};
use time::Date;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// GEDCOM validator and anomaly checker.
#[derive(Parser)]
#[command(name = "gedcom", version, about = "GEDCOM validator and anomaly checker")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every line with its level, tag and validity
    Validate {
        /// Path to the .ged file
        file: PathBuf,
    },

    /// Print the individuals and families tables
    Tables {
        /// Path to the .ged file
        file: PathBuf,
        /// Reference date for ages (YYYY-MM-DD). Default: today (UTC).
        #[arg(long, value_parser = parse_today)]
        today: Option<Date>,
    },

    /// Run the anomaly and classification rules
    Check {
        /// Path to the .ged file
        file: PathBuf,
        /// Comma-separated list of rules to run (r1,r2,r3). Default: all.
        #[arg(long)]
        rules: Option<String>,
        /// Reference date for ages and recent births (YYYY-MM-DD). Default: today (UTC).
        #[arg(long, value_parser = parse_today)]
        today: Option<Date>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Validate { file } => {
            commands::validate::cmd_validate(&file, cli.output, cli.quiet);
        }
        Commands::Tables { file, today } => {
            commands::tables::cmd_tables(&file, today, cli.output, cli.quiet);
        }
        Commands::Check { file, rules, today } => {
            commands::check::cmd_check(&file, rules.as_deref(), today, cli.output, cli.quiet);
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, 2) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_today(s: &str) -> Result<Date, String> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(s, &format).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Run the pipeline over `file`, or report the error and exit 1.
pub(crate) fn elaborate_or_exit(
    file: &std::path::Path,
    today: Option<Date>,
    output: OutputFormat,
    quiet: bool,
) -> Elaborated {
    match Pipeline::new(PipelineOptions { today }).run_path(file) {
        Ok(out) => out,
        Err(e) => {
            report_gedcom_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn report_gedcom_error(e: &GedcomError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", e);
            }
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
    println!("{}", json);
}
