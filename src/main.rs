//! CLI entry point for the citation hotspot report generator.
//!
//! Reads a parking-citation log, buckets citations by hour, weekday, street
//! and violation, and writes the resulting hotspot report as JSON.

use anyhow::Result;
use citation_hotspots::analyzers::report::assemble;
use citation_hotspots::analyzers::types::{HotspotReport, ReportLimits};
use citation_hotspots::output::{log_summary, write_report};
use citation_hotspots::parser::DEFAULT_REFERENCE_YEAR;
use citation_hotspots::source::load_records;
use citation_hotspots::stats::CitationStats;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "citation_hotspots")]
#[command(about = "Summarize parking citation hotspots by time and street", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the hotspot report and write it to disk
    Generate {
        /// Citation log (CSV with a header row)
        #[arg(short, long, env = "CITATIONS_INPUT", default_value = "citations_2025.csv")]
        input: PathBuf,

        /// JSON file to write the report to
        #[arg(short, long, env = "HOTSPOTS_OUTPUT", default_value = "citation_hotspots.json")]
        output: PathBuf,

        /// Year that month/day dates are resolved against
        #[arg(short, long, env = "CITATIONS_YEAR", default_value_t = DEFAULT_REFERENCE_YEAR)]
        year: i32,

        /// Number of streets to keep in the ranking
        #[arg(long, default_value_t = ReportLimits::default().top_streets)]
        top_streets: usize,

        /// Number of violation types to keep in the ranking
        #[arg(long, default_value_t = ReportLimits::default().top_violations)]
        top_violations: usize,

        /// Gzip compress the report (appends .gz to the output path)
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Print the summary lines without writing a report
    Summarize {
        /// Citation log (CSV with a header row)
        #[arg(short, long, env = "CITATIONS_INPUT", default_value = "citations_2025.csv")]
        input: PathBuf,

        /// Year that month/day dates are resolved against
        #[arg(short, long, env = "CITATIONS_YEAR", default_value_t = DEFAULT_REFERENCE_YEAR)]
        year: i32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/citation_hotspots.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("citation_hotspots.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            year,
            top_streets,
            top_violations,
            gzip,
        } => {
            let limits = ReportLimits {
                top_streets,
                top_violations,
                ..ReportLimits::default()
            };
            let report = build_report(&input, year, &limits)?;

            let written = write_report(&output, &report, gzip)?;
            info!(path = %written.display(), "Generated {}", written.display());
            log_summary(&report);
        }
        Commands::Summarize { input, year } => {
            let report = build_report(&input, year, &ReportLimits::default())?;
            log_summary(&report);
        }
    }

    Ok(())
}

/// Reads the citation log and folds it into a finished report.
#[tracing::instrument(skip_all, fields(input = %input.display(), year = year))]
fn build_report(input: &Path, year: i32, limits: &ReportLimits) -> Result<HotspotReport> {
    let records = load_records(input)?;
    let stats = CitationStats::from_records(&records, year);

    info!(
        rows = records.len(),
        citations = stats.total,
        skipped = stats.skipped_records,
        unparsed_times = stats.unparsed_times,
        streets = stats.street_counts.len(),
        violations = stats.violation_counts.len(),
        "Citation log aggregated"
    );

    Ok(assemble(&stats, limits))
}
