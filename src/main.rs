//! CLI entry point for the sports-venue GeoJSON converter.
//!
//! Provides subcommands for converting the municipal sports-venue CSV into a
//! GeoJSON feature collection and for printing the run statistics without
//! writing any output.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sports_venue_geojson::{
    fetch::{BasicClient, fetch_bytes},
    output::{self, ConversionReport},
    parser::parse_rows,
    pipeline::convert_rows,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sports_venue_geojson")]
#[command(about = "Convert the Taipei sports venue CSV to GeoJSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a venue CSV from a file or URL into GeoJSON
    Convert {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// GeoJSON file to write
        #[arg(short, long, default_value = "sports_data.geojson")]
        output: String,

        /// Optional JSON summary report to write alongside the GeoJSON
        #[arg(long)]
        report: Option<String>,
    },
    /// Print conversion statistics without writing any files
    Stats {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/sports_venue_geojson.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sports_venue_geojson.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            source,
            output: output_path,
            report,
        } => {
            let bytes = fetcher(&source).await?;
            let rows = parse_rows(&bytes)?;
            info!(rows = rows.len(), "Input rows parsed");

            let conversion = convert_rows(&rows);

            output::write_feature_collection(&output_path, &conversion.collection)?;
            info!(
                path = %output_path,
                features = conversion.accepted(),
                "GeoJSON written"
            );

            if let Some(report_path) = report {
                let report = ConversionReport::from_conversion(&conversion);
                output::write_report(&report_path, &report)?;
                info!(path = %report_path, "Report written");
            }

            output::print_summary(&conversion);
        }
        Commands::Stats { source } => {
            let bytes = fetcher(&source).await?;
            let rows = parse_rows(&bytes)?;
            info!(rows = rows.len(), "Input rows parsed");

            let conversion = convert_rows(&rows);
            output::print_summary(&conversion);
        }
    }

    Ok(())
}

/// Loads CSV data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &String) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url)?
    };
    Ok(bytes)
}
