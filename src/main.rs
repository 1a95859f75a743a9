//! SynthMetrics - Multiplier Synthesis/Simulation Metrics Collector
//!
//! A CLI tool that scrapes synthesis reports and simulation results for a
//! fixed set of multiplier RTL designs and aggregates area, power, delay,
//! and throughput into a single JSON document for the dashboard.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (output directory/file could not be written, etc.)

mod cli;
mod collector;
mod config;
mod extract;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use collector::Collector;
use config::Config;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("SynthMetrics v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the collection
    match run_collection(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Collection failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .synthmetrics.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".synthmetrics.toml");

    if path.exists() {
        eprintln!("⚠️  .synthmetrics.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .synthmetrics.toml")?;

    println!("✅ Created .synthmetrics.toml with default settings.");
    println!("   Edit it to customize the base directory and output path.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete collection workflow. Returns the exit code.
fn run_collection(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let base_dir = config.base_dir();
    let output = config.output_path();

    let collector = Collector::new(&base_dir).context("Failed to compile report patterns")?;

    // Handle --dry-run: check report availability and exit
    if args.dry_run {
        return handle_dry_run(&collector);
    }

    // Step 1: Collect metrics for every implementation
    println!("📊 Starting metrics collection...");
    println!("   Base directory: {}", base_dir.display());
    println!("   Implementations: {}", collector.implementations().len());
    println!();

    let results = collector.collect();

    // Step 2: Write the aggregated document
    match args.format {
        OutputFormat::Json => report::persist(&results, &output)?,
        OutputFormat::Markdown => {
            let summary = report::generate_markdown_summary(&results);
            report::write_document(&summary, &output)?;
        }
    }

    println!("\n✅ Metrics collected and saved to {}", output.display());

    Ok(0)
}

/// Handle --dry-run: report which input files exist, write nothing.
fn handle_dry_run(collector: &Collector) -> Result<i32> {
    println!("\n🔍 Dry run: checking report availability (nothing will be written)...\n");

    for spec in collector.implementations() {
        println!("  {}", spec.name);
        print_availability("synthesis report", &spec.synthesis_report);
        print_availability("simulation results", &spec.simulation_results);
        print_availability("rtl source", &spec.rtl_code);
    }

    println!("\n✅ Dry run complete. No output was written.");
    Ok(0)
}

/// Print one availability line for a report file.
fn print_availability(kind: &str, path: &Path) {
    let marker = if path.exists() { "✅" } else { "⚠️ " };
    println!("    {} {}: {}", marker, kind, path.display());
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .synthmetrics.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
