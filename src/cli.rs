//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// SynthMetrics - synthesis and simulation metrics collector
///
/// Scrapes synthesis reports and simulation results for a fixed set of
/// multiplier RTL designs and aggregates the figures into one JSON
/// document for the performance dashboard.
///
/// Examples:
///   synthmetrics
///   synthmetrics --base-dir ../designs --output data/metrics.json
///   synthmetrics --format markdown --output metrics.md
///   synthmetrics --dry-run
///   synthmetrics --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Directory containing the multiplier design subdirectories
    ///
    /// Defaults to the current directory. Can also be set via the
    /// SYNTHMETRICS_BASE_DIR env var or .synthmetrics.toml config.
    #[arg(short, long, value_name = "DIR", env = "SYNTHMETRICS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Output file path for the aggregated document
    ///
    /// Defaults to data/metrics.json.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (json, markdown)
    #[arg(long, default_value = "json", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .synthmetrics.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// List implementations and report availability without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .synthmetrics.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the aggregated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON format (default, consumed by the dashboard)
    #[default]
    Json,
    /// Markdown comparison summary
    Markdown,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref base_dir) = self.base_dir {
            if base_dir.as_os_str().is_empty() {
                return Err("Base directory must not be empty".to_string());
            }
        }

        if let Some(ref output) = self.output {
            if output.as_os_str().is_empty() {
                return Err("Output path must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
