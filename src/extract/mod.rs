//! Regex-based extraction of metrics from tool report files.
//!
//! Synthesis and simulation tools emit free-form text; the extractor scans
//! it for the handful of labeled figures this crate cares about. Extraction
//! never fails the run: a missing or unreadable report is logged and
//! degrades to zero-valued metrics.

use crate::models::SynthesisMetrics;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Why a report file could not be processed.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file does not exist.
    #[error("report not found: {0}")]
    Missing(PathBuf),

    /// The report exists but could not be read as text.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extractor holding the compiled report patterns.
pub struct ReportExtractor {
    area: Regex,
    power: Regex,
    delay: Regex,
    throughput: Regex,
}

impl ReportExtractor {
    /// Compile the report patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            area: Regex::new(r"Total cell area:\s*(\d+\.?\d*)")?,
            power: Regex::new(r"Total dynamic power:\s*(\d+\.?\d*)\s*mW")?,
            delay: Regex::new(r"Critical path delay:\s*(\d+\.?\d*)\s*ns")?,
            throughput: Regex::new(r"Throughput:\s*(\d+\.?\d*)\s*MHz")?,
        })
    }

    /// Extract area, power, and delay from a synthesis report.
    ///
    /// The three patterns match independently; a field whose pattern does
    /// not match keeps its zero default. Missing or unreadable files are
    /// logged and yield all zeros.
    pub fn synthesis_metrics(&self, path: &Path) -> SynthesisMetrics {
        let mut metrics = SynthesisMetrics::default();

        let content = match read_report(path) {
            Ok(content) => content,
            Err(ReportError::Missing(path)) => {
                warn!("Synthesis report not found at {}", path.display());
                return metrics;
            }
            Err(err) => {
                error!("Error parsing synthesis report: {}", err);
                return metrics;
            }
        };

        if let Some(area) = capture_number(&self.area, &content) {
            metrics.area = area;
        }
        if let Some(power) = capture_number(&self.power, &content) {
            metrics.power = power;
        }
        if let Some(delay) = capture_number(&self.delay, &content) {
            metrics.delay = delay;
        }

        debug!(
            "Extracted from {}: area={} power={} delay={}",
            path.display(),
            metrics.area,
            metrics.power,
            metrics.delay
        );

        metrics
    }

    /// Extract the throughput figure from a simulation results file.
    ///
    /// Returns 0.0 when the file is missing, unreadable, or contains no
    /// recognizable throughput line.
    pub fn throughput(&self, path: &Path) -> f64 {
        let content = match read_report(path) {
            Ok(content) => content,
            Err(ReportError::Missing(path)) => {
                warn!("Simulation results not found at {}", path.display());
                return 0.0;
            }
            Err(err) => {
                error!("Error parsing simulation results: {}", err);
                return 0.0;
            }
        };

        capture_number(&self.throughput, &content).unwrap_or(0.0)
    }
}

/// Read a report file, classifying the failure mode.
fn read_report(path: &Path) -> Result<String, ReportError> {
    if !path.exists() {
        return Err(ReportError::Missing(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| ReportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// First capture group of `re` in `content`, parsed as a float.
fn capture_number(re: &Regex, content: &str) -> Option<f64> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
