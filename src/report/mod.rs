//! Output document generation.
//!
//! Serializes the collected result set to the JSON document the dashboard
//! consumes, and renders an optional Markdown comparison summary.

use crate::models::ResultSet;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

/// Serialize the result set as a pretty-printed JSON document.
pub fn generate_json_document(results: &ResultSet) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(Into::into)
}

/// Render a Markdown comparison summary of the collected metrics.
pub fn generate_markdown_summary(results: &ResultSet) -> String {
    let mut output = String::new();

    output.push_str("# Multiplier Metrics Summary\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
        .push_str("| Implementation | Area (gates) | Power (mW) | Delay (ns) | Throughput (MHz) |\n");
    output.push_str("|:---|---:|---:|---:|---:|\n");
    for (name, record) in results.iter() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            name, record.area, record.power, record.delay, record.throughput
        ));
    }
    output.push('\n');

    output.push_str("## Source Files\n\n");
    for (name, record) in results.iter() {
        output.push_str(&format!("### {}\n\n", name));
        output.push_str(&format!(
            "- Synthesis report: `{}`\n",
            record.synthesis_report
        ));
        output.push_str(&format!(
            "- Simulation results: `{}`\n",
            record.simulation_results
        ));
        output.push_str(&format!("- RTL source: `{}`\n", record.rtl_code));
        output.push('\n');
    }

    output
}

/// Write a rendered document to `path`, creating parent directories first.
///
/// This is the only fatal path in a run: failure to create the directory
/// chain or write the file propagates to the caller.
pub fn write_document(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;

    Ok(())
}

/// Persist the result set as JSON at `path`, overwriting prior content.
pub fn persist(results: &ResultSet, path: &Path) -> Result<()> {
    let document = generate_json_document(results)?;
    write_document(&document, path)
}
