//! Aggregation of per-implementation metrics.
//!
//! Holds the fixed table of multiplier implementations and drives the
//! report extractor over it, merging everything into a single [`ResultSet`].

use crate::extract::ReportExtractor;
use crate::models::{AggregatedRecord, ImplementationSpec, ResultSet};
use std::path::Path;
use tracing::info;

/// The multiplier implementations and their design directories, in the
/// order they appear in the output document.
const IMPLEMENTATIONS: &[(&str, &str)] = &[
    (
        "8-bit Booth Signed",
        "8-bit modified booth multiplier with CLA_ripple adder",
    ),
    (
        "8-bit Booth Unsigned",
        "8-bit unsigned modified booth multiplier with CLA_ripple adder",
    ),
    (
        "16-bit Wallace Tree Signed",
        "16-bit signed multiplier using wallace tree",
    ),
    (
        "16-bit Wallace Tree Unsigned",
        "16-bit unsigned multiplier using wallace tree",
    ),
    ("16-bit Array Signed", "Booth algorithm array multiplier"),
    ("16-bit Array Unsigned", "Array multiplier for unsigned nos"),
];

/// Build the fixed implementation table rooted at `base_dir`.
pub fn implementation_table(base_dir: &Path) -> Vec<ImplementationSpec> {
    IMPLEMENTATIONS
        .iter()
        .map(|(name, dir)| ImplementationSpec::from_design_dir(name, base_dir, dir))
        .collect()
}

/// Collector that walks the implementation table in order.
pub struct Collector {
    extractor: ReportExtractor,
    implementations: Vec<ImplementationSpec>,
}

impl Collector {
    /// Create a collector for the fixed table rooted at `base_dir`.
    pub fn new(base_dir: &Path) -> Result<Self, regex::Error> {
        Ok(Self {
            extractor: ReportExtractor::new()?,
            implementations: implementation_table(base_dir),
        })
    }

    /// The implementations this collector will process, in table order.
    pub fn implementations(&self) -> &[ImplementationSpec] {
        &self.implementations
    }

    /// Collect metrics for every implementation, in table order.
    ///
    /// Never partially fails: a missing or unreadable report degrades that
    /// implementation's metrics to zero and the loop continues. Every
    /// configured implementation gets an entry in the result.
    pub fn collect(&self) -> ResultSet {
        let mut results = ResultSet::new();

        for spec in &self.implementations {
            info!("Processing {}...", spec.name);

            let synthesis = self.extractor.synthesis_metrics(&spec.synthesis_report);
            let throughput = self.extractor.throughput(&spec.simulation_results);
            let record = AggregatedRecord::merge(spec, synthesis, throughput);

            info!("Collected metrics for {}:", spec.name);
            info!("  Area: {} gates", record.area);
            info!("  Power: {} mW", record.power);
            info!("  Delay: {} ns", record.delay);
            info!("  Throughput: {} MHz", record.throughput);

            results.insert(spec.name.clone(), record);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const EXPECTED_NAMES: [&str; 6] = [
        "8-bit Booth Signed",
        "8-bit Booth Unsigned",
        "16-bit Wallace Tree Signed",
        "16-bit Wallace Tree Unsigned",
        "16-bit Array Signed",
        "16-bit Array Unsigned",
    ];

    #[test]
    fn test_table_has_six_implementations() {
        let table = implementation_table(Path::new("designs"));

        assert_eq!(table.len(), 6);
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, EXPECTED_NAMES);
    }

    #[test]
    fn test_collect_with_no_files_yields_zeroed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let collector = Collector::new(dir.path()).unwrap();

        let results = collector.collect();

        assert_eq!(results.len(), 6);
        let names: Vec<&str> = results.iter().map(|(name, _)| name).collect();
        assert_eq!(names, EXPECTED_NAMES);

        for (_, record) in results.iter() {
            assert_eq!(record.area, 0.0);
            assert_eq!(record.power, 0.0);
            assert_eq!(record.delay, 0.0);
            assert_eq!(record.throughput, 0.0);
        }
    }

    #[test]
    fn test_collect_reads_reports_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let design_dir = dir
            .path()
            .join("8-bit modified booth multiplier with CLA_ripple adder");
        fs::create_dir_all(&design_dir).unwrap();
        fs::write(
            design_dir.join("synthesis_report.txt"),
            "Total cell area: 1234.5\n\
             Total dynamic power: 12.3 mW\n\
             Critical path delay: 4.56 ns\n",
        )
        .unwrap();
        fs::write(
            design_dir.join("simulation_results.txt"),
            "Throughput: 250.0 MHz\n",
        )
        .unwrap();

        let collector = Collector::new(dir.path()).unwrap();
        let results = collector.collect();

        let booth = results.get("8-bit Booth Signed").unwrap();
        assert_eq!(booth.area, 1234.5);
        assert_eq!(booth.power, 12.3);
        assert_eq!(booth.delay, 4.56);
        assert_eq!(booth.throughput, 250.0);

        // Other designs have no files and stay zeroed.
        let wallace = results.get("16-bit Wallace Tree Signed").unwrap();
        assert_eq!(wallace.area, 0.0);
        assert_eq!(wallace.throughput, 0.0);
    }

    #[test]
    fn test_records_keep_paths_as_text_even_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let collector = Collector::new(dir.path()).unwrap();

        let results = collector.collect();
        let record = results.get("16-bit Array Unsigned").unwrap();

        assert!(record
            .synthesis_report
            .ends_with("Array multiplier for unsigned nos/synthesis_report.txt"));
        assert!(record
            .simulation_results
            .ends_with("Array multiplier for unsigned nos/simulation_results.txt"));
        assert!(record
            .rtl_code
            .ends_with("Array multiplier for unsigned nos/multiplier.v"));
    }
}
