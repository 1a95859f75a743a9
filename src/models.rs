//! Data models for the metrics collector.
//!
//! This module contains the core data structures used throughout
//! the application for representing multiplier implementations,
//! extracted metrics, and the aggregated result document.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the synthesis report inside a design directory.
pub const SYNTHESIS_REPORT_FILE: &str = "synthesis_report.txt";
/// File name of the simulation results inside a design directory.
pub const SIMULATION_RESULTS_FILE: &str = "simulation_results.txt";
/// File name of the RTL source inside a design directory.
pub const RTL_SOURCE_FILE: &str = "multiplier.v";

/// Metrics extracted from a synthesis report.
///
/// Fields default to zero; a metric that could not be extracted is
/// indistinguishable from a measured zero in the output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisMetrics {
    /// Estimated cell area in gate equivalents.
    pub area: f64,
    /// Total dynamic power in milliwatts.
    pub power: f64,
    /// Critical path delay in nanoseconds.
    pub delay: f64,
}

/// A multiplier implementation and the report files describing it.
#[derive(Debug, Clone)]
pub struct ImplementationSpec {
    /// Human-readable implementation name.
    pub name: String,
    /// Path to the synthesis report.
    pub synthesis_report: PathBuf,
    /// Path to the simulation results.
    pub simulation_results: PathBuf,
    /// Path to the RTL source. Referenced by path only, never parsed.
    pub rtl_code: PathBuf,
}

impl ImplementationSpec {
    /// Build a spec for a design directory under `base_dir`.
    pub fn from_design_dir(name: &str, base_dir: &Path, design_dir: &str) -> Self {
        let dir = base_dir.join(design_dir);
        Self {
            name: name.to_string(),
            synthesis_report: dir.join(SYNTHESIS_REPORT_FILE),
            simulation_results: dir.join(SIMULATION_RESULTS_FILE),
            rtl_code: dir.join(RTL_SOURCE_FILE),
        }
    }
}

/// The merged per-implementation entry written to the output document.
///
/// Serde serializes fields in declaration order; the key order below is
/// part of the document format consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Cell area in gate equivalents.
    pub area: f64,
    /// Dynamic power in milliwatts.
    pub power: f64,
    /// Critical path delay in nanoseconds.
    pub delay: f64,
    /// Simulated throughput in megahertz.
    pub throughput: f64,
    /// Source synthesis report path, as text.
    pub synthesis_report: String,
    /// Source simulation results path, as text.
    pub simulation_results: String,
    /// RTL source path, as text.
    pub rtl_code: String,
}

impl AggregatedRecord {
    /// Merge synthesis metrics, throughput, and the source paths into one record.
    pub fn merge(spec: &ImplementationSpec, synthesis: SynthesisMetrics, throughput: f64) -> Self {
        Self {
            area: synthesis.area,
            power: synthesis.power,
            delay: synthesis.delay,
            throughput,
            synthesis_report: spec.synthesis_report.display().to_string(),
            simulation_results: spec.simulation_results.display().to_string(),
            rtl_code: spec.rtl_code.display().to_string(),
        }
    }
}

/// Mapping from implementation name to its aggregated record.
///
/// Keys are unique and keep insertion order, so the output document lists
/// implementations in collection order on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, AggregatedRecord)>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a record, replacing any previous record under the same name.
    pub fn insert(&mut self, name: String, record: AggregatedRecord) {
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = record;
        } else {
            self.entries.push((name, record));
        }
    }

    /// Look up a record by implementation name.
    #[allow(dead_code)] // Utility accessor
    pub fn get(&self, name: &str) -> Option<&AggregatedRecord> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// Number of implementations in the set.
    #[allow(dead_code)] // Utility accessor
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no implementations have been collected.
    #[allow(dead_code)] // Utility accessor
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AggregatedRecord)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }
}

impl Serialize for ResultSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ResultSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of implementation name to aggregated record")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut results = ResultSet::new();
                while let Some((name, record)) = access.next_entry::<String, AggregatedRecord>()? {
                    results.insert(name, record);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(area: f64) -> AggregatedRecord {
        AggregatedRecord {
            area,
            power: 1.0,
            delay: 2.0,
            throughput: 3.0,
            synthesis_report: "designs/a/synthesis_report.txt".to_string(),
            simulation_results: "designs/a/simulation_results.txt".to_string(),
            rtl_code: "designs/a/multiplier.v".to_string(),
        }
    }

    #[test]
    fn test_spec_paths_from_design_dir() {
        let spec =
            ImplementationSpec::from_design_dir("Test Design", Path::new("designs"), "booth");

        assert_eq!(spec.name, "Test Design");
        assert_eq!(
            spec.synthesis_report,
            Path::new("designs/booth/synthesis_report.txt")
        );
        assert_eq!(
            spec.simulation_results,
            Path::new("designs/booth/simulation_results.txt")
        );
        assert_eq!(spec.rtl_code, Path::new("designs/booth/multiplier.v"));
    }

    #[test]
    fn test_merge_record() {
        let spec = ImplementationSpec::from_design_dir("Test", Path::new("base"), "dir");
        let synthesis = SynthesisMetrics {
            area: 1234.5,
            power: 12.3,
            delay: 4.56,
        };

        let record = AggregatedRecord::merge(&spec, synthesis, 250.0);

        assert_eq!(record.area, 1234.5);
        assert_eq!(record.power, 12.3);
        assert_eq!(record.delay, 4.56);
        assert_eq!(record.throughput, 250.0);
        assert_eq!(record.synthesis_report, "base/dir/synthesis_report.txt");
        assert_eq!(record.rtl_code, "base/dir/multiplier.v");
    }

    #[test]
    fn test_synthesis_metrics_default_to_zero() {
        let metrics = SynthesisMetrics::default();
        assert_eq!(metrics.area, 0.0);
        assert_eq!(metrics.power, 0.0);
        assert_eq!(metrics.delay, 0.0);
    }

    #[test]
    fn test_result_set_preserves_insertion_order() {
        let mut results = ResultSet::new();
        results.insert("Zeta".to_string(), make_record(1.0));
        results.insert("Alpha".to_string(), make_record(2.0));
        results.insert("Mid".to_string(), make_record(3.0));

        let names: Vec<&str> = results.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);

        let json = serde_json::to_string(&results).unwrap();
        let zeta = json.find("Zeta").unwrap();
        let alpha = json.find("Alpha").unwrap();
        let mid = json.find("Mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_result_set_insert_replaces_duplicate() {
        let mut results = ResultSet::new();
        results.insert("Design".to_string(), make_record(1.0));
        results.insert("Design".to_string(), make_record(9.0));

        assert_eq!(results.len(), 1);
        assert_eq!(results.get("Design").unwrap().area, 9.0);
    }

    #[test]
    fn test_record_key_order_in_document() {
        let record = make_record(7.0);
        let json = serde_json::to_string(&record).unwrap();

        let positions: Vec<usize> = [
            "\"area\"",
            "\"power\"",
            "\"delay\"",
            "\"throughput\"",
            "\"synthesis_report\"",
            "\"simulation_results\"",
            "\"rtl_code\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_result_set_round_trip() {
        let mut results = ResultSet::new();
        results.insert("B Design".to_string(), make_record(10.5));
        results.insert("A Design".to_string(), make_record(20.5));

        let json = serde_json::to_string_pretty(&results).unwrap();
        let parsed: ResultSet = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, results);
        let names: Vec<&str> = parsed.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B Design", "A Design"]);
    }
}
