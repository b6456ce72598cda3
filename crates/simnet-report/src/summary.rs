use std::fmt::Write as _;

use serde::Serialize;

use crate::analysis::interface_reports;
use simnet_abstract::Dataset;

/// Whole-run rollup over the final totals of every interface. Serializable
/// so the CLI can export it as JSON alongside the console report.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub total_cycles: u64,
    pub interface_count: usize,
    /// Interface with the strictly greatest final rx+tx byte total; `None`
    /// when no interface moved any traffic.
    pub busiest_interface: Option<String>,
    pub busiest_total_bytes: u64,
    pub total_errors: u64,
}

impl SummaryReport {
    pub fn healthy(&self) -> bool {
        self.total_errors == 0
    }
}

pub fn summarize(dataset: &Dataset) -> SummaryReport {
    let reports = interface_reports(dataset);

    // Strict `>` with a zero floor: ties resolve to the first interface
    // seen, and an all-idle capture names no busiest interface.
    let mut busiest: Option<&str> = None;
    let mut busiest_total_bytes = 0u64;
    for report in &reports {
        if report.total_bytes() > busiest_total_bytes {
            busiest_total_bytes = report.total_bytes();
            busiest = Some(&report.interface);
        }
    }

    SummaryReport {
        total_cycles: dataset.total_cycles(),
        interface_count: reports.len(),
        busiest_interface: busiest.map(str::to_string),
        busiest_total_bytes,
        total_errors: reports
            .iter()
            .map(|r| r.rx_errors + r.tx_errors)
            .sum(),
    }
}

/// Render the `=== SUMMARY REPORT ===` console block, health verdict
/// included.
pub fn render_summary(summary: &SummaryReport) -> String {
    let mut out = String::from("\n=== SUMMARY REPORT ===\n");
    let _ = writeln!(out, "Simulation ran for {} cycles", summary.total_cycles);
    let _ = writeln!(
        out,
        "Monitored {} network interfaces",
        summary.interface_count
    );
    let _ = writeln!(
        out,
        "Busiest interface: {}",
        summary.busiest_interface.as_deref().unwrap_or("")
    );
    let _ = writeln!(
        out,
        "Total data transferred: {:.2} MB",
        summary.busiest_total_bytes as f64 / 1024.0 / 1024.0
    );
    let _ = writeln!(out, "Total errors detected: {}", summary.total_errors);
    if summary.healthy() {
        let _ = writeln!(out, "✓ No network errors - system healthy!");
    } else {
        let _ = writeln!(out, "⚠ Some errors detected - monitoring recommended");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use simnet_abstract::{Dataset, InterfaceSample};

    fn sample(interface: &str, cycle: u64, rx: u64, tx: u64, rx_err: u64, tx_err: u64) -> InterfaceSample {
        InterfaceSample {
            interface: interface.to_string(),
            cycle,
            rx_bytes: rx,
            tx_bytes: tx,
            rx_packets: 0,
            rx_errors: rx_err,
            tx_errors: tx_err,
        }
    }

    #[test]
    fn busiest_is_strictly_greatest_final_total() {
        let ds = Dataset::from_samples(vec![
            sample("a", 0, 60, 40, 0, 0),
            sample("b", 0, 150, 50, 0, 0),
        ]);
        let summary = summarize(&ds);
        assert_eq!(summary.busiest_interface.as_deref(), Some("b"));
        assert_eq!(summary.busiest_total_bytes, 200);
    }

    #[test]
    fn busiest_tie_goes_to_first_seen() {
        let ds = Dataset::from_samples(vec![
            sample("first", 0, 50, 50, 0, 0),
            sample("second", 0, 60, 40, 0, 0),
        ]);
        assert_eq!(
            summarize(&ds).busiest_interface.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn verdict_flips_on_a_single_error() {
        let clean = Dataset::from_samples(vec![
            sample("eth0", 0, 10, 10, 0, 0),
            sample("wlan0", 0, 10, 10, 0, 0),
        ]);
        assert!(summarize(&clean).healthy());

        let dirty = Dataset::from_samples(vec![
            sample("eth0", 0, 10, 10, 0, 0),
            sample("wlan0", 0, 10, 10, 0, 1),
        ]);
        let summary = summarize(&dirty);
        assert_eq!(summary.total_errors, 1);
        assert!(!summary.healthy());
    }

    #[test]
    fn errors_count_only_final_rows() {
        let ds = Dataset::from_samples(vec![
            sample("eth0", 0, 1, 1, 5, 5),
            sample("eth0", 1, 2, 2, 1, 0),
        ]);
        assert_eq!(summarize(&ds).total_errors, 1);
    }

    #[test]
    fn cycles_and_interface_count() {
        let ds = Dataset::from_samples(vec![
            sample("eth0", 9, 1, 1, 0, 0),
            sample("eth0", 3, 1, 1, 0, 0),
            sample("wlan0", 5, 1, 1, 0, 0),
        ]);
        let summary = summarize(&ds);
        assert_eq!(summary.total_cycles, 9);
        assert_eq!(summary.interface_count, 2);
    }

    #[test]
    fn worked_example_summary() {
        let ds = Dataset::from_samples(vec![
            sample("eth0", 0, 1000, 500, 0, 0),
            sample("eth0", 1, 2000, 1500, 1, 0),
            sample("eth1", 0, 500, 500, 0, 0),
            sample("eth1", 1, 500, 500, 0, 0),
        ]);
        let summary = summarize(&ds);
        assert_eq!(summary.busiest_interface.as_deref(), Some("eth0"));
        assert_eq!(summary.total_errors, 1);
        assert!(!summary.healthy());

        let text = render_summary(&summary);
        assert!(text.contains("Simulation ran for 1 cycles"));
        assert!(text.contains("Monitored 2 network interfaces"));
        assert!(text.contains("Busiest interface: eth0"));
        assert!(text.contains("⚠ Some errors detected - monitoring recommended"));
    }

    #[test]
    fn empty_dataset_summary_is_inert() {
        let summary = summarize(&Dataset::default());
        assert_eq!(summary.total_cycles, 0);
        assert_eq!(summary.interface_count, 0);
        assert!(summary.busiest_interface.is_none());
        assert!(summary.healthy());
    }
}
