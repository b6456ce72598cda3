use std::fmt::Write as _;

use num_format::{Locale, ToFormattedString};

use simnet_abstract::Dataset;

/// Cumulative totals for one interface, taken from its final capture row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceReport {
    pub interface: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
}

impl InterfaceReport {
    pub fn total_bytes(&self) -> u64 {
        self.rx_bytes + self.tx_bytes
    }

    pub fn total_traffic_mib(&self) -> f64 {
        self.total_bytes() as f64 / 1024.0 / 1024.0
    }
}

/// Per-interface totals, in first-appearance order.
pub fn interface_reports(dataset: &Dataset) -> Vec<InterfaceReport> {
    dataset
        .interfaces()
        .into_iter()
        .filter_map(|name| {
            dataset.last_sample(name).map(|last| InterfaceReport {
                interface: name.to_string(),
                rx_bytes: last.rx_bytes,
                tx_bytes: last.tx_bytes,
                rx_errors: last.rx_errors,
                tx_errors: last.tx_errors,
            })
        })
        .collect()
}

/// Render the `=== INTERFACE ANALYSIS ===` console block.
pub fn render_interface_analysis(reports: &[InterfaceReport]) -> String {
    let mut out = String::from("\n=== INTERFACE ANALYSIS ===\n");
    for report in reports {
        let _ = writeln!(out, "\n{}:", report.interface.to_uppercase());
        let _ = writeln!(
            out,
            "  Total RX: {} bytes",
            report.rx_bytes.to_formatted_string(&Locale::en)
        );
        let _ = writeln!(
            out,
            "  Total TX: {} bytes",
            report.tx_bytes.to_formatted_string(&Locale::en)
        );
        let _ = writeln!(out, "  RX Errors: {}", report.rx_errors);
        let _ = writeln!(out, "  TX Errors: {}", report.tx_errors);
        let _ = writeln!(out, "  Total Traffic: {:.2} MB", report.total_traffic_mib());
    }
    out
}
