use serde::{Deserialize, Serialize};

/// One per-cycle counter snapshot for a single interface.
///
/// Counters are cumulative over the life of the interface within one run,
/// matching `/proc/net/dev`-style semantics: they only grow. Capture files
/// may carry extra columns (timestamp, link speed, …); deserialization is
/// by header name, so those are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSample {
    pub interface: String,
    pub cycle: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_packets: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
}

impl InterfaceSample {
    /// Combined RX + TX byte counter.
    pub fn total_bytes(&self) -> u64 {
        self.rx_bytes + self.tx_bytes
    }

    /// Combined RX + TX error counter.
    pub fn total_errors(&self) -> u64 {
        self.rx_errors + self.tx_errors
    }

    /// Combined traffic converted from bytes to mebibytes.
    pub fn total_traffic_mib(&self) -> f64 {
        self.total_bytes() as f64 / 1024.0 / 1024.0
    }

    /// RX-only traffic in mebibytes.
    pub fn rx_mib(&self) -> f64 {
        self.rx_bytes as f64 / 1024.0 / 1024.0
    }
}
