use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::engine::InterfaceState;

/// One on-disk capture row. Field order is the CSV column order; the
/// analyzer reads the file back by header name and ignores the columns it
/// does not model (timestamp, tx_packets, status, link_speed).
#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    timestamp: u64,
    cycle: u64,
    interface: &'a str,
    rx_bytes: u64,
    tx_bytes: u64,
    rx_packets: u64,
    tx_packets: u64,
    rx_errors: u64,
    tx_errors: u64,
    status: u8,
    link_speed: f64,
}

/// Appends one row per interface per cycle. Flushes after every cycle so
/// an interrupted run still leaves a readable capture behind.
pub struct CsvLogger {
    writer: csv::Writer<File>,
}

impl CsvLogger {
    /// Create (or truncate) the capture file. The header row is written on
    /// the first cycle.
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create capture file {}", path.display()))?;
        Ok(Self { writer })
    }

    pub fn log_cycle(
        &mut self,
        timestamp: u64,
        cycle: u64,
        interfaces: &[InterfaceState],
    ) -> Result<()> {
        for iface in interfaces {
            self.writer
                .serialize(LogRecord {
                    timestamp,
                    cycle,
                    interface: &iface.name,
                    rx_bytes: iface.rx_bytes,
                    tx_bytes: iface.tx_bytes,
                    rx_packets: iface.rx_packets,
                    tx_packets: iface.tx_packets,
                    rx_errors: iface.rx_errors,
                    tx_errors: iface.tx_errors,
                    status: iface.up as u8,
                    link_speed: iface.link_speed,
                })
                .context("failed to append capture row")?;
        }
        self.writer.flush().context("failed to flush capture file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Simulator, default_fleet};
    use simnet_abstract::SimConfig;

    #[test]
    fn capture_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simnet_data.csv");

        let config = SimConfig {
            seed: 42,
            ..Default::default()
        };
        let mut sim = Simulator::new(&config, &default_fleet());
        let mut logger = CsvLogger::create(&path).unwrap();

        for ts in 0..5u64 {
            sim.advance_cycle(12);
            logger.log_cycle(1_700_000_000 + ts, sim.cycle(), sim.interfaces()).unwrap();
        }
        drop(logger);

        let dataset = simnet_loader::load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 15);
        assert_eq!(dataset.interfaces(), vec!["eth0", "wlan0", "lo"]);
        assert_eq!(dataset.total_cycles(), 5);

        let eth0 = dataset.last_sample("eth0").unwrap();
        let live = &sim.interfaces()[0];
        assert_eq!(eth0.rx_bytes, live.rx_bytes);
        assert_eq!(eth0.tx_bytes, live.tx_bytes);
    }
}
