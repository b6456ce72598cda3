use crate::sample::InterfaceSample;

/// An immutable, ordered collection of samples loaded from one capture.
///
/// Row order is significant: interfaces are reported in first-appearance
/// order, and the *last* row logged for an interface holds its
/// authoritative cumulative totals. Input is expected to be cycle-ordered
/// per interface and is deliberately not re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<InterfaceSample>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<InterfaceSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[InterfaceSample] {
        &self.samples
    }

    /// Distinct interface names, in first-appearance order.
    pub fn interfaces(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for sample in &self.samples {
            if !seen.contains(&sample.interface.as_str()) {
                seen.push(sample.interface.as_str());
            }
        }
        seen
    }

    /// All samples for one interface, in file order.
    pub fn samples_for<'a>(
        &'a self,
        interface: &'a str,
    ) -> impl Iterator<Item = &'a InterfaceSample> {
        self.samples
            .iter()
            .filter(move |s| s.interface == interface)
    }

    /// The final row logged for an interface ("last row wins").
    pub fn last_sample(&self, interface: &str) -> Option<&InterfaceSample> {
        self.samples
            .iter()
            .rev()
            .find(|s| s.interface == interface)
    }

    /// Highest cycle value across all rows, independent of row order.
    pub fn total_cycles(&self) -> u64 {
        self.samples.iter().map(|s| s.cycle).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(interface: &str, cycle: u64, rx: u64, tx: u64) -> InterfaceSample {
        InterfaceSample {
            interface: interface.to_string(),
            cycle,
            rx_bytes: rx,
            tx_bytes: tx,
            rx_packets: 0,
            rx_errors: 0,
            tx_errors: 0,
        }
    }

    #[test]
    fn interfaces_keep_first_appearance_order() {
        let ds = Dataset::from_samples(vec![
            sample("eth1", 0, 1, 1),
            sample("eth0", 0, 1, 1),
            sample("eth1", 1, 2, 2),
        ]);
        assert_eq!(ds.interfaces(), vec!["eth1", "eth0"]);
    }

    #[test]
    fn last_sample_is_final_row_in_file_order() {
        let ds = Dataset::from_samples(vec![
            sample("eth0", 0, 10, 10),
            sample("eth0", 1, 20, 20),
            sample("wlan0", 0, 5, 5),
        ]);
        assert_eq!(ds.last_sample("eth0").unwrap().rx_bytes, 20);
        assert_eq!(ds.last_sample("wlan0").unwrap().cycle, 0);
        assert!(ds.last_sample("lo").is_none());
    }

    #[test]
    fn total_cycles_is_max_regardless_of_row_order() {
        let ds = Dataset::from_samples(vec![
            sample("eth0", 7, 1, 1),
            sample("eth0", 3, 1, 1),
            sample("wlan0", 5, 1, 1),
        ]);
        assert_eq!(ds.total_cycles(), 7);
        assert_eq!(Dataset::default().total_cycles(), 0);
    }
}
