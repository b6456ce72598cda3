use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of cycles to run; 0 means run until the process is stopped.
    pub cycles: u64,
    /// Seconds to wait between cycles.
    pub interval_secs: u64,
    /// Seed for the traffic RNG.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles: 0,
            interval_secs: 5,
            seed: 0,
        }
    }
}
