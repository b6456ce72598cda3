use crate::config::SimConfig;
use serde::Deserialize;

/// A TOML-loadable description of a simulation run: run parameters plus
/// the fleet of interfaces to simulate.
#[derive(Deserialize, Debug, Clone)]
pub struct SimScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub config: SimConfigOverride,
    pub interfaces: Vec<InterfaceSpec>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimConfigOverride {
    pub cycles: Option<u64>,
    pub interval_secs: Option<u64>,
    pub seed: Option<u64>,
}

impl SimConfigOverride {
    pub fn apply_to(&self, config: &mut SimConfig) {
        if let Some(v) = self.cycles {
            config.cycles = v;
        }
        if let Some(v) = self.interval_secs {
            config.interval_secs = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
    }
}

/// Starting state for one simulated interface.
#[derive(Deserialize, Debug, Clone)]
pub struct InterfaceSpec {
    pub name: String,
    pub profile: TrafficProfile,
    #[serde(default)]
    pub rx_bytes: u64,
    #[serde(default)]
    pub tx_bytes: u64,
    #[serde(default)]
    pub rx_packets: u64,
    #[serde(default)]
    pub tx_packets: u64,
    #[serde(default)]
    pub rx_errors: u64,
    #[serde(default)]
    pub tx_errors: u64,
    /// Link speed in Mbps; 0 for virtual links.
    #[serde(default)]
    pub link_speed: f64,
}

/// Traffic shape applied to an interface each cycle.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrafficProfile {
    /// Steady, reliable traffic with very rare receive errors.
    Ethernet,
    /// Jittery traffic, more frequent errors, occasional link drops.
    Wifi,
    /// Minimal symmetric loopback chatter.
    Loopback,
}
