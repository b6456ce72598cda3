pub mod config;
pub mod dataset;
pub mod sample;
pub mod scenario;

pub use config::SimConfig;
pub use dataset::Dataset;
pub use sample::InterfaceSample;
pub use scenario::{InterfaceSpec, SimConfigOverride, SimScenario, TrafficProfile};
