pub mod engine;
pub mod writer;

pub use engine::{InterfaceState, Simulator, default_fleet};
pub use writer::CsvLogger;
