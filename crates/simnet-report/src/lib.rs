pub mod analysis;
pub mod chart;
pub mod summary;

pub use analysis::{InterfaceReport, interface_reports, render_interface_analysis};
pub use chart::render_chart;
pub use summary::{SummaryReport, render_summary, summarize};
