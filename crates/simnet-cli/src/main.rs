use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use simnet_loader::{LoadError, load_dataset};
use simnet_report::{
    SummaryReport, interface_reports, render_chart, render_interface_analysis, render_summary,
    summarize,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "SimNet network data analyzer")]
struct Args {
    /// Capture CSV produced by the traffic logger.
    #[arg(long, default_value = "simnet_data.csv")]
    data: PathBuf,

    /// Output image for the rendered charts (overwritten on each run).
    #[arg(long, default_value = "network_analysis.png")]
    chart_out: PathBuf,

    /// Write a JSON copy of the summary report.
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Skip opening the rendered chart in an image viewer.
    #[arg(long, default_value_t = false)]
    no_display: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    println!("📊 SimNet Data Analyzer");
    println!("Simple network data analysis\n");

    let dataset = match load_dataset(&args.data) {
        Ok(dataset) => dataset,
        Err(LoadError::NotFound { .. }) => {
            // A missing capture is "nothing to do", not a failure.
            println!("❌ Error: {} not found!", args.data.display());
            return Ok(());
        }
        Err(err) => return Err(err).context("failed to load capture"),
    };
    println!("✓ Loaded {} data points", dataset.len());

    let reports = interface_reports(&dataset);
    print!("{}", render_interface_analysis(&reports));

    println!("\n=== CREATING CHARTS ===");
    render_chart(&dataset, &args.chart_out)?;
    println!("✓ Saved charts as '{}'", args.chart_out.display());
    if !args.no_display {
        try_display(&args.chart_out);
    }

    let summary = summarize(&dataset);
    print!("{}", render_summary(&summary));

    if let Some(path) = &args.summary_out {
        write_summary(path, &summary)?;
    }

    println!("\n✅ Analysis complete!");
    println!("Generated: {}", args.chart_out.display());
    Ok(())
}

/// Best-effort preview of the chart in the platform image viewer. Headless
/// hosts get a notice instead.
fn try_display(path: &Path) {
    if cfg!(target_os = "linux")
        && env::var_os("DISPLAY").is_none()
        && env::var_os("WAYLAND_DISPLAY").is_none()
    {
        println!("  (Display not available)");
        return;
    }

    let viewer = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    match Command::new(viewer).arg(path).spawn() {
        Ok(_) => debug!(viewer, "chart opened in image viewer"),
        Err(err) => {
            debug!(viewer, error = %err, "image viewer unavailable");
            println!("  (Display not available)");
        }
    }
}

fn write_summary(path: &Path, summary: &SummaryReport) -> Result<()> {
    let data = serde_json::to_vec_pretty(summary).context("failed to serialize summary")?;
    fs::write(path, &data)
        .with_context(|| format!("failed to write summary file {}", path.display()))?;
    Ok(())
}
