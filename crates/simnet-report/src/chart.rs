use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::analysis::interface_reports;
use simnet_abstract::Dataset;

// 12x8 inches at 150 DPI.
const CHART_SIZE: (u32, u32) = (1800, 1200);

/// Render the four-panel overview PNG: RX traffic over time, total traffic
/// per interface, errors over time, RX packet counts. The file is
/// overwritten on every run.
pub fn render_chart(dataset: &Dataset, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let titled = root.titled("SimNet Network Analysis", ("sans-serif", 40))?;
    let panels = titled.split_evenly((2, 2));
    let interfaces = dataset.interfaces();

    draw_rx_traffic(&panels[0], dataset, &interfaces)?;
    draw_traffic_totals(&panels[1], dataset)?;
    draw_errors(&panels[2], dataset, &interfaces)?;
    draw_packets(&panels[3], dataset, &interfaces)?;

    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    debug!(path = %path.display(), "chart rendered");
    Ok(())
}

/// Panel (a): per-interface RX traffic in MiB vs cycle.
fn draw_rx_traffic<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    interfaces: &[&str],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max_cycle = dataset.total_cycles().max(1);
    let max_mib = dataset
        .samples()
        .iter()
        .map(|s| s.rx_mib())
        .fold(0.0f64, f64::max)
        .max(0.01);

    let mut chart = ChartBuilder::on(area)
        .caption("RX Traffic Over Time", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..max_cycle, 0f64..max_mib * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Cycle")
        .y_desc("Traffic (MB)")
        .draw()?;

    for (idx, interface) in interfaces.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(u64, f64)> = dataset
            .samples_for(interface)
            .map(|s| (s.cycle, s.rx_mib()))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(format!("{interface} RX"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Panel (b): final total traffic per interface as bars.
fn draw_traffic_totals<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let reports = interface_reports(dataset);
    let names: Vec<String> = reports.iter().map(|r| r.interface.clone()).collect();
    let max_total = reports
        .iter()
        .map(|r| r.total_traffic_mib())
        .fold(0.0f64, f64::max)
        .max(0.01);

    let mut chart = ChartBuilder::on(area)
        .caption("Traffic by Interface", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0usize..reports.len().max(1)).into_segmented(),
            0f64..max_total * 1.1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(idx) => names.get(*idx).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("Total Traffic (MB)")
        .draw()?;

    chart.draw_series(reports.iter().enumerate().map(|(idx, report)| {
        let color = Palette99::pick(idx).to_rgba();
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(idx), 0.0),
                (SegmentValue::Exact(idx + 1), report.total_traffic_mib()),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;
    Ok(())
}

/// Panel (c): per-interface cumulative error count (rx+tx) vs cycle.
fn draw_errors<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    interfaces: &[&str],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max_cycle = dataset.total_cycles().max(1);
    let max_errors = dataset
        .samples()
        .iter()
        .map(|s| s.total_errors())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Errors Over Time", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..max_cycle, 0u64..max_errors + 1)?;

    chart
        .configure_mesh()
        .x_desc("Cycle")
        .y_desc("Total Errors")
        .draw()?;

    for (idx, interface) in interfaces.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(u64, u64)> = dataset
            .samples_for(interface)
            .map(|s| (s.cycle, s.total_errors()))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(interface.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|point| Cross::new(*point, 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Panel (d): per-interface RX packet counter vs cycle.
fn draw_packets<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    interfaces: &[&str],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max_cycle = dataset.total_cycles().max(1);
    let max_packets = dataset
        .samples()
        .iter()
        .map(|s| s.rx_packets)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Packet Counts Over Time", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..max_cycle, 0u64..max_packets + 1)?;

    chart
        .configure_mesh()
        .x_desc("Cycle")
        .y_desc("RX Packets")
        .draw()?;

    for (idx, interface) in interfaces.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(u64, u64)> = dataset
            .samples_for(interface)
            .map(|s| (s.cycle, s.rx_packets))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(format!("{interface} RX Packets"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|point| TriangleMarker::new(*point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}
