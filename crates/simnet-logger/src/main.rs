use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::Parser;
use tracing::info;

use simnet_abstract::{SimConfig, SimScenario};
use simnet_simulator::{CsvLogger, InterfaceState, Simulator, default_fleet};

#[derive(Parser, Debug)]
#[command(author, version, about = "SimNet network interface traffic simulator")]
struct Args {
    /// Number of cycles to run (0 = run until stopped).
    #[arg(long, default_value_t = 0)]
    cycles: u64,

    /// Seconds between cycles.
    #[arg(long, default_value_t = 5)]
    interval: u64,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Load run parameters and the interface fleet from a TOML scenario.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Capture CSV path (overwritten on each run).
    #[arg(long, default_value = "simnet_data.csv")]
    out: PathBuf,

    /// Suppress the per-cycle status table.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    print_banner();

    let mut config = SimConfig {
        cycles: args.cycles,
        interval_secs: args.interval,
        seed: args.seed.unwrap_or(0),
    };
    let fleet = match &args.scenario {
        Some(path) => {
            let scenario = load_scenario(path)?;
            scenario.config.apply_to(&mut config);
            if let Some(seed) = args.seed {
                // an explicit flag beats the scenario file
                config.seed = seed;
            }
            info!(name = %scenario.name, "loaded scenario");
            scenario.interfaces
        }
        None => default_fleet(),
    };

    let mut logger = CsvLogger::create(&args.out)?;
    println!("✓ Created {} for data logging", args.out.display());

    let mut sim = Simulator::new(&config, &fleet);
    println!("✓ Initialized {} network interfaces", sim.interfaces().len());

    println!("🚀 Starting network simulation...");
    println!("📊 Logging data every {} seconds\n", config.interval_secs);

    loop {
        let now = Local::now();
        sim.advance_cycle(now.hour());
        logger.log_cycle(now.timestamp() as u64, sim.cycle(), sim.interfaces())?;

        if !args.quiet {
            print!("{}", status_table(sim.cycle(), sim.interfaces()));
        }

        if config.cycles != 0 && sim.cycle() >= config.cycles {
            break;
        }
        if config.interval_secs > 0 {
            thread::sleep(Duration::from_secs(config.interval_secs));
        }
    }

    println!("\n✓ Data logged to {}", args.out.display());
    println!("📈 Simulation complete! Total cycles: {}", sim.cycle());
    Ok(())
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                       SimNet Logger                          ║");
    println!("║              Network Interface Traffic Simulator             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

fn load_scenario(path: &Path) -> Result<SimScenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    let scenario: SimScenario =
        toml::from_str(&content).context("Failed to parse scenario file")?;
    Ok(scenario)
}

fn status_table(cycle: u64, interfaces: &[InterfaceState]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "\n=== SimNet Logger - Cycle #{cycle} ===");
    let _ = writeln!(
        out,
        "Interface | Status | RX Bytes  | TX Bytes  | RX Pkts | TX Pkts | Errors"
    );
    let _ = writeln!(
        out,
        "----------|--------|-----------|-----------|---------|---------|--------"
    );
    for iface in interfaces {
        let _ = writeln!(
            out,
            "{:<9} | {:<6} | {:>9} | {:>9} | {:>7} | {:>7} | {}/{}",
            iface.name,
            if iface.up { "UP" } else { "DOWN" },
            iface.rx_bytes,
            iface.tx_bytes,
            iface.rx_packets,
            iface.tx_packets,
            iface.rx_errors,
            iface.tx_errors,
        );
    }

    let total_rx: u64 = interfaces.iter().filter(|i| i.up).map(|i| i.rx_bytes).sum();
    let total_tx: u64 = interfaces.iter().filter(|i| i.up).map(|i| i.tx_bytes).sum();
    let _ = writeln!(
        out,
        "\nTotal Traffic: RX={:.2} MB, TX={:.2} MB",
        total_rx as f64 / 1024.0 / 1024.0,
        total_tx as f64 / 1024.0 / 1024.0
    );
    out
}
