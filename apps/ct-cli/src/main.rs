use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ct_app::{AppResult, Monitor, MonitorConfig};
use ct_model::{seed_fleet, Alert, MonitoredUnit};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ct-cli")]
#[command(about = "Coldtrace CLI - cold-chain telemetry monitor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed fleet
    Fleet,
    /// Run N synchronous ticks headless and print the final state as JSON
    Simulate {
        /// Number of ticks to run
        #[arg(long, default_value_t = 60)]
        ticks: u32,
        /// Noise seed for deterministic reproduction
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the live monitor, printing fleet status each period
    Watch {
        /// Tick period in milliseconds
        #[arg(long, default_value_t = 1_000)]
        period_ms: u64,
        /// Noise seed for deterministic reproduction
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many seconds (runs until interrupted if omitted)
        #[arg(long)]
        duration_secs: Option<u64>,
    },
}

#[derive(Serialize)]
struct SimulationReport {
    ticks: u32,
    units: Vec<MonitoredUnit>,
    alerts: Vec<Alert>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Fleet => cmd_fleet(),
        Commands::Simulate { ticks, seed } => cmd_simulate(ticks, seed),
        Commands::Watch {
            period_ms,
            seed,
            duration_secs,
        } => cmd_watch(period_ms, seed, duration_secs),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_fleet() -> AppResult<()> {
    println!(
        "{:<10} {:<28} {:<12} {:>10} {:>10}",
        "ID", "NAME", "BATCH", "TARGET °C", "HUM %"
    );
    for unit in seed_fleet(0) {
        println!(
            "{:<10} {:<28} {:<12} {:>10.1} {:>10.1}",
            unit.id,
            unit.name,
            unit.batch_number,
            unit.target_temperature_c,
            unit.current_reading.humidity_pct
        );
    }
    Ok(())
}

fn cmd_simulate(ticks: u32, seed: Option<u64>) -> AppResult<()> {
    let monitor = Monitor::new(MonitorConfig {
        seed,
        ..Default::default()
    });
    for _ in 0..ticks {
        monitor.tick_once();
    }
    let report = SimulationReport {
        ticks,
        units: monitor.units(),
        alerts: monitor.alerts(),
    };
    let json = serde_json::to_string_pretty(&report)
        .expect("simulation report serializes");
    println!("{json}");
    Ok(())
}

fn cmd_watch(period_ms: u64, seed: Option<u64>, duration_secs: Option<u64>) -> AppResult<()> {
    let mut monitor = Monitor::new(MonitorConfig {
        tick_period_ms: period_ms,
        seed,
        ..Default::default()
    });
    monitor.start();

    let started = std::time::Instant::now();
    let mut seen_alerts = 0;
    loop {
        thread::sleep(Duration::from_millis(period_ms));

        for unit in monitor.units() {
            println!(
                "[{:>8.1}s] {:<10} {:>6.2}°C {:>6.2}% {:<9} cooling={}",
                started.elapsed().as_secs_f64(),
                unit.id,
                unit.current_reading.temperature_c,
                unit.current_reading.humidity_pct,
                unit.status.as_str(),
                unit.cooling_active
            );
        }

        let alerts = monitor.alerts();
        // newest-first: anything past the previously seen count is new
        for alert in alerts.iter().take(alerts.len() - seen_alerts.min(alerts.len())) {
            println!("!! {} [{}] {}", alert.id, alert.unit_name, alert.message);
        }
        seen_alerts = alerts.len();

        if let Some(limit) = duration_secs {
            if started.elapsed() >= Duration::from_secs(limit) {
                break;
            }
        }
    }

    monitor.stop();
    Ok(())
}
