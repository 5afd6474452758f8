use crate::config::SimulationConfig;
use crate::report::{OutputFormat, Report};
use crate::simulation::Simulation;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod airport;
mod config;
mod console;
mod plane;
mod report;
mod simulation;
mod time;

#[derive(Parser)]
#[command(name = "runway-sim")]
#[command(about = "Single-runway departure queue simulator")]
struct Args {
    /// Number of planes injected, one per tick
    #[arg(long, default_value_t = SimulationConfig::SIMULATION_TICKS as i64, allow_negative_numbers = true)]
    ticks: i64,

    /// Fuel given to every new plane
    #[arg(long, default_value_t = SimulationConfig::FUEL_LEVEL, allow_negative_numbers = true)]
    fuel_level: i64,

    /// Minimum fuel a plane needs to be admitted to the runway
    #[arg(long, default_value_t = SimulationConfig::FUEL_REQUIRED_FOR_DEPARTURE, allow_negative_numbers = true)]
    fuel_required: i64,

    /// Ticks a plane holds the runway before departing
    #[arg(long, default_value_t = SimulationConfig::DEPARTURE_THRESHOLD as i64, allow_negative_numbers = true)]
    departure_threshold: i64,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Step through the simulation from an interactive console
    #[arg(short, long)]
    interactive: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,runway_sim={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SimulationConfig::from_raw(
        args.ticks,
        args.fuel_level,
        args.fuel_required,
        args.departure_threshold,
    )?;
    info!(
        "Tower online. {} planes, fuel {} (need {}), {} ticks on the runway",
        config.simulation_ticks,
        config.fuel_level,
        config.fuel_required_for_departure,
        config.departure_threshold
    );

    let mut simulation = Simulation::new(config);
    if args.interactive {
        console::run(&mut simulation)?;
    } else {
        simulation.run();
    }

    let report = Report::from_simulation(&simulation);
    println!("{}", report.render(args.format)?);
    Ok(())
}
