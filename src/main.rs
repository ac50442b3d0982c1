/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::error;
use std::thread::Builder;

/* Custom libraries */
use display::Display;
use input::InputReader;
use shared::FleetSnapshot;
use simulation::{Command, SimulationDriver};

/* Modules */
mod config;
mod dispatcher;
mod display;
mod elevator;
mod error;
mod input;
mod shared;
mod simulation;

/* Command line arguments */
#[derive(Parser)]
#[clap(name = "liftbank", about = "Simulates a bank of elevators serving floor requests")]
struct Args {
    /// Path to the configuration file
    #[clap(long, default_value = "config.toml")]
    config: String,

    /// Override the number of floors
    #[clap(long)]
    floors: Option<u8>,

    /// Override the number of elevators
    #[clap(long)]
    elevators: Option<u8>,

    /// Override the simulation step period in milliseconds
    #[clap(long)]
    tick_ms: Option<u64>,

    /// Emit one JSON snapshot per line instead of the text view
    #[clap(long)]
    json: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration and apply command line overrides
    let mut config = crate::unwrap_or_exit!(config::load_config(&args.config));
    if let Some(floors) = args.floors {
        config.building.n_floors = floors;
    }
    if let Some(elevators) = args.elevators {
        config.building.n_elevators = elevators;
    }
    if let Some(tick_ms) = args.tick_ms {
        config.simulation.tick_interval_ms = tick_ms;
    }
    crate::unwrap_or_exit!(config.validate());

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<FleetSnapshot>();

    // Start the display module
    let display = Display::new(&config, args.json, snapshot_rx);
    let display_thread = Builder::new().name("display".into());
    let display_handle = crate::unwrap_or_exit!(display_thread.spawn(move || display.run()));

    // Start the simulation module
    let driver = SimulationDriver::new(&config, command_rx, snapshot_tx);
    let driver_thread = Builder::new().name("simulation".into());
    let driver_handle = crate::unwrap_or_exit!(driver_thread.spawn(move || driver.run()));

    // Read requests on the main thread until end of input
    let input = InputReader::new(command_tx);
    input.run();

    // The input reader sent a shutdown on exit; the driver finishes the
    // outstanding requests and closes the snapshot channel, which stops the
    // display.
    let _ = driver_handle.join();
    let _ = display_handle.join();
}
