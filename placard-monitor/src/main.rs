//! placard-monitor - host-side system monitor
//!
//! Samples system resource usage and writes it, one 32-character screen
//! at a time, to the serial port the Placard display hangs off.
//!
//! The display rewrites itself from whatever arrives in a burst, so the
//! only contract here is pacing: one screen per write, spaced well past
//! the firmware's settle window.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use sysinfo::{Components, System};

mod format;
mod screens;

/// Wait after opening the port before the first write, so a device that
/// resets on connect does not miss the opening screens
const PORT_SETTLE: Duration = Duration::from_secs(6);

#[derive(Parser)]
#[command(name = "placard-monitor", about = "Feed system stats to a Placard LCD display")]
struct Cli {
    /// Serial device the display is attached to
    #[arg(short, long, default_value = "/dev/ttyACM0")]
    port: String,

    /// Baud rate of the display link
    #[arg(short, long, default_value_t = 9600)]
    baud: u32,

    /// Seconds between screen updates
    #[arg(short, long, default_value_t = 3)]
    interval: u64,

    /// Temperature sensor label for the CPU row (see `sensors`)
    #[arg(long, default_value = "k10temp")]
    cpu_sensor: String,

    /// Temperature sensor label for the mainboard row (see `sensors`)
    #[arg(long, default_value = "acpitz")]
    mobo_sensor: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List available temperature sensors and exit
    Sensors,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Command::Sensors) = cli.command {
        return list_sensors();
    }

    if cli.interval < 2 {
        warn!("update intervals under 2s can outrun the display's settle window");
    }

    let mut port = serialport::new(&cli.port, cli.baud)
        .timeout(Duration::from_secs(1))
        .open()
        .with_context(|| format!("opening serial port {}", cli.port))?;

    info!("Opened {} at {} baud", cli.port, cli.baud);
    thread::sleep(PORT_SETTLE);

    let mut system = System::new();
    loop {
        for screen in screens::collect(&mut system, &cli.cpu_sensor, &cli.mobo_sensor) {
            info!("Sending: {:?} / {:?}", screen.top, screen.bottom);
            if let Err(e) = port
                .write_all(screen.payload().as_bytes())
                .and_then(|()| port.flush())
            {
                warn!("Serial write failed: {e}");
            }
            thread::sleep(Duration::from_secs(cli.interval));
        }
    }
}

/// Print every temperature sensor the host exposes, so the user can pick
/// labels for --cpu-sensor and --mobo-sensor
fn list_sensors() -> Result<()> {
    let components = Components::new_with_refreshed_list();

    if components.is_empty() {
        println!("No temperature sensors found");
        return Ok(());
    }

    println!("Available temperature sensors:");
    for component in components.iter() {
        println!("  {:<32} {:5.1}C", component.label(), component.temperature());
    }
    println!();
    println!("Pass a label (or unique prefix) via --cpu-sensor / --mobo-sensor");

    Ok(())
}
