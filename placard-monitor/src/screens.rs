//! The rotating set of status screens
//!
//! Each screen is two 16-character rows, matching the display's grid.
//! Layouts are fixed-width so values line up from update to update.

use sysinfo::{Components, System};

use crate::format::format_fixed;

/// Character cells per display row
pub const ROW_WIDTH: usize = 16;

/// One full display update: two 16-character rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub top: String,
    pub bottom: String,
}

impl Screen {
    fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: pad_row(top.into()),
            bottom: pad_row(bottom.into()),
        }
    }

    /// The 32 bytes written to the serial port for this screen
    pub fn payload(&self) -> String {
        format!("{}{}", self.top, self.bottom)
    }
}

/// Space-pad (or truncate) a row to exactly [`ROW_WIDTH`] characters
fn pad_row(mut row: String) -> String {
    row.truncate(ROW_WIDTH);
    while row.len() < ROW_WIDTH {
        row.push(' ');
    }
    row
}

/// Sample every screen in display order
pub fn collect(system: &mut System, cpu_sensor: &str, mobo_sensor: &str) -> Vec<Screen> {
    vec![
        cpu_usage(system),
        load_average(),
        memory_usage(system),
        uptime(),
        temperatures(cpu_sensor, mobo_sensor),
    ]
}

/// CPU frequency and usage
fn cpu_usage(system: &mut System) -> Screen {
    system.refresh_cpu_usage();
    let freq_mhz = system.cpus().first().map_or(0, |cpu| cpu.frequency()) as f64;
    let percent = f64::from(system.global_cpu_usage());
    cpu_screen(freq_mhz, percent)
}

fn cpu_screen(freq_mhz: f64, percent: f64) -> Screen {
    Screen::new(
        "   CPU  Usage   ",
        format!(
            "{}MHz {}%",
            format_fixed(freq_mhz, 4, 1),
            format_fixed(percent, 3, 1)
        ),
    )
}

/// 1/5/15 minute load averages
fn load_average() -> Screen {
    let load = System::load_average();
    load_screen(load.one, load.five, load.fifteen)
}

fn load_screen(one: f64, five: f64, fifteen: f64) -> Screen {
    Screen::new(
        "    Load AVG    ",
        format!(
            "{} {} {}",
            format_fixed(one, 2, 2),
            format_fixed(five, 2, 2),
            format_fixed(fifteen, 2, 1)
        ),
    )
}

/// Used memory and usage percentage
fn memory_usage(system: &mut System) -> Screen {
    system.refresh_memory();
    let used = system.used_memory();
    let total = system.total_memory();
    let percent = if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    };
    memory_screen(used, percent)
}

fn memory_screen(used_bytes: u64, percent: f64) -> Screen {
    let used_gib = used_bytes as f64 / f64::from(1 << 30);
    Screen::new(
        "   MEM  Usage   ",
        format!(
            "{}GiB {}%",
            format_fixed(used_gib, 2, 3),
            format_fixed(percent, 3, 1)
        ),
    )
}

/// Time since boot
fn uptime() -> Screen {
    uptime_screen(System::uptime())
}

fn uptime_screen(seconds: u64) -> Screen {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    Screen::new(
        "     Uptime     ",
        format!("{days:>4} d {hours:>2} h {minutes:>2} m"),
    )
}

/// CPU and mainboard temperatures from the named sensors
fn temperatures(cpu_sensor: &str, mobo_sensor: &str) -> Screen {
    let components = Components::new_with_refreshed_list();
    let find = |label: &str| {
        components
            .iter()
            .find(|c| c.label().contains(label))
            .map(|c| f64::from(c.temperature()))
    };
    temperature_screen(find(cpu_sensor), find(mobo_sensor))
}

fn temperature_screen(cpu: Option<f64>, mobo: Option<f64>) -> Screen {
    let row = |name: &str, temp: Option<f64>| match temp {
        Some(t) => format!("{name} Temp {}C", format_fixed(t, 3, 1)),
        None => format!("{name} Temp ---.-C"),
    };
    Screen::new(row("CPU ", cpu), row("MoBo", mobo))
}
