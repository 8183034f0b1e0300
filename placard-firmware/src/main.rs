//! Placard - serial message display firmware
//!
//! Firmware binary for RP2040-based boards driving a 16x2 character LCD.
//! Listens on UART0 for plain text from the host and rewrites the display
//! with whatever arrives.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use placard_core::controller::DisplayController;
use placard_core::BAUD_RATE;
use placard_drivers::lcd::Hd44780;

use crate::serial::UartSource;

mod serial;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Placard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Host link on UART0 (GPIO0 TX, GPIO1 RX), 9600 8N1.
    // The TX half is unused; nothing is ever sent back to the host.
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized at {} baud", BAUD_RATE);

    // LCD control lines: RS=GPIO2, EN=GPIO3, D4..D7=GPIO4..GPIO7
    let rs = Output::new(p.PIN_2, Level::Low);
    let en = Output::new(p.PIN_3, Level::Low);
    let data = [
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
    ];

    let mut lcd = Hd44780::new(rs, en, data, Delay);
    match lcd.init() {
        Ok(()) => info!("LCD initialized (16x2)"),
        Err(e) => error!("Failed to initialize LCD: {:?}", e),
    }

    let controller = DisplayController::new(UartSource::new(rx), lcd, Delay);

    spawner.spawn(tasks::display_task(controller)).unwrap();

    info!("Display task spawned, firmware running");
}
