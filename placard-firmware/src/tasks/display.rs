//! Display controller task
//!
//! The only task in the firmware: an explicit poll/settle/process loop.
//! The controller's settle delay blocks the executor, which is fine -
//! there is no other work to do while a message is arriving.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Delay, Timer};

use placard_core::controller::{CycleOutcome, DisplayController};
use placard_drivers::lcd::Hd44780;

use crate::serial::UartSource;

/// Delay between availability checks while the link is quiet
const IDLE_POLL_MS: u64 = 10;

/// Controller over the concrete board peripherals
pub type BoardController =
    DisplayController<UartSource<BufferedUartRx>, Hd44780<Output<'static>, Delay>, Delay>;

/// Display task - polls the host link and rewrites the LCD
#[embassy_executor::task]
pub async fn display_task(mut controller: BoardController) {
    info!("Display task started");

    loop {
        match controller.poll() {
            Ok(CycleOutcome::Rendered) => {
                debug!(
                    "Rendered message: {} + {} chars",
                    controller.lines().top().len(),
                    controller.lines().bottom().len()
                );
            }
            Ok(CycleOutcome::Idle) => {}
            Err(_) => {
                // Nothing to do but try again on the next burst
                warn!("Display cycle failed");
            }
        }

        Timer::after_millis(IDLE_POLL_MS).await;
    }
}
