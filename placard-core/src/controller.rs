//! The display controller cycle: poll, settle, read, split, render.
//!
//! A single controller instance owns the serial source, the LCD and the
//! raw input buffer for the lifetime of the device. There is no other
//! thread of control; the settle delay blocks the whole cycle by design.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::line::LinePair;
use crate::traits::{CharacterLcd, LcdError, MessageSource};
use crate::{RAW_BUFFER_CAPACITY, SETTLE_DELAY_MS};

/// What a single call to [`DisplayController::poll`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// No data pending; nothing touched
    Idle,
    /// A burst was drained and rendered
    Rendered,
}

/// Errors surfaced by a controller cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError<E> {
    /// The serial source failed
    Source(E),
    /// The LCD rejected an operation
    Lcd(LcdError),
}

/// Drives one LCD from one serial source.
///
/// The cycle has two states: idle (no data pending) and processing
/// (settle delay, then drain and render). Processing unconditionally
/// returns to idle once the render completes.
pub struct DisplayController<S, L, D> {
    source: S,
    lcd: L,
    delay: D,
    /// Holding area for one incoming burst, overwritten every cycle
    buf: Vec<u8, RAW_BUFFER_CAPACITY>,
    /// Most recently rendered rows
    lines: LinePair,
}

impl<S, L, D> DisplayController<S, L, D>
where
    S: MessageSource,
    L: CharacterLcd,
    D: DelayNs,
{
    /// Create a controller with an empty buffer and a blank line pair
    pub fn new(source: S, lcd: L, delay: D) -> Self {
        Self {
            source,
            lcd,
            delay,
            buf: Vec::new(),
            lines: LinePair::new(),
        }
    }

    /// Run one scheduling cycle.
    ///
    /// When bytes are pending this blocks for the settle delay, drains
    /// whatever has arrived by then and rewrites the display. A sender
    /// that is still transmitting when the delay expires loses the tail
    /// of its message; there is no framing to detect that.
    pub fn poll(&mut self) -> Result<CycleOutcome, ControllerError<S::Error>> {
        if !self.source.has_data().map_err(ControllerError::Source)? {
            return Ok(CycleOutcome::Idle);
        }

        // Let the rest of a multi-byte transmission trickle in
        self.delay.delay_ms(SETTLE_DELAY_MS);

        self.drain_source()?;
        self.lines = LinePair::split(&self.buf);
        self.render().map_err(ControllerError::Lcd)?;

        Ok(CycleOutcome::Rendered)
    }

    /// The rows shown by the last render
    pub fn lines(&self) -> &LinePair {
        &self.lines
    }

    /// Consume everything currently buffered on the source.
    ///
    /// The previous burst is discarded first; bursts never accumulate
    /// across cycles. Bytes past the buffer capacity are dropped, which
    /// only affects data past the display limit anyway.
    fn drain_source(&mut self) -> Result<(), ControllerError<S::Error>> {
        self.buf.clear();

        let mut chunk = [0u8; 16];
        while self.source.has_data().map_err(ControllerError::Source)? {
            let n = self
                .source
                .read(&mut chunk)
                .map_err(ControllerError::Source)?;
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                let _ = self.buf.push(byte);
            }
        }
        Ok(())
    }

    /// Clear-and-rewrite render of the current line pair
    fn render(&mut self) -> Result<(), LcdError> {
        self.lcd.clear()?;
        self.lcd.set_cursor(0, 0)?;
        self.lcd.write_bytes(self.lines.top())?;
        self.lcd.set_cursor(0, 1)?;
        self.lcd.write_bytes(self.lines.bottom())
    }
}
