//! HD44780 character LCD driver
//!
//! Drives the panel over the 4-bit parallel interface: RS, EN and four
//! data lines, all plain GPIO outputs. Timing follows the HD44780U
//! datasheet; the busy flag is never read (R/W is assumed tied low), so
//! every operation waits out the worst-case execution time instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use placard_core::traits::{CharacterLcd, LcdError};
use placard_core::{LCD_COLUMNS, LCD_ROWS};

/// HD44780 instruction set (the subset this driver uses)
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const FUNCTION_2LINE: u8 = 0x08;
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM address of column 0 for each row
const ROW_OFFSETS: [u8; LCD_ROWS] = [0x00, 0x40];

/// Worst-case instruction execution time (most commands finish in 37us)
const COMMAND_SETTLE_US: u32 = 50;

/// CLEAR and RETURN HOME take up to 1.52ms
const CLEAR_SETTLE_US: u32 = 2_000;

/// HD44780 panel on a 4-bit parallel bus
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7, least significant first
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Wrap the control pins; call [`Hd44780::init`] before use
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
        }
    }

    /// Run the power-on initialization sequence.
    ///
    /// Puts the controller into 4-bit mode via the datasheet wake-up
    /// dance, then configures a two-line 5x8 grid with the display on,
    /// cursor hidden and increment-on-write entry mode.
    pub fn init(&mut self) -> Result<(), LcdError> {
        // The panel needs >40ms after Vcc rises before it accepts anything
        self.delay.delay_ms(50);

        // Wake-up: function-set high nibble three times in 8-bit mode
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);

        // Switch to 4-bit mode; from here on everything is two nibbles
        self.write_nibble(0x02, false)?;
        self.delay.delay_us(150);

        self.command(cmd::FUNCTION_SET | cmd::FUNCTION_2LINE)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(CLEAR_SETTLE_US);

        Ok(())
    }

    /// Present one nibble on D4..D7 and strobe EN
    fn write_nibble(&mut self, nibble: u8, data_mode: bool) -> Result<(), LcdError> {
        self.rs
            .set_state(PinState::from(data_mode))
            .map_err(|_| LcdError::Communication)?;

        for (i, pin) in self.data.iter_mut().enumerate() {
            let bit = nibble >> i & 1 == 1;
            pin.set_state(PinState::from(bit))
                .map_err(|_| LcdError::Communication)?;
        }

        // EN pulse width minimum is 450ns; 1us keeps it comfortable
        self.en.set_high().map_err(|_| LcdError::Communication)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(|_| LcdError::Communication)?;
        self.delay.delay_us(1);

        Ok(())
    }

    /// Send a full byte as two nibbles, high first
    fn send(&mut self, byte: u8, data_mode: bool) -> Result<(), LcdError> {
        self.write_nibble(byte >> 4, data_mode)?;
        self.write_nibble(byte & 0x0F, data_mode)?;
        self.delay.delay_us(COMMAND_SETTLE_US);
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<(), LcdError> {
        self.send(byte, false)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), LcdError> {
        self.send(byte, true)
    }
}

impl<P, D> CharacterLcd for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), LcdError> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(CLEAR_SETTLE_US);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError> {
        if col as usize >= LCD_COLUMNS || row as usize >= LCD_ROWS {
            return Err(LcdError::InvalidPosition);
        }
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LcdError> {
        for &byte in data {
            self.write_data(byte)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLUMNS as u8, LCD_ROWS as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// Bus activity log shared by all mock pins
    type Log = Rc<RefCell<Vec<(PinId, bool)>>>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PinId {
        Rs,
        En,
        Data(u8),
    }

    #[derive(Clone)]
    struct MockPin {
        id: PinId,
        log: Log,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, true));
            Ok(())
        }
    }

    struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd() -> (Hd44780<MockPin, MockDelay>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |id| MockPin {
            id,
            log: Rc::clone(&log),
        };
        let lcd = Hd44780::new(
            pin(PinId::Rs),
            pin(PinId::En),
            [
                pin(PinId::Data(0)),
                pin(PinId::Data(1)),
                pin(PinId::Data(2)),
                pin(PinId::Data(3)),
            ],
            MockDelay,
        );
        (lcd, log)
    }

    /// Replay the pin log, sampling RS and D4..D7 at each EN falling edge
    fn nibbles(log: &Log) -> Vec<(bool, u8)> {
        let mut rs = false;
        let mut en = false;
        let mut data = [false; 4];
        let mut out = Vec::new();

        for &(id, level) in log.borrow().iter() {
            match id {
                PinId::Rs => rs = level,
                PinId::Data(i) => data[i as usize] = level,
                PinId::En => {
                    if en && !level {
                        let nibble = data
                            .iter()
                            .enumerate()
                            .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i));
                        out.push((rs, nibble));
                    }
                    en = level;
                }
            }
        }
        out
    }

    /// Pair nibbles (high first) back into bytes
    fn bytes(nibbles: &[(bool, u8)]) -> Vec<(bool, u8)> {
        nibbles
            .chunks(2)
            .map(|pair| (pair[0].0, pair[0].1 << 4 | pair[1].1))
            .collect()
    }

    #[test]
    fn init_runs_the_four_bit_wakeup_sequence() {
        let (mut lcd, log) = lcd();
        lcd.init().unwrap();

        let seen = nibbles(&log);
        // Three 8-bit pokes then the switch to 4-bit mode, all commands
        assert_eq!(seen[..4], [(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]);

        // Function set (2 lines), display on, entry increment, clear
        let config = bytes(&seen[4..]);
        assert_eq!(
            config,
            [(false, 0x28), (false, 0x0C), (false, 0x06), (false, 0x01)]
        );
    }

    #[test]
    fn set_cursor_addresses_ddram_per_row() {
        let (mut lcd, log) = lcd();

        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(5, 1).unwrap();

        let seen = bytes(&nibbles(&log));
        assert_eq!(seen, [(false, 0x80), (false, 0x80 | 0x40 | 5)]);
    }

    #[test]
    fn set_cursor_rejects_out_of_range_positions() {
        let (mut lcd, _log) = lcd();
        assert_eq!(lcd.set_cursor(16, 0), Err(LcdError::InvalidPosition));
        assert_eq!(lcd.set_cursor(0, 2), Err(LcdError::InvalidPosition));
    }

    #[test]
    fn write_bytes_sends_data_with_rs_high() {
        let (mut lcd, log) = lcd();
        lcd.write_bytes(b"Hi").unwrap();

        let seen = bytes(&nibbles(&log));
        assert_eq!(seen, [(true, b'H'), (true, b'i')]);
    }

    #[test]
    fn clear_issues_the_clear_instruction() {
        let (mut lcd, log) = lcd();
        lcd.clear().unwrap();

        let seen = bytes(&nibbles(&log));
        assert_eq!(seen, [(false, 0x01)]);
    }

    #[test]
    fn dimensions_match_the_panel() {
        let (lcd, _log) = lcd();
        assert_eq!(lcd.dimensions(), (16, 2));
    }
}
