//! Board-agnostic core logic for the Placard serial LCD display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (serial source, character LCD)
//! - Fixed-width segmentation of a message into display rows
//! - The poll/settle/render controller cycle

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod controller;
pub mod line;
pub mod traits;

/// Character cells per LCD row
pub const LCD_COLUMNS: usize = 16;

/// Number of LCD rows
pub const LCD_ROWS: usize = 2;

/// Characters the display can show at once; anything past this is dropped
pub const MESSAGE_CAPACITY: usize = LCD_COLUMNS * LCD_ROWS;

/// Capacity of the raw input buffer a burst is drained into
pub const RAW_BUFFER_CAPACITY: usize = 64;

/// Pause after detecting input, letting the rest of a transmission arrive
pub const SETTLE_DELAY_MS: u32 = 100;

/// Baud rate of the host link
pub const BAUD_RATE: u32 = 9600;
