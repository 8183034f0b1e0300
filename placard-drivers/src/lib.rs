//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in placard-core:
//!
//! - HD44780 character LCD (4-bit parallel interface)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod lcd;
