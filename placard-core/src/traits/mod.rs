//! Hardware abstraction traits
//!
//! Implemented by chip-specific adapters so the controller logic stays
//! host-testable.

pub mod lcd;
pub mod serial;

pub use lcd::{CharacterLcd, LcdError};
pub use serial::MessageSource;
