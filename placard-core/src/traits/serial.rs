//! Byte-oriented message source abstraction
//!
//! Models the receive half of the host link: an unframed stream of bytes
//! that can be checked for pending data without consuming it.

/// Receive side of the serial link
pub trait MessageSource {
    /// Error type for receive operations
    type Error;

    /// Check whether any bytes are currently buffered.
    ///
    /// Must not consume anything and must not wait for data to arrive.
    fn has_data(&mut self) -> Result<bool, Self::Error>;

    /// Read currently buffered bytes into `buf`.
    ///
    /// Returns the number of bytes consumed. Only waits when nothing is
    /// buffered, so callers that check [`MessageSource::has_data`] first
    /// get whatever has arrived at that moment and nothing more.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
