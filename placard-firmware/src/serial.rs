//! Adapter from a buffered UART to the core message source trait

use embedded_io::{Read, ReadReady};
use placard_core::traits::MessageSource;

/// Wraps anything that can report readiness and serve buffered reads
pub struct UartSource<R> {
    inner: R,
}

impl<R> UartSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R> MessageSource for UartSource<R>
where
    R: Read + ReadReady,
{
    type Error = R::Error;

    fn has_data(&mut self) -> Result<bool, Self::Error> {
        self.inner.read_ready()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // Only called after read_ready() reports true, so this returns
        // immediately with whatever the interrupt handler has buffered
        self.inner.read(buf)
    }
}
