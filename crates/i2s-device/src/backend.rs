//! Native backend abstraction
//!
//! Everything that touches hardware (bus claim, clock and pin setup, DMA or
//! interrupt transfer, teardown) lives behind [`NativeI2sBackend`]. The
//! channel in [`device`](crate::device) only sequences these four calls.

use crate::settings::I2sConnectionSettings;
use crate::word::{Words, WordsMut};

/// The native I2S layer for one platform.
///
/// Every call is blocking and performs exactly one operation. No retries are
/// expected at this level; failures are returned to the channel as-is.
pub trait NativeI2sBackend {
    /// Opaque resource identifier returned by [`init`](Self::init).
    ///
    /// Moved into [`dispose`](Self::dispose), so a handle can only be
    /// released once.
    type Handle;

    /// Error type
    type Error: core::fmt::Debug;

    /// Claim the bus and configure clocks and pins per `settings`.
    fn init(&mut self, settings: &I2sConnectionSettings) -> Result<Self::Handle, Self::Error>;

    /// Receive exactly `buffer.len()` units into `buffer`, starting at index 0.
    fn read(&mut self, handle: &mut Self::Handle, buffer: WordsMut<'_>)
        -> Result<(), Self::Error>;

    /// Transmit exactly `buffer.len()` units. `buffer` carries no device address.
    fn write(&mut self, handle: &mut Self::Handle, buffer: Words<'_>) -> Result<(), Self::Error>;

    /// Release all driver-side resources held by `handle`.
    fn dispose(&mut self, handle: Self::Handle);
}

impl<B: NativeI2sBackend + ?Sized> NativeI2sBackend for &mut B {
    type Handle = B::Handle;
    type Error = B::Error;

    fn init(&mut self, settings: &I2sConnectionSettings) -> Result<Self::Handle, Self::Error> {
        B::init(self, settings)
    }

    fn read(
        &mut self,
        handle: &mut Self::Handle,
        buffer: WordsMut<'_>,
    ) -> Result<(), Self::Error> {
        B::read(self, handle, buffer)
    }

    fn write(&mut self, handle: &mut Self::Handle, buffer: Words<'_>) -> Result<(), Self::Error> {
        B::write(self, handle, buffer)
    }

    fn dispose(&mut self, handle: Self::Handle) {
        B::dispose(self, handle);
    }
}
