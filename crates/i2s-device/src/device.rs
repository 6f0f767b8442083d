//! The communications channel to a device on an I2S bus
//!
//! # Lifecycle
//!
//! ```text
//! create ──► Open ──(read / write, any count, any order)──► close ──► Closed
//!   │                                                                  ▲
//!   └─► Err(Initialization)                      drop while Open ──────┘
//! ```
//!
//! The native handle lives in an `Option`: `Some` while open, taken out and
//! moved into [`NativeI2sBackend::dispose`] on the first [`I2sDevice::close`].
//! If `close` is never called, [`Drop`] performs the same teardown. Once the
//! handle is gone there is nothing left for either path to release, so the
//! backend sees exactly one `dispose` per channel.
//!
//! # Concurrency
//!
//! No internal locking. `read`, `write` and `close` take `&mut self`; callers
//! sharing a channel across threads wrap it in their own mutex.

use crate::backend::NativeI2sBackend;
use crate::error::I2sError;
use crate::settings::I2sConnectionSettings;
use crate::word::Word;

/// Communications channel to one device on an I2S bus.
pub struct I2sDevice<B: NativeI2sBackend> {
    settings: I2sConnectionSettings,
    backend: B,
    handle: Option<B::Handle>,
}

impl<B: NativeI2sBackend> I2sDevice<B> {
    /// Create a channel to the device described by `settings`.
    ///
    /// Calls [`NativeI2sBackend::init`] once. On failure no channel is
    /// returned and nothing is disposed.
    ///
    /// # Errors
    ///
    /// [`I2sError::Initialization`] if the backend rejects the settings or
    /// the bus is unavailable.
    pub fn create(
        mut backend: B,
        settings: I2sConnectionSettings,
    ) -> Result<Self, I2sError<B::Error>> {
        let handle = backend.init(&settings).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("I2S bus {=u8}: native init failed", settings.bus_id);
            I2sError::Initialization(e)
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "I2S bus {=u8}: opened at {=u32} Hz",
            settings.bus_id,
            settings.sample_rate
        );

        Ok(Self {
            settings,
            backend,
            handle: Some(handle),
        })
    }

    /// Same as [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn new(backend: B, settings: I2sConnectionSettings) -> Result<Self, I2sError<B::Error>> {
        Self::create(backend, settings)
    }

    /// Settings this channel was created with. Constant for its lifetime.
    pub fn settings(&self) -> &I2sConnectionSettings {
        &self.settings
    }

    /// The backend, for inspection.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `true` once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    /// Fill `buffer` from the device.
    ///
    /// Works for `&mut [u8]` and `&mut [u16]`. Exactly `buffer.len()` units
    /// are read in a single blocking native call; a zero-length buffer is
    /// passed through as a zero-unit transfer.
    ///
    /// # Errors
    ///
    /// - [`I2sError::Disposed`] if the channel is closed. No native call is made.
    /// - [`I2sError::Transfer`] if the backend fails. `buffer` contents are
    ///   then unspecified.
    pub fn read<W: Word>(&mut self, buffer: &mut [W]) -> Result<(), I2sError<B::Error>> {
        let handle = self.handle.as_mut().ok_or(I2sError::Disposed)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("I2S read: {=usize} x {}", buffer.len(), W::WIDTH);

        self.backend
            .read(handle, W::as_words_mut(buffer))
            .map_err(I2sError::Transfer)
    }

    /// Send `buffer` to the device.
    ///
    /// Works for `&[u8]` and `&[u16]`. `buffer` must not include the device
    /// address; addressing comes from the bound settings.
    ///
    /// # Errors
    ///
    /// - [`I2sError::Disposed`] if the channel is closed. No native call is made.
    /// - [`I2sError::Transfer`] if the backend fails.
    pub fn write<W: Word>(&mut self, buffer: &[W]) -> Result<(), I2sError<B::Error>> {
        let handle = self.handle.as_mut().ok_or(I2sError::Disposed)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("I2S write: {=usize} x {}", buffer.len(), W::WIDTH);

        self.backend
            .write(handle, W::as_words(buffer))
            .map_err(I2sError::Transfer)
    }

    /// Release the native handle. Calling again is a no-op.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.backend.dispose(handle);

            #[cfg(feature = "defmt")]
            defmt::debug!("I2S bus {=u8}: closed", self.settings.bus_id);
        }
    }
}

impl<B: NativeI2sBackend> Drop for I2sDevice<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "I2S bus {=u8}: dropped without close, releasing",
                self.settings.bus_id
            );
            self.backend.dispose(handle);
        }
    }
}

impl<B: NativeI2sBackend> core::fmt::Debug for I2sDevice<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("I2sDevice")
            .field("settings", &self.settings)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
