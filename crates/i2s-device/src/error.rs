//! Error types

use thiserror_no_std::Error;

/// Errors surfaced by [`I2sDevice`](crate::I2sDevice).
///
/// `E` is the backend's own error type. Nothing is retried: every backend
/// failure reaches the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sError<E> {
    /// Native initialization failed (invalid settings, bus unavailable,
    /// hardware fault). No channel was created.
    #[error("I2S native initialization failed")]
    Initialization(E),
    /// Read or write on a channel that has already been closed.
    /// Raised before any native call is made.
    #[error("I2S device has been disposed")]
    Disposed,
    /// The native read or write reported failure. Buffer contents are
    /// unspecified.
    #[error("I2S native transfer failed")]
    Transfer(E),
}

impl<E> I2sError<E> {
    /// The backend error, if this error came from the backend.
    pub fn native(&self) -> Option<&E> {
        match self {
            Self::Initialization(e) | Self::Transfer(e) => Some(e),
            Self::Disposed => None,
        }
    }
}

impl<E: core::fmt::Debug> embedded_io::Error for I2sError<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::Disposed => embedded_io::ErrorKind::NotConnected,
            Self::Initialization(_) | Self::Transfer(_) => embedded_io::ErrorKind::Other,
        }
    }
}

/// Reasons [`I2sConnectionSettings::validate`](crate::I2sConnectionSettings::validate) rejects a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Sample rate outside the supported range.
    #[error("sample rate {value} Hz outside {min}..={max} Hz")]
    SampleRateOutOfRange {
        /// The rejected value.
        value: u32,
        /// Inclusive minimum.
        min: u32,
        /// Inclusive maximum.
        max: u32,
    },
    /// PDM requires this controller to drive the clock.
    #[error("PDM mode requires master role")]
    PdmRequiresMaster,
}
