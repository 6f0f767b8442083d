//! Communications channel to a device on an I2S bus
//!
//! This crate is the frontend of an I2S driver: it binds immutable
//! connection settings, forwards reads and writes over byte or 16-bit sample
//! buffers, and releases the native resource handle exactly once. All bus
//! work lives behind the [`NativeI2sBackend`] trait, implemented per
//! platform.
//!
//! # Architecture Layers
//!
//! ```text
//! Application
//!         ↓
//! I2sDevice (this crate - lifecycle + call-through)
//!         ↓
//! NativeI2sBackend (per-platform: clocks, pins, DMA / interrupts)
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library support and [`mocks`] (for testing)
//! - `defmt`: Enable defmt logging and `defmt::Format` derives
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() -> Result<(), i2s_device::I2sError<i2s_device::mocks::MockError>> {
//! use i2s_device::mocks::MockBackend;
//! use i2s_device::{I2sConnectionSettings, I2sDevice};
//!
//! let mut backend = MockBackend::new();
//! let mut device = I2sDevice::create(&mut backend, I2sConnectionSettings::new(0))?;
//!
//! device.write(&[0x1234u16, 0x5678])?;
//! let mut samples = [0u16; 2];
//! device.read(&mut samples)?;
//! device.close();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod backend;
pub mod config;
pub mod device;
pub mod error;
pub mod io;
pub mod mocks;
pub mod settings;
pub mod word;

pub use backend::NativeI2sBackend;
pub use device::I2sDevice;
pub use error::{I2sError, SettingsError};
pub use settings::{
    I2sBitsPerSample, I2sChannelFormat, I2sCommunicationFormat, I2sConnectionSettings,
    I2sDirection, I2sMode, I2sRole,
};
pub use word::{Word, WordWidth, Words, WordsMut};
