//! Crate-wide configuration constants
//!
//! Defaults and limits used by [`I2sConnectionSettings`](crate::I2sConnectionSettings).
//! Backends should reference these rather than hardcoding values.

/// Crate version (synchronized with Cargo.toml)
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bus index used when none is given.
pub const DEFAULT_BUS_ID: u8 = 1;

/// Default sample rate: 44.1 kHz (CD audio).
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;

/// Minimum meaningful sample rate: 8000 Hz (telephony).
pub const MIN_SAMPLE_RATE_HZ: u32 = 8_000;

/// Maximum sample rate accepted by [`validate`](crate::I2sConnectionSettings::validate): 768 kHz PCM.
pub const MAX_SAMPLE_RATE_HZ: u32 = 768_000;
