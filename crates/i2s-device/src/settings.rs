//! I2S connection settings
//!
//! [`I2sConnectionSettings`] identifies the bus instance and the framing
//! parameters of one device on it. It is a plain `Copy` value: a channel
//! keeps its own copy, so whatever the caller does with theirs afterwards
//! cannot reach the bound configuration.
//!
//! ```
//! use i2s_device::{I2sBitsPerSample, I2sConnectionSettings, I2sMode};
//!
//! let settings = I2sConnectionSettings::new(0)
//!     .with_mode(I2sMode::MASTER_TX)
//!     .with_sample_rate(48_000)
//!     .with_bits_per_sample(I2sBitsPerSample::Bits16);
//!
//! assert_eq!(settings.bit_clock_hz(), Some(1_536_000));
//! assert!(settings.validate().is_ok());
//! ```

use crate::config::{DEFAULT_BUS_ID, DEFAULT_SAMPLE_RATE_HZ, MAX_SAMPLE_RATE_HZ, MIN_SAMPLE_RATE_HZ};
use crate::error::SettingsError;

/// Which side drives BCLK and WS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sRole {
    /// This controller generates the clocks.
    Master,
    /// The device generates the clocks.
    Slave,
}

/// Data direction on the serial data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sDirection {
    /// Controller to device.
    Transmit,
    /// Device to controller.
    Receive,
}

/// Clock role, direction and PDM flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sMode {
    /// Clock role.
    pub role: I2sRole,
    /// Data direction.
    pub direction: I2sDirection,
    /// Pulse-density modulation (PDM microphones and speakers).
    pub pdm: bool,
}

impl I2sMode {
    /// Master transmitter.
    pub const MASTER_TX: Self = Self::new(I2sRole::Master, I2sDirection::Transmit);
    /// Master receiver.
    pub const MASTER_RX: Self = Self::new(I2sRole::Master, I2sDirection::Receive);
    /// Slave transmitter.
    pub const SLAVE_TX: Self = Self::new(I2sRole::Slave, I2sDirection::Transmit);
    /// Slave receiver.
    pub const SLAVE_RX: Self = Self::new(I2sRole::Slave, I2sDirection::Receive);

    /// PCM mode with the given role and direction.
    pub const fn new(role: I2sRole, direction: I2sDirection) -> Self {
        Self {
            role,
            direction,
            pdm: false,
        }
    }

    /// Same role and direction, with PDM enabled.
    #[must_use]
    pub const fn with_pdm(self) -> Self {
        Self { pdm: true, ..self }
    }
}

/// Bits per sample slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sBitsPerSample {
    /// 8-bit samples
    Bits8,
    /// 16-bit samples
    Bits16,
    /// 24-bit samples
    Bits24,
    /// 32-bit samples
    Bits32,
}

impl I2sBitsPerSample {
    /// Width in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }
}

/// How left and right slots are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sChannelFormat {
    /// Separate left and right (stereo).
    RightLeft,
    /// Right channel duplicated into both slots.
    AllRight,
    /// Left channel duplicated into both slots.
    AllLeft,
    /// Right slot only.
    OnlyRight,
    /// Left slot only.
    OnlyLeft,
}

impl I2sChannelFormat {
    /// Number of slots clocked per frame.
    pub const fn slots(self) -> u8 {
        match self {
            Self::RightLeft | Self::AllRight | Self::AllLeft => 2,
            Self::OnlyRight | Self::OnlyLeft => 1,
        }
    }
}

/// Frame alignment on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sCommunicationFormat {
    /// Philips I2S: data delayed one BCLK after WS edge.
    I2s,
    /// MSB (left) justified.
    Msb,
    /// PCM short frame sync.
    PcmShort,
    /// PCM long frame sync.
    PcmLong,
}

/// Connection settings of a device on an I2S bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sConnectionSettings {
    /// Bus instance the device is wired to.
    pub bus_id: u8,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Clock role, direction and PDM flag.
    pub mode: I2sMode,
    /// Bits per sample slot.
    pub bits_per_sample: I2sBitsPerSample,
    /// Slot population.
    pub channel_format: I2sChannelFormat,
    /// Frame alignment.
    pub communication_format: I2sCommunicationFormat,
}

impl I2sConnectionSettings {
    /// Settings for `bus_id`: 44.1 kHz, 16-bit stereo Philips I2S, master receive.
    pub const fn new(bus_id: u8) -> Self {
        Self {
            bus_id,
            sample_rate: DEFAULT_SAMPLE_RATE_HZ,
            mode: I2sMode::MASTER_RX,
            bits_per_sample: I2sBitsPerSample::Bits16,
            channel_format: I2sChannelFormat::RightLeft,
            communication_format: I2sCommunicationFormat::I2s,
        }
    }

    /// Replace the sample rate.
    #[must_use]
    pub const fn with_sample_rate(self, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..self
        }
    }

    /// Replace the mode.
    #[must_use]
    pub const fn with_mode(self, mode: I2sMode) -> Self {
        Self { mode, ..self }
    }

    /// Replace the sample width.
    #[must_use]
    pub const fn with_bits_per_sample(self, bits_per_sample: I2sBitsPerSample) -> Self {
        Self {
            bits_per_sample,
            ..self
        }
    }

    /// Replace the channel format.
    #[must_use]
    pub const fn with_channel_format(self, channel_format: I2sChannelFormat) -> Self {
        Self {
            channel_format,
            ..self
        }
    }

    /// Replace the communication format.
    #[must_use]
    pub const fn with_communication_format(
        self,
        communication_format: I2sCommunicationFormat,
    ) -> Self {
        Self {
            communication_format,
            ..self
        }
    }

    /// Bits clocked per frame (`bits_per_sample × slots`).
    // Max 32 × 2 = 64, cannot overflow u16.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn frame_bits(&self) -> u16 {
        self.bits_per_sample.bits() as u16 * self.channel_format.slots() as u16
    }

    /// Bit clock (BCLK) frequency in Hz, or `None` on overflow.
    ///
    /// BCLK = `frame_bits` × `sample_rate`.
    /// For 16-bit / stereo / 48 kHz: 1 536 000 Hz.
    pub fn bit_clock_hz(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.frame_bits()))
    }

    /// Check the settings against the limits in [`config`](crate::config).
    ///
    /// The channel itself never calls this; backends may, to reject invalid
    /// settings as an initialization failure.
    ///
    /// # Errors
    ///
    /// The first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_SAMPLE_RATE_HZ..=MAX_SAMPLE_RATE_HZ).contains(&self.sample_rate) {
            return Err(SettingsError::SampleRateOutOfRange {
                value: self.sample_rate,
                min: MIN_SAMPLE_RATE_HZ,
                max: MAX_SAMPLE_RATE_HZ,
            });
        }
        if self.mode.pdm && self.mode.role != I2sRole::Master {
            return Err(SettingsError::PdmRequiresMaster);
        }
        Ok(())
    }
}

impl Default for I2sConnectionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BUS_ID)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_cd_quality_stereo() {
        let s = I2sConnectionSettings::default();
        assert_eq!(s.bus_id, DEFAULT_BUS_ID);
        assert_eq!(s.sample_rate, 44_100);
        assert_eq!(s.bits_per_sample, I2sBitsPerSample::Bits16);
        assert_eq!(s.channel_format, I2sChannelFormat::RightLeft);
        assert_eq!(s.mode, I2sMode::MASTER_RX);
    }

    #[test]
    fn builders_return_new_values() {
        let base = I2sConnectionSettings::new(0);
        let tuned = base.with_sample_rate(96_000);
        assert_eq!(base.sample_rate, 44_100, "builder must not mutate the original");
        assert_eq!(tuned.sample_rate, 96_000);
    }

    #[test]
    fn frame_bits_counts_slots() {
        let stereo = I2sConnectionSettings::new(0).with_bits_per_sample(I2sBitsPerSample::Bits32);
        assert_eq!(stereo.frame_bits(), 64);
        let mono = stereo.with_channel_format(I2sChannelFormat::OnlyLeft);
        assert_eq!(mono.frame_bits(), 32);
    }

    #[test]
    fn bit_clock_overflow_is_none() {
        let s = I2sConnectionSettings::new(0)
            .with_bits_per_sample(I2sBitsPerSample::Bits32)
            .with_sample_rate(u32::MAX);
        assert_eq!(s.bit_clock_hz(), None);
    }

    #[test]
    fn validate_rejects_sample_rate_out_of_range() {
        let s = I2sConnectionSettings::new(0).with_sample_rate(7_999);
        assert_eq!(
            s.validate(),
            Err(SettingsError::SampleRateOutOfRange {
                value: 7_999,
                min: MIN_SAMPLE_RATE_HZ,
                max: MAX_SAMPLE_RATE_HZ,
            })
        );
        assert!(s.with_sample_rate(768_001).validate().is_err());
        assert!(s.with_sample_rate(768_000).validate().is_ok());
    }

    #[test]
    fn validate_rejects_pdm_slave() {
        let s = I2sConnectionSettings::new(0).with_mode(I2sMode::SLAVE_RX.with_pdm());
        assert_eq!(s.validate(), Err(SettingsError::PdmRequiresMaster));
        let ok = s.with_mode(I2sMode::MASTER_RX.with_pdm());
        assert!(ok.validate().is_ok());
    }
}
