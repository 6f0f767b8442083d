//! Transfer unit widths
//!
//! A transfer moves either bytes or 16-bit samples. [`Word`] is implemented
//! for `u8` and `u16` only, so [`I2sDevice::read`](crate::I2sDevice::read)
//! and [`I2sDevice::write`](crate::I2sDevice::write) are one generic
//! operation instead of two overloads. Backends receive the buffer as a
//! [`Words`] / [`WordsMut`] view and dispatch on its width.

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// Width of one transfer unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordWidth {
    /// 8-bit units (bytes)
    Bits8,
    /// 16-bit units (samples)
    Bits16,
}

impl WordWidth {
    /// Size of one unit in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits8 => 1,
            Self::Bits16 => 2,
        }
    }
}

/// A transfer unit: `u8` or `u16`.
pub trait Word: sealed::Sealed + Copy + Default + 'static {
    /// Width of `Self`.
    const WIDTH: WordWidth;

    /// Borrow a slice of `Self` as a backend view.
    fn as_words(buffer: &[Self]) -> Words<'_>;

    /// Borrow a mutable slice of `Self` as a backend view.
    fn as_words_mut(buffer: &mut [Self]) -> WordsMut<'_>;
}

impl Word for u8 {
    const WIDTH: WordWidth = WordWidth::Bits8;

    fn as_words(buffer: &[Self]) -> Words<'_> {
        Words::Bytes(buffer)
    }

    fn as_words_mut(buffer: &mut [Self]) -> WordsMut<'_> {
        WordsMut::Bytes(buffer)
    }
}

impl Word for u16 {
    const WIDTH: WordWidth = WordWidth::Bits16;

    fn as_words(buffer: &[Self]) -> Words<'_> {
        Words::Samples(buffer)
    }

    fn as_words_mut(buffer: &mut [Self]) -> WordsMut<'_> {
        WordsMut::Samples(buffer)
    }
}

/// Outgoing buffer handed to [`NativeI2sBackend::write`](crate::NativeI2sBackend::write).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Words<'a> {
    /// 8-bit units
    Bytes(&'a [u8]),
    /// 16-bit units
    Samples(&'a [u16]),
}

impl Words<'_> {
    /// Unit width.
    pub fn width(&self) -> WordWidth {
        match self {
            Self::Bytes(_) => WordWidth::Bits8,
            Self::Samples(_) => WordWidth::Bits16,
        }
    }

    /// Number of units (not bytes).
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Samples(s) => s.len(),
        }
    }

    /// `true` for a zero-unit transfer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transfer size in bytes.
    pub fn byte_len(&self) -> Option<usize> {
        self.len().checked_mul(self.width().bytes())
    }
}

/// Incoming buffer handed to [`NativeI2sBackend::read`](crate::NativeI2sBackend::read).
///
/// The backend must overwrite every unit, starting at index 0.
#[derive(Debug, PartialEq, Eq)]
pub enum WordsMut<'a> {
    /// 8-bit units
    Bytes(&'a mut [u8]),
    /// 16-bit units
    Samples(&'a mut [u16]),
}

impl WordsMut<'_> {
    /// Unit width.
    pub fn width(&self) -> WordWidth {
        match self {
            Self::Bytes(_) => WordWidth::Bits8,
            Self::Samples(_) => WordWidth::Bits16,
        }
    }

    /// Number of units (not bytes).
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Samples(s) => s.len(),
        }
    }

    /// `true` for a zero-unit transfer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transfer size in bytes.
    pub fn byte_len(&self) -> Option<usize> {
        self.len().checked_mul(self.width().bytes())
    }
}
