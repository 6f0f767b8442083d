//! Mock implementations for testing
//!
//! [`MockBackend`] implements [`NativeI2sBackend`] without any hardware
//! dependency. It records every native call for assertion in tests.
//!
//! Lend it to a channel as `&mut MockBackend` to inspect the record after
//! the channel has been closed or dropped.

#![cfg(any(test, feature = "std"))]

use crate::*;

/// Maximum number of transfers kept in the log. Older entries are dropped.
pub const TRANSFER_LOG_DEPTH: usize = 64;

/// Maximum number of units kept from the last write.
pub const WRITE_CAPTURE_DEPTH: usize = 256;

/// Failure modes the mock can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Settings rejected by [`I2sConnectionSettings::validate`].
    InvalidSettings(SettingsError),
    /// Bus already claimed.
    BusUnavailable,
    /// Transfer did not complete.
    Timeout,
    /// Hardware fault during transfer.
    HardwareFault,
}

/// Transfer direction as seen by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Native read
    Read,
    /// Native write
    Write,
}

/// One recorded native transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Read or write
    pub direction: Direction,
    /// Unit width
    pub width: WordWidth,
    /// Units passed to the backend
    pub units: usize,
}

/// Handle issued by [`MockBackend`]. Deliberately neither `Copy` nor `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct MockHandle {
    id: u32,
    bus_id: u8,
}

impl MockHandle {
    /// Sequence number, starting at 1.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Bus the handle was issued for.
    pub fn bus_id(&self) -> u8 {
        self.bus_id
    }
}

/// Mock backend — records all calls for test assertions.
pub struct MockBackend {
    init_count: usize,
    dispose_count: usize,
    next_id: u32,
    released: heapless::Vec<u32, TRANSFER_LOG_DEPTH>,
    transfers: heapless::Vec<Transfer, TRANSFER_LOG_DEPTH>,
    last_write: heapless::Vec<u16, WRITE_CAPTURE_DEPTH>,
    pattern: u16,
    init_failure: Option<MockError>,
    transfer_failure: Option<MockError>,
}

impl MockBackend {
    /// Create new mock backend
    pub fn new() -> Self {
        Self {
            init_count: 0,
            dispose_count: 0,
            next_id: 1,
            released: heapless::Vec::new(),
            transfers: heapless::Vec::new(),
            last_write: heapless::Vec::new(),
            pattern: 0,
            init_failure: None,
            transfer_failure: None,
        }
    }

    /// Make the next [`init`](NativeI2sBackend::init) fail with `error`.
    pub fn fail_next_init(&mut self, error: MockError) {
        self.init_failure = Some(error);
    }

    /// Make the next read or write fail with `error`.
    pub fn fail_next_transfer(&mut self, error: MockError) {
        self.transfer_failure = Some(error);
    }

    /// Number of `init` calls, successful or not.
    pub fn init_count(&self) -> usize {
        self.init_count
    }

    /// Number of `dispose` calls.
    pub fn dispose_count(&self) -> usize {
        self.dispose_count
    }

    /// Ids of released handles, in release order.
    pub fn released(&self) -> &[u32] {
        &self.released
    }

    /// Transfers in call order (oldest first).
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Units of the most recent write, widened to `u16`.
    pub fn last_write(&self) -> &[u16] {
        &self.last_write
    }

    fn record(&mut self, transfer: Transfer) {
        if self.transfers.is_full() {
            self.transfers.remove(0);
        }
        let _ = self.transfers.push(transfer);
    }

    fn next_pattern(&mut self) -> u16 {
        let value = self.pattern;
        self.pattern = self.pattern.wrapping_add(1);
        value
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeI2sBackend for MockBackend {
    type Handle = MockHandle;
    type Error = MockError;

    fn init(&mut self, settings: &I2sConnectionSettings) -> Result<Self::Handle, Self::Error> {
        self.init_count = self.init_count.saturating_add(1);
        if let Some(error) = self.init_failure.take() {
            return Err(error);
        }
        settings.validate().map_err(MockError::InvalidSettings)?;

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(MockHandle {
            id,
            bus_id: settings.bus_id,
        })
    }

    fn read(
        &mut self,
        _handle: &mut Self::Handle,
        buffer: WordsMut<'_>,
    ) -> Result<(), Self::Error> {
        self.record(Transfer {
            direction: Direction::Read,
            width: buffer.width(),
            units: buffer.len(),
        });
        if let Some(error) = self.transfer_failure.take() {
            return Err(error);
        }
        match buffer {
            WordsMut::Bytes(bytes) => {
                for b in bytes.iter_mut() {
                    let [low, _] = self.next_pattern().to_le_bytes();
                    *b = low;
                }
            }
            WordsMut::Samples(samples) => {
                for s in samples.iter_mut() {
                    *s = self.next_pattern();
                }
            }
        }
        Ok(())
    }

    fn write(&mut self, _handle: &mut Self::Handle, buffer: Words<'_>) -> Result<(), Self::Error> {
        self.record(Transfer {
            direction: Direction::Write,
            width: buffer.width(),
            units: buffer.len(),
        });
        if let Some(error) = self.transfer_failure.take() {
            return Err(error);
        }
        self.last_write.clear();
        match buffer {
            Words::Bytes(bytes) => {
                for &b in bytes.iter().take(WRITE_CAPTURE_DEPTH) {
                    let _ = self.last_write.push(u16::from(b));
                }
            }
            Words::Samples(samples) => {
                for &s in samples.iter().take(WRITE_CAPTURE_DEPTH) {
                    let _ = self.last_write.push(s);
                }
            }
        }
        Ok(())
    }

    fn dispose(&mut self, handle: Self::Handle) {
        self.dispose_count = self.dispose_count.saturating_add(1);
        if self.released.is_full() {
            self.released.remove(0);
        }
        let _ = self.released.push(handle.id);
    }
}
