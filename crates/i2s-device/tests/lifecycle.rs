//! Channel lifecycle tests: create, transfer, close, drop.
//! Every assertion is made against the mock backend's call record.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use i2s_device::mocks::{Direction, MockBackend, MockError, Transfer};
use i2s_device::{
    I2sBitsPerSample, I2sConnectionSettings, I2sDevice, I2sError, SettingsError, WordWidth,
};

fn bus0_16bit() -> I2sConnectionSettings {
    I2sConnectionSettings::new(0).with_bits_per_sample(I2sBitsPerSample::Bits16)
}

// ── End-to-end scenario ──────────────────────────────────────────────────────

#[test]
fn write_read_close_twice_then_read_fails() {
    let mut mock = MockBackend::new();
    let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();

    ch.write(&[0x1234u16, 0x5678]).unwrap();

    let mut buf = [0xAAAAu16; 2];
    ch.read(&mut buf).unwrap();
    assert_eq!(buf, [0, 1], "buffer must be fully overwritten");

    ch.close();
    ch.close();

    let mut one = [0u16; 1];
    assert_eq!(ch.read(&mut one), Err(I2sError::Disposed));
    drop(ch);

    assert_eq!(mock.init_count(), 1);
    assert_eq!(mock.dispose_count(), 1);
    assert_eq!(mock.last_write(), &[0x1234, 0x5678]);
    assert_eq!(
        mock.transfers(),
        &[
            Transfer {
                direction: Direction::Write,
                width: WordWidth::Bits16,
                units: 2
            },
            Transfer {
                direction: Direction::Read,
                width: WordWidth::Bits16,
                units: 2
            },
        ]
    );
}

// ── Settings ownership ───────────────────────────────────────────────────────

#[test]
fn settings_are_a_copy_of_the_caller_value() {
    let mut original = bus0_16bit();
    let ch = I2sDevice::create(MockBackend::new(), original).unwrap();

    original.sample_rate = 8_000;
    original.bus_id = 9;

    assert_eq!(*ch.settings(), bus0_16bit());
    assert_ne!(*ch.settings(), original);
}

#[test]
fn settings_survive_close() {
    let mut ch = I2sDevice::create(MockBackend::new(), bus0_16bit()).unwrap();
    ch.close();
    assert_eq!(*ch.settings(), bus0_16bit());
}

// ── Initialization failure ───────────────────────────────────────────────────

#[test]
fn invalid_settings_fail_at_create() {
    let mut mock = MockBackend::new();
    let bad = bus0_16bit().with_sample_rate(1);
    let err = I2sDevice::create(&mut mock, bad).unwrap_err();
    assert!(matches!(
        err,
        I2sError::Initialization(MockError::InvalidSettings(
            SettingsError::SampleRateOutOfRange { value: 1, .. }
        ))
    ));
    assert_eq!(mock.dispose_count(), 0, "no handle, nothing to release");
}

#[test]
fn new_is_create() {
    let mut mock = MockBackend::new();
    let ch = I2sDevice::new(&mut mock, bus0_16bit()).unwrap();
    drop(ch);
    assert_eq!((mock.init_count(), mock.dispose_count()), (1, 1));
}

// ── Teardown ─────────────────────────────────────────────────────────────────

#[test]
fn drop_without_close_releases_once() {
    let mut mock = MockBackend::new();
    {
        let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
        ch.write(&[1u8, 2, 3]).unwrap();
    }
    assert_eq!(mock.dispose_count(), 1);
    assert_eq!(mock.released(), &[1]);
}

#[test]
fn drop_after_close_releases_nothing_more() {
    let mut mock = MockBackend::new();
    {
        let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
        ch.close();
        assert!(ch.is_closed());
    }
    assert_eq!(mock.dispose_count(), 1);
}

#[test]
fn each_channel_owns_its_own_handle() {
    let mut mock = MockBackend::new();
    for _ in 0..3 {
        let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
        ch.close();
    }
    assert_eq!(mock.released(), &[1, 2, 3]);
}

#[test]
fn closed_channel_rejects_both_widths_without_native_calls() {
    let mut mock = MockBackend::new();
    let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
    ch.close();

    assert_eq!(ch.write(&[0u8; 4]), Err(I2sError::Disposed));
    assert_eq!(ch.write(&[0u16; 4]), Err(I2sError::Disposed));
    assert_eq!(ch.read(&mut [0u8; 4]), Err(I2sError::Disposed));
    assert_eq!(ch.read(&mut [0u16; 4]), Err(I2sError::Disposed));
    drop(ch);

    assert!(mock.transfers().is_empty());
}

// ── Transfers ────────────────────────────────────────────────────────────────

#[test]
fn zero_length_buffers_reach_the_backend() {
    let mut mock = MockBackend::new();
    let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
    ch.read::<u8>(&mut []).unwrap();
    ch.write::<u16>(&[]).unwrap();
    drop(ch);

    let log = mock.transfers();
    assert_eq!(log.len(), 2, "zero-length transfers are forwarded, not skipped");
    assert!(log.iter().all(|t| t.units == 0));
}

#[test]
fn transfer_failure_is_surfaced_and_channel_stays_open() {
    let mut mock = MockBackend::new();
    mock.fail_next_transfer(MockError::Timeout);
    let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();

    let mut buf = [0u8; 4];
    assert_eq!(ch.read(&mut buf), Err(I2sError::Transfer(MockError::Timeout)));
    assert!(!ch.is_closed());

    ch.read(&mut buf).unwrap();
}

#[test]
fn byte_and_sample_reads_match_in_bytes() {
    let mut mock = MockBackend::new();
    let mut ch = I2sDevice::create(&mut mock, bus0_16bit()).unwrap();
    ch.read(&mut [0u8; 8]).unwrap();
    ch.read(&mut [0u16; 4]).unwrap();
    drop(ch);

    let log = mock.transfers();
    let bytes: Vec<usize> = log.iter().map(|t| t.units * t.width.bytes()).collect();
    assert_eq!(bytes, vec![8, 8]);
}
