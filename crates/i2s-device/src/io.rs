//! `embedded-io` byte-stream adapters
//!
//! Lets an [`I2sDevice`] be passed wherever an `embedded_io::Read` or
//! `embedded_io::Write` is expected. Each call is still one blocking native
//! transfer covering the whole buffer, so the reported length is always
//! `buf.len()`. Empty buffers return `Ok(0)` without a native call.

use crate::backend::NativeI2sBackend;
use crate::device::I2sDevice;
use crate::error::I2sError;

impl<B: NativeI2sBackend> embedded_io::ErrorType for I2sDevice<B> {
    type Error = I2sError<B::Error>;
}

impl<B: NativeI2sBackend> embedded_io::Read for I2sDevice<B> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.is_closed() {
            return Err(I2sError::Disposed);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        I2sDevice::read(self, buf)?;
        Ok(buf.len())
    }
}

impl<B: NativeI2sBackend> embedded_io::Write for I2sDevice<B> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.is_closed() {
            return Err(I2sError::Disposed);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        I2sDevice::write(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.is_closed() {
            return Err(I2sError::Disposed);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::mocks::MockBackend;
    use crate::{I2sConnectionSettings, I2sDevice, I2sError};
    use embedded_io::{Read, Write};

    #[test]
    fn read_reports_full_length() {
        let mut dev = I2sDevice::create(MockBackend::new(), I2sConnectionSettings::new(0)).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(Read::read(&mut dev, &mut buf).unwrap(), 8);
    }

    #[test]
    fn write_all_is_one_transfer() {
        let mut mock = MockBackend::new();
        let mut dev = I2sDevice::create(&mut mock, I2sConnectionSettings::new(0)).unwrap();
        dev.write_all(&[1, 2, 3]).unwrap();
        Write::flush(&mut dev).unwrap();
        drop(dev);
        assert_eq!(mock.transfers().len(), 1);
        assert_eq!(mock.last_write(), &[1, 2, 3]);
    }

    #[test]
    fn flush_after_close_is_disposed() {
        let mut dev = I2sDevice::create(MockBackend::new(), I2sConnectionSettings::new(0)).unwrap();
        dev.close();
        assert_eq!(Write::flush(&mut dev), Err(I2sError::Disposed));
    }

    #[test]
    fn empty_buffers_skip_the_backend() {
        let mut mock = MockBackend::new();
        let mut dev = I2sDevice::create(&mut mock, I2sConnectionSettings::new(0)).unwrap();
        assert_eq!(Read::read(&mut dev, &mut []).unwrap(), 0);
        assert_eq!(Write::write(&mut dev, &[]).unwrap(), 0);
        drop(dev);
        assert!(mock.transfers().is_empty());
    }

    #[test]
    fn empty_buffers_on_closed_channel_are_disposed() {
        let mut dev = I2sDevice::create(MockBackend::new(), I2sConnectionSettings::new(0)).unwrap();
        dev.close();
        assert_eq!(Read::read(&mut dev, &mut []), Err(I2sError::Disposed));
        assert_eq!(Write::write(&mut dev, &[]), Err(I2sError::Disposed));
    }
}
