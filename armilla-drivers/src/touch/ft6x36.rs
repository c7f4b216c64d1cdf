//! FT6x36 capacitive touch controller link
//!
//! Polled register reads over I2C; no interrupt line required. One
//! `write_read` fetches the touch-count register and the first contact
//! point block in a single bus transaction, so a failed transfer costs one
//! tick at most and surfaces as "no data".

use armilla_core::traits::{RawTouch, TouchLink};
use embedded_hal::i2c::I2c;

/// Default 7-bit bus address
pub const FT6X36_ADDR: u8 = 0x38;

// Register map (FT6x06/FT6x36 family)
const REG_TD_STATUS: u8 = 0x02;
const REG_FOCALTECH_ID: u8 = 0xA8;
const FOCALTECH_ID: u8 = 0x11;

/// FT6x36 bus link
pub struct Ft6x36<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ft6x36<I2C> {
    /// Create a link at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, FT6X36_ADDR)
    }

    /// Create a link at a non-default address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read TD_STATUS plus the P1 contact block
    fn read_report(&mut self) -> Result<RawTouch, I2C::Error> {
        // TD_STATUS, P1_XH, P1_XL, P1_YH, P1_YL, P1_WEIGHT
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_TD_STATUS], &mut buf)?;

        Ok(RawTouch {
            touches: buf[0] & 0x0F,
            // High nibbles carry event flags; position is 12 bits
            x: ((buf[1] & 0x0F) as u16) << 8 | buf[2] as u16,
            y: ((buf[3] & 0x0F) as u16) << 8 | buf[4] as u16,
            pressure: buf[5],
        })
    }
}

impl<I2C: I2c> TouchLink for Ft6x36<I2C> {
    fn probe(&mut self) -> Option<RawTouch> {
        self.read_report().ok()
    }

    fn presence_check(&mut self) -> bool {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(self.address, &[REG_FOCALTECH_ID], &mut id)
            .is_ok()
            && id[0] == FOCALTECH_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Mock I2C bus backed by a register file
    struct MockI2c {
        regs: [u8; 0xB0],
        fail: bool,
    }

    #[derive(Debug)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }

            let mut reg = 0usize;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        reg = bytes[0] as usize;
                    }
                    Operation::Read(buf) => {
                        for (i, b) in buf.iter_mut().enumerate() {
                            *b = self.regs[reg + i];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    fn mock_with_contact(touches: u8, x: u16, y: u16, weight: u8) -> MockI2c {
        let mut regs = [0u8; 0xB0];
        regs[0x02] = touches;
        regs[0x03] = (x >> 8) as u8 & 0x0F;
        regs[0x04] = (x & 0xFF) as u8;
        regs[0x05] = (y >> 8) as u8 & 0x0F;
        regs[0x06] = (y & 0xFF) as u8;
        regs[0x07] = weight;
        regs[0xA8] = FOCALTECH_ID;
        MockI2c { regs, fail: false }
    }

    #[test]
    fn test_report_decode() {
        let mut link = Ft6x36::new(mock_with_contact(1, 0x123, 0x0AB, 42));
        let raw = link.probe().unwrap();

        assert_eq!(raw.touches, 1);
        assert_eq!(raw.x, 0x123);
        assert_eq!(raw.y, 0x0AB);
        assert_eq!(raw.pressure, 42);
    }

    #[test]
    fn test_event_flag_bits_masked_out() {
        let mut mock = mock_with_contact(1, 0x050, 0x060, 10);
        // Put-down event flag in the top bits of P1_XH must not leak into X
        mock.regs[0x03] |= 0x80;
        let raw = Ft6x36::new(mock).probe().unwrap();
        assert_eq!(raw.x, 0x050);
    }

    #[test]
    fn test_bus_error_is_no_data() {
        let mut mock = mock_with_contact(1, 0x050, 0x060, 10);
        mock.fail = true;
        let mut link = Ft6x36::new(mock);
        assert!(link.probe().is_none());
        assert!(!link.presence_check());
    }

    #[test]
    fn test_presence_check_reads_vendor_id() {
        let mut link = Ft6x36::new(mock_with_contact(0, 0, 0, 0));
        assert!(link.presence_check());

        let mut wrong = mock_with_contact(0, 0, 0, 0);
        wrong.regs[0xA8] = 0x00;
        assert!(!Ft6x36::new(wrong).presence_check());
    }
}
