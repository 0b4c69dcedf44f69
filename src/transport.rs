use embedded_hal::i2c::{Error as _, I2c, SevenBitAddress};

use crate::TransportError;

/// Sixteen-bit register access on the bus the ADS1115 is attached to.
///
/// Register values travel most-significant byte first. Implementations must
/// return the two bytes combined as a native `u16`, so no byte swapping is
/// needed by callers.
///
/// Implementations are not expected to be shared between threads. If several
/// devices are on one bus, the caller is responsible for serialising access.
pub trait RegisterTransport {
    /// Read the 16-bit register at `pointer` from the device at `address`.
    fn read16(&mut self, address: u8, pointer: u8) -> Result<u16, TransportError>;

    /// Write `value` to the 16-bit register at `pointer` on the device at `address`.
    fn write16(&mut self, address: u8, pointer: u8, value: u16) -> Result<(), TransportError>;
}

/// [`RegisterTransport`] over a blocking [`embedded_hal`] I2C bus.
///
/// A write is a single I2C write of the pointer byte followed by the register value.
/// A read writes the pointer byte and then reads two bytes with a repeated START.
#[derive(Debug)]
pub struct I2cTransport<I> {
    bus: I,
}

impl<I: I2c<SevenBitAddress>> I2cTransport<I> {
    /// Wrap an I2C bus.
    pub fn new(bus: I) -> Self {
        Self { bus }
    }

    /// Give back the wrapped I2C bus.
    pub fn release(self) -> I {
        self.bus
    }
}

impl<I: I2c<SevenBitAddress>> RegisterTransport for I2cTransport<I> {
    fn read16(&mut self, address: u8, pointer: u8) -> Result<u16, TransportError> {
        let mut buf = [0u8; 2];
        self.bus
            .write_read(address, &[pointer], &mut buf)
            .map_err(|e| TransportError::DeviceUnreachable {
                address,
                kind: e.kind(),
            })?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write16(&mut self, address: u8, pointer: u8, value: u16) -> Result<(), TransportError> {
        let [high, low] = value.to_be_bytes();
        self.bus
            .write(address, &[pointer, high, low])
            .map_err(|e| TransportError::DeviceUnreachable {
                address,
                kind: e.kind(),
            })
    }
}
