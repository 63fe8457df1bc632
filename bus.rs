use embedded_hal::i2c::I2c as HalI2c;
use rppal::i2c::I2c;
use thiserror::Error;

// 7-bit addressing only on embedded-hal buses.
const MAX_HAL_ADDRESS: u16 = 0x7F;

/// Block reads from a device on a two-wire bus.
pub trait BusReader {
    type Error;

    /// Reads `buf.len()` bytes starting at `register`, returning how many
    /// bytes were actually read.
    fn read_block(&mut self, address: u16, register: u8, buf: &mut [u8])
        -> Result<usize, Self::Error>;
}

impl BusReader for I2c {
    type Error = rppal::i2c::Error;

    fn read_block(
        &mut self,
        address: u16,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.set_slave_address(address)?;
        // Repeated start, same as an SMBus I2C block read.
        self.write_read(&[register], buf)?;
        Ok(buf.len())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum HalBusError<E> {
    #[error("address {0:#x} is not a 7-bit I2C address")]
    InvalidAddress(u16),
    #[error("i2c error: {0:?}")]
    I2c(E),
}

/// Adapter for any `embedded-hal` I2C bus.
pub struct HalBus<I2C> {
    i2c: I2C,
}

impl<I2C: HalI2c> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: HalI2c> BusReader for HalBus<I2C> {
    type Error = HalBusError<I2C::Error>;

    fn read_block(
        &mut self,
        address: u16,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        let device = u8::try_from(address)
            .ok()
            .filter(|_| address <= MAX_HAL_ADDRESS)
            .ok_or(HalBusError::InvalidAddress(address))?;
        self.i2c
            .write_read(device, &[register], buf)
            .map_err(HalBusError::I2c)?;
        Ok(buf.len())
    }
}
