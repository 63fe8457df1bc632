use crate::error::{Error, Result};

/// Factory I2C address of the common HSC ordering option.
pub const DEFAULT_ADDRESS: u16 = 0x28;
/// Linux I2C bus exposed on the Raspberry Pi header (`/dev/i2c-1`).
pub const DEFAULT_BUS: u8 = 1;
pub const DEFAULT_MAX_PRESSURE: f64 = 100.0;

/// Construction options for a [`PressureDecoder`](crate::PressureDecoder).
#[derive(Debug, Clone, PartialEq)]
pub struct SensorConfig {
    /// Linux I2C bus index, only used when opening the bus.
    pub bus: u8,
    /// Interpreted by the bus adapter.
    pub address: u16,
    /// Full-scale rated pressure, in whatever unit the part is rated in.
    pub max_pressure: f64,
    /// Zero the sensor against the first reading during construction.
    pub auto_calibrate: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            bus: DEFAULT_BUS,
            address: DEFAULT_ADDRESS,
            max_pressure: DEFAULT_MAX_PRESSURE,
            auto_calibrate: true,
        }
    }
}

impl SensorConfig {
    pub fn validate<E>(&self) -> Result<(), E> {
        if !(self.max_pressure.is_finite() && self.max_pressure > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "max pressure must be positive, got {}",
                self.max_pressure
            )));
        }
        Ok(())
    }
}
