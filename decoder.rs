use log::debug;

use crate::bus::BusReader;
use crate::config::SensorConfig;
use crate::error::{Error, Result};
use crate::structs::{RawReading, Sample, Status, RAW_READING_LEN};

/// Output counts at 90% of the 14-bit range (0x3999).
pub const OUTPUT_MAX: u16 = 14745;
/// Output counts at 10% of the 14-bit range (0x0666), the factory zero.
pub const OUTPUT_MIN_DEFAULT: u16 = 1638;

const DATA_REGISTER: u8 = 0x00;
const COUNTS_MASK: u8 = 0x3F;
const STATUS_MASK: u8 = 0xC0;
const STATUS_SHIFT: u8 = 6;

/// 14-bit bridge output counts from bytes 0-1.
pub fn decode_counts(raw: &RawReading) -> u16 {
    (u16::from(raw[0] & COUNTS_MASK) << 8) | u16::from(raw[1])
}

pub fn decode_status(raw: &RawReading) -> Status {
    Status::from_bits((raw[0] & STATUS_MASK) >> STATUS_SHIFT)
}

/// Honeywell HSC pressure sensor.
///
/// Converts block reads into pressure using the 10%-90% transfer function
///
/// ```text
/// pressure = (counts - output_min) * max_pressure / (OUTPUT_MAX - output_min)
/// ```
///
/// Results are not clamped.
pub struct PressureDecoder<B> {
    bus: B,
    address: u16,
    max_pressure: f64,
    output_min: u16,
    calibrated: bool,
    output_counts: Option<u16>,
    pressure: Option<f64>,
    status: Option<Status>,
}

impl<B: BusReader> PressureDecoder<B> {
    /// With `auto_calibrate` the current reading becomes the zero point, so no
    /// pressure may be applied to the sensor at that moment.
    pub fn new(
        bus: B,
        address: u16,
        max_pressure: f64,
        auto_calibrate: bool,
    ) -> Result<Self, B::Error> {
        let config = SensorConfig {
            address,
            max_pressure,
            auto_calibrate,
            ..Default::default()
        };
        Self::from_config(bus, &config)
    }

    pub fn from_config(bus: B, config: &SensorConfig) -> Result<Self, B::Error> {
        config.validate::<B::Error>()?;

        let mut decoder = Self {
            bus,
            address: config.address,
            max_pressure: config.max_pressure,
            output_min: OUTPUT_MIN_DEFAULT,
            calibrated: false,
            output_counts: None,
            pressure: None,
            status: None,
        };
        if config.auto_calibrate {
            decoder.calibrate()?;
        }
        Ok(decoder)
    }

    pub fn fetch_raw(&mut self) -> Result<RawReading, B::Error> {
        self.read_raw("fetch_raw")
    }

    fn read_raw(&mut self, operation: &'static str) -> Result<RawReading, B::Error> {
        let mut raw: RawReading = [0; RAW_READING_LEN];
        let read = self
            .bus
            .read_block(self.address, DATA_REGISTER, &mut raw)
            .map_err(|source| Error::Bus { operation, source })?;
        if read < RAW_READING_LEN {
            return Err(Error::ShortRead {
                expected: RAW_READING_LEN,
                actual: read,
            });
        }
        debug!("{}: read {:02x?} from {:#04x}", operation, raw, self.address);
        Ok(raw)
    }

    pub fn decode_counts(&self, raw: &RawReading) -> u16 {
        decode_counts(raw)
    }

    pub fn decode_status(&self, raw: &RawReading) -> Status {
        decode_status(raw)
    }

    /// Pressure for `raw`, or for a fresh bus read when `raw` is `None`.
    pub fn get_pressure(&mut self, raw: Option<&RawReading>) -> Result<f64, B::Error> {
        let raw = match raw {
            Some(raw) => *raw,
            None => self.read_raw("get_pressure")?,
        };
        Ok(self.update_pressure(&raw))
    }

    pub fn get_status(&mut self, raw: Option<&RawReading>) -> Result<Status, B::Error> {
        let raw = match raw {
            Some(raw) => *raw,
            None => self.read_raw("get_status")?,
        };
        Ok(self.update_status(&raw))
    }

    /// One bus read decoded into both pressure and status.
    pub fn sample(&mut self) -> Result<Sample, B::Error> {
        let raw = self.read_raw("sample")?;
        let pressure = self.update_pressure(&raw);
        let status = self.update_status(&raw);
        Ok(Sample {
            output_counts: decode_counts(&raw),
            pressure,
            status,
        })
    }

    fn update_pressure(&mut self, raw: &RawReading) -> f64 {
        let counts = decode_counts(raw);
        self.output_counts = Some(counts);

        let pressure = self.counts_to_pressure(counts);
        self.pressure = Some(pressure);
        pressure
    }

    fn update_status(&mut self, raw: &RawReading) -> Status {
        let status = decode_status(raw);
        self.status = Some(status);
        status
    }

    fn counts_to_pressure(&self, counts: u16) -> f64 {
        let output_min = f64::from(self.output_min);
        (f64::from(counts) - output_min) * self.max_pressure
            / (f64::from(OUTPUT_MAX) - output_min)
    }

    /// Makes the most recent output counts the zero point, reading the sensor
    /// first if nothing has been decoded yet. The sensor must be unloaded.
    pub fn calibrate(&mut self) -> Result<(), B::Error> {
        let counts = match self.output_counts {
            Some(counts) => counts,
            None => {
                let raw = self.read_raw("calibrate")?;
                self.update_pressure(&raw);
                decode_counts(&raw)
            }
        };
        self.set_output_min(counts)
    }

    pub fn set_output_min(&mut self, output_min: u16) -> Result<(), B::Error> {
        if output_min >= OUTPUT_MAX {
            return Err(Error::DegenerateCalibration {
                output_min,
                output_max: OUTPUT_MAX,
            });
        }
        debug!(
            "zero point at {:#04x}: {} -> {}",
            self.address, self.output_min, output_min
        );
        self.output_min = output_min;
        self.calibrated = true;
        Ok(())
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    pub fn output_min(&self) -> u16 {
        self.output_min
    }

    pub fn max_pressure(&self) -> f64 {
        self.max_pressure
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn output_counts(&self) -> Option<u16> {
        self.output_counts
    }

    pub fn pressure(&self) -> Option<f64> {
        self.pressure
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn release(self) -> B {
        self.bus
    }
}
