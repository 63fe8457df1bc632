//! Honeywell HSC-series digital pressure sensor over I2C.
//!
//! [`PressureDecoder`] turns the sensor's 4-byte block reads into calibrated
//! pressure and status. The bus is anything implementing [`BusReader`]:
//! `rppal`'s Linux I2C handle on a Raspberry Pi, or any `embedded-hal` bus
//! through [`HalBus`].

mod bus;
mod config;
mod decoder;
mod error;
mod structs;

pub use bus::{BusReader, HalBus, HalBusError};
pub use config::{SensorConfig, DEFAULT_ADDRESS, DEFAULT_BUS, DEFAULT_MAX_PRESSURE};
pub use decoder::{decode_counts, decode_status, PressureDecoder, OUTPUT_MAX, OUTPUT_MIN_DEFAULT};
pub use error::{Error, Result};
pub use structs::{RawReading, Sample, Status, RAW_READING_LEN};
