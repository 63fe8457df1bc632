use thiserror::Error;

/// Errors returned by the decoder. `E` is the bus transport's error type.
#[derive(Error, Debug)]
pub enum Error<E> {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("bus error during {operation}: {source}")]
    Bus {
        operation: &'static str,
        #[source]
        source: E,
    },
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },
    #[error("degenerate calibration: output_min {output_min} must be below output_max {output_max}")]
    DegenerateCalibration { output_min: u16, output_max: u16 },
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
