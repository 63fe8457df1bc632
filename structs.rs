use std::fmt;

pub const RAW_READING_LEN: usize = 4;

// Bytes 2-3 carry temperature data, which is not decoded.
pub type RawReading = [u8; RAW_READING_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal = 0,
    CommandMode = 1,
    StaleData = 2,
    Diagnostic = 3,
}

impl Status {
    // Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Status::Normal,
            1 => Status::CommandMode,
            2 => Status::StaleData,
            _ => Status::Diagnostic,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Normal => "normal",
            Status::CommandMode => "command mode",
            Status::StaleData => "stale data",
            Status::Diagnostic => "diagnostic",
        };
        write!(f, "{} ({})", name, self.bits())
    }
}

/// Pressure and status decoded from the same block read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub output_counts: u16,
    pub pressure: f64,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_bits_covers_two_bit_range() {
        for bits in 0..=3u8 {
            assert_eq!(Status::from_bits(bits).bits(), bits);
        }
        assert_eq!(Status::from_bits(0xFD), Status::CommandMode);
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::StaleData.to_string(), "stale data (2)");
    }
}
