use std::thread;
use std::time::Duration;

use clap::Parser;
use rppal::i2c::I2c;

use rphsc::{PressureDecoder, SensorConfig, DEFAULT_ADDRESS, DEFAULT_BUS, DEFAULT_MAX_PRESSURE};

/// Read a Honeywell HSC pressure sensor over I2C
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// I2C address of the sensor (decimal or 0x-prefixed hex)
    #[arg(short, long, value_parser = parse_address, default_value_t = DEFAULT_ADDRESS)]
    address: u16,

    /// Linux I2C bus index (/dev/i2c-N)
    #[arg(short, long, default_value_t = DEFAULT_BUS)]
    bus: u8,

    /// Rated full-scale pressure of the part
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PRESSURE)]
    max_pressure: f64,

    /// Keep the factory zero instead of zeroing against the first reading
    #[arg(long)]
    no_calibrate: bool,

    /// Number of samples to take
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Delay between samples in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    interval_ms: u64,
}

fn parse_address(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}

impl From<&Args> for SensorConfig {
    fn from(args: &Args) -> Self {
        SensorConfig {
            bus: args.bus,
            address: args.address,
            max_pressure: args.max_pressure,
            auto_calibrate: !args.no_calibrate,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = SensorConfig::from(&args);

    let i2c = I2c::with_bus(config.bus)?;
    let mut sensor = PressureDecoder::from_config(i2c, &config)?;
    log::info!(
        "HSC at {:#04x} on /dev/i2c-{}, zero point {} counts",
        sensor.address(),
        config.bus,
        sensor.output_min()
    );

    for n in 0..args.count {
        if n > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }
        let sample = sensor.sample()?;
        println!("Pressure: {:.3}", sample.pressure);
        println!("Status: {}", sample.status);
    }

    Ok(())
}
