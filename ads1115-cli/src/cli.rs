use std::path::PathBuf;

use crate::settings::InputSettings;
use crate::util;

use clap::Parser;

/// CLI for the ADS1115 16-bit analog-to-digital converter
///
/// Reads the ADS1115 over a Linux I2C character device (for example
/// /dev/i2c-1 on a Raspberry Pi).
///
/// The input channel, full-scale range, conversion mode and data rate are
/// given as options and are written to the device before sampling. In
/// single-shot mode each sample starts its own conversion. In continuous
/// mode the configuration is written once and the conversion register is
/// polled once per conversion period.
///
/// Set RUST_LOG=debug to see every register access.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C bus device
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub(crate) bus: PathBuf,
    /// Device address in hexadecimal (0x48 to 0x4B)
    #[arg(short, long, default_value = "0x48", value_parser = util::u8_from_hex)]
    pub(crate) address: u8,
    #[command(flatten)]
    pub(crate) input: InputSettings,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Sample the configured input.
    Read {
        /// Number of samples to take.
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
        /// Print the raw conversion register value instead of volts.
        #[arg(short, long)]
        raw: bool,
    },
    /// Read and decode the configuration register currently on the device.
    Config,
    /// Write the reset configuration, stopping continuous conversion.
    Reset,
}
