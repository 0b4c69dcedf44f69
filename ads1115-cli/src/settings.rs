use ads1115_hal::config::{self, Config};
use clap::{Args, ValueEnum};

/// Configuration written to the ADS1115 before sampling.
#[derive(Debug, Args)]
pub(crate) struct InputSettings {
    /// Input multiplexer setting, positive input first.
    #[arg(short, long, default_value = "ain0-gnd")]
    pub(crate) channel: Channel,
    /// Full-scale range of the programmable gain amplifier, in volts.
    #[arg(short, long, default_value = "2.048")]
    pub(crate) gain: Gain,
    /// Conversion mode.
    #[arg(short, long, default_value = "single-shot")]
    pub(crate) mode: Mode,
    /// Data rate in samples per second.
    #[arg(short, long, default_value = "128")]
    pub(crate) data_rate: DataRate,
}

impl From<&InputSettings> for Config {
    fn from(value: &InputSettings) -> Self {
        Config {
            channel: value.channel.into(),
            gain: value.gain.into(),
            mode: value.mode.into(),
            data_rate: value.data_rate.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Channel {
    /// Differential, AIN0 against AIN1.
    #[value(name = "ain0-ain1")]
    Ain0Ain1,
    /// Differential, AIN0 against AIN3.
    #[value(name = "ain0-ain3")]
    Ain0Ain3,
    /// Differential, AIN1 against AIN3.
    #[value(name = "ain1-ain3")]
    Ain1Ain3,
    /// Differential, AIN2 against AIN3.
    #[value(name = "ain2-ain3")]
    Ain2Ain3,
    /// Single-ended AIN0.
    #[value(name = "ain0-gnd", alias = "ain0")]
    Ain0Gnd,
    /// Single-ended AIN1.
    #[value(name = "ain1-gnd", alias = "ain1")]
    Ain1Gnd,
    /// Single-ended AIN2.
    #[value(name = "ain2-gnd", alias = "ain2")]
    Ain2Gnd,
    /// Single-ended AIN3.
    #[value(name = "ain3-gnd", alias = "ain3")]
    Ain3Gnd,
}

impl From<Channel> for config::ChannelSelector {
    fn from(value: Channel) -> Self {
        match value {
            Channel::Ain0Ain1 => Self::Ain0Ain1,
            Channel::Ain0Ain3 => Self::Ain0Ain3,
            Channel::Ain1Ain3 => Self::Ain1Ain3,
            Channel::Ain2Ain3 => Self::Ain2Ain3,
            Channel::Ain0Gnd => Self::Ain0Gnd,
            Channel::Ain1Gnd => Self::Ain1Gnd,
            Channel::Ain2Gnd => Self::Ain2Gnd,
            Channel::Ain3Gnd => Self::Ain3Gnd,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Gain {
    /// ±6.144V
    #[value(name = "6.144")]
    _6V,
    /// ±4.096V
    #[value(name = "4.096")]
    _4V,
    /// ±2.048V
    #[value(name = "2.048")]
    _2V,
    /// ±1.024V
    #[value(name = "1.024")]
    _1V,
    /// ±0.512V
    #[value(name = "0.512")]
    _512mV,
    /// ±0.256V
    #[value(name = "0.256")]
    _256mV,
}

impl From<Gain> for config::GainRange {
    fn from(value: Gain) -> Self {
        match value {
            Gain::_6V => Self::FSR_6_144V,
            Gain::_4V => Self::FSR_4_096V,
            Gain::_2V => Self::FSR_2_048V,
            Gain::_1V => Self::FSR_1_024V,
            Gain::_512mV => Self::FSR_0_512V,
            Gain::_256mV => Self::FSR_0_256V,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Mode {
    /// Convert once per sample, then power down.
    #[value(aliases = ["single", "oneshot"])]
    SingleShot,
    /// Convert continuously at the data rate.
    Continuous,
}

impl From<Mode> for config::OperatingMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::SingleShot => Self::SingleShot,
            Mode::Continuous => Self::Continuous,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum DataRate {
    #[value(name = "8")]
    Sps8,
    #[value(name = "16")]
    Sps16,
    #[value(name = "32")]
    Sps32,
    #[value(name = "64")]
    Sps64,
    #[value(name = "128")]
    Sps128,
    #[value(name = "250")]
    Sps250,
    #[value(name = "475")]
    Sps475,
    #[value(name = "860")]
    Sps860,
}

impl From<DataRate> for config::DataRate {
    fn from(value: DataRate) -> Self {
        match value {
            DataRate::Sps8 => Self::Sps8,
            DataRate::Sps16 => Self::Sps16,
            DataRate::Sps32 => Self::Sps32,
            DataRate::Sps64 => Self::Sps64,
            DataRate::Sps128 => Self::Sps128,
            DataRate::Sps250 => Self::Sps250,
            DataRate::Sps475 => Self::Sps475,
            DataRate::Sps860 => Self::Sps860,
        }
    }
}
