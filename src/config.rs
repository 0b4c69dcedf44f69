//! Configuration register fields.
//!
//! Each field of the 16-bit configuration register is a closed enum that converts
//! to and from its bit pattern. See register 3 (Config) in section 9.6.3 of the
//! datasheet for the layout.

use std::fmt;
use std::time::Duration;

use crate::DecodeError;
use crate::constants::SETTLING_MARGIN_US;

/// Complete configuration written to the ADS1115.
///
/// The start-conversion bit and the comparator bits are not part of the
/// configuration; the driver sets them when writing. Use the `with_*` methods to
/// change individual fields:
///
/// ```rust
/// # use ads1115_hal::config::{Config, DataRate, GainRange, OperatingMode};
/// let config = Config::default()
///     .with_gain(GainRange::FSR_4_096V)
///     .with_mode(OperatingMode::Continuous)
///     .with_data_rate(DataRate::Sps860);
/// assert_eq!(config.gain.full_scale_volts(), 4.096);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Input multiplexer setting (bits 14..=12).
    pub channel: ChannelSelector,
    /// Programmable gain amplifier setting (bits 11..=9).
    pub gain: GainRange,
    /// Device operating mode (bit 8).
    pub mode: OperatingMode,
    /// Data rate (bits 7..=5).
    pub data_rate: DataRate,
}

impl Config {
    /// Change the input multiplexer setting.
    pub fn with_channel(mut self, channel: ChannelSelector) -> Self {
        self.channel = channel;
        self
    }

    /// Change the full-scale range.
    pub fn with_gain(mut self, gain: GainRange) -> Self {
        self.gain = gain;
        self
    }

    /// Change the operating mode.
    pub fn with_mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Change the data rate.
    pub fn with_data_rate(mut self, data_rate: DataRate) -> Self {
        self.data_rate = data_rate;
        self
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Channel:        {}", self.channel)?;
        writeln!(f, "FSR:            {}", self.gain)?;
        writeln!(f, "Operating mode: {}", self.mode)?;
        write!(f, "Data rate:      {}", self.data_rate)
    }
}

/// Input multiplexer configuration.
///
/// Each variant names the positive input (AINP) followed by the negative input
/// (AINN). The first four are differential, the last four are single-ended
/// against GND.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelector {
    /// AINP = AIN0, AINN = AIN1.
    Ain0Ain1,
    /// AINP = AIN0, AINN = AIN3.
    Ain0Ain3,
    /// AINP = AIN1, AINN = AIN3.
    Ain1Ain3,
    /// AINP = AIN2, AINN = AIN3.
    Ain2Ain3,
    /// AINP = AIN0, AINN = GND.
    #[default]
    Ain0Gnd,
    /// AINP = AIN1, AINN = GND.
    Ain1Gnd,
    /// AINP = AIN2, AINN = GND.
    Ain2Gnd,
    /// AINP = AIN3, AINN = GND.
    Ain3Gnd,
}

impl ChannelSelector {
    /// All multiplexer settings, in bit-pattern order.
    pub const ALL: [Self; 8] = [
        Self::Ain0Ain1,
        Self::Ain0Ain3,
        Self::Ain1Ain3,
        Self::Ain2Ain3,
        Self::Ain0Gnd,
        Self::Ain1Gnd,
        Self::Ain2Gnd,
        Self::Ain3Gnd,
    ];

    /// Whether the negative input is GND.
    pub fn is_single_ended(&self) -> bool {
        u8::from(*self) >= 0b100
    }
}

impl TryFrom<u8> for ChannelSelector {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0b000 => Self::Ain0Ain1,
            0b001 => Self::Ain0Ain3,
            0b010 => Self::Ain1Ain3,
            0b011 => Self::Ain2Ain3,
            0b100 => Self::Ain0Gnd,
            0b101 => Self::Ain1Gnd,
            0b110 => Self::Ain2Gnd,
            0b111 => Self::Ain3Gnd,
            value => {
                return Err(DecodeError::UnknownField {
                    field: "MUX",
                    value,
                });
            }
        })
    }
}

impl From<ChannelSelector> for u8 {
    fn from(value: ChannelSelector) -> Self {
        match value {
            ChannelSelector::Ain0Ain1 => 0b000,
            ChannelSelector::Ain0Ain3 => 0b001,
            ChannelSelector::Ain1Ain3 => 0b010,
            ChannelSelector::Ain2Ain3 => 0b011,
            ChannelSelector::Ain0Gnd => 0b100,
            ChannelSelector::Ain1Gnd => 0b101,
            ChannelSelector::Ain2Gnd => 0b110,
            ChannelSelector::Ain3Gnd => 0b111,
        }
    }
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (positive, negative) = match self {
            ChannelSelector::Ain0Ain1 => ("AIN0", "AIN1"),
            ChannelSelector::Ain0Ain3 => ("AIN0", "AIN3"),
            ChannelSelector::Ain1Ain3 => ("AIN1", "AIN3"),
            ChannelSelector::Ain2Ain3 => ("AIN2", "AIN3"),
            ChannelSelector::Ain0Gnd => ("AIN0", "GND"),
            ChannelSelector::Ain1Gnd => ("AIN1", "GND"),
            ChannelSelector::Ain2Gnd => ("AIN2", "GND"),
            ChannelSelector::Ain3Gnd => ("AIN3", "GND"),
        };
        write!(f, "AINP = {positive} and AINN = {negative}")
    }
}

/// Programmable gain amplifier setting, named for its full-scale range.
///
/// The PGA has six distinct ranges. Bit patterns `0b110` and `0b111` select the
/// same ±0.256 V range as `0b101`, and have their own variants so that a
/// configuration read from the device keeps its exact bit pattern.
#[allow(non_camel_case_types)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GainRange {
    /// ±6.144 V (`0b000`).
    FSR_6_144V,
    /// ±4.096 V (`0b001`).
    FSR_4_096V,
    /// ±2.048 V (`0b010`, power-on default).
    #[default]
    FSR_2_048V,
    /// ±1.024 V (`0b011`).
    FSR_1_024V,
    /// ±0.512 V (`0b100`).
    FSR_0_512V,
    /// ±0.256 V (`0b101`).
    FSR_0_256V,
    /// ±0.256 V (`0b110`).
    FSR_0_256V_110,
    /// ±0.256 V (`0b111`).
    FSR_0_256V_111,
}

impl GainRange {
    /// All gain settings, in bit-pattern order.
    pub const ALL: [Self; 8] = [
        Self::FSR_6_144V,
        Self::FSR_4_096V,
        Self::FSR_2_048V,
        Self::FSR_1_024V,
        Self::FSR_0_512V,
        Self::FSR_0_256V,
        Self::FSR_0_256V_110,
        Self::FSR_0_256V_111,
    ];

    /// Input voltage magnitude that produces a full-scale conversion result.
    ///
    /// Note that the analog inputs must still stay within the supply rails; the
    /// ±6.144 V and ±4.096 V ranges do not allow inputs above VDD + 0.3 V.
    pub fn full_scale_volts(&self) -> f64 {
        match self {
            GainRange::FSR_6_144V => 6.144,
            GainRange::FSR_4_096V => 4.096,
            GainRange::FSR_2_048V => 2.048,
            GainRange::FSR_1_024V => 1.024,
            GainRange::FSR_0_512V => 0.512,
            GainRange::FSR_0_256V | GainRange::FSR_0_256V_110 | GainRange::FSR_0_256V_111 => {
                0.256
            }
        }
    }
}

impl TryFrom<u8> for GainRange {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0b000 => Self::FSR_6_144V,
            0b001 => Self::FSR_4_096V,
            0b010 => Self::FSR_2_048V,
            0b011 => Self::FSR_1_024V,
            0b100 => Self::FSR_0_512V,
            0b101 => Self::FSR_0_256V,
            0b110 => Self::FSR_0_256V_110,
            0b111 => Self::FSR_0_256V_111,
            value => {
                return Err(DecodeError::UnknownField {
                    field: "PGA",
                    value,
                });
            }
        })
    }
}

impl From<GainRange> for u8 {
    fn from(value: GainRange) -> Self {
        match value {
            GainRange::FSR_6_144V => 0b000,
            GainRange::FSR_4_096V => 0b001,
            GainRange::FSR_2_048V => 0b010,
            GainRange::FSR_1_024V => 0b011,
            GainRange::FSR_0_512V => 0b100,
            GainRange::FSR_0_256V => 0b101,
            GainRange::FSR_0_256V_110 => 0b110,
            GainRange::FSR_0_256V_111 => 0b111,
        }
    }
}

impl fmt::Display for GainRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} V", self.full_scale_volts())
    }
}

/// Device operating mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Continuous-conversion mode (bit 8 = 0).
    ///
    /// The device converts repeatedly at the configured data rate.
    Continuous,
    /// Single-shot mode (bit 8 = 1, power-on default).
    ///
    /// The device performs one conversion each time the start bit is written,
    /// then powers down.
    #[default]
    SingleShot,
}

impl From<bool> for OperatingMode {
    fn from(value: bool) -> Self {
        if value {
            Self::SingleShot
        } else {
            Self::Continuous
        }
    }
}

impl From<OperatingMode> for bool {
    fn from(value: OperatingMode) -> Self {
        match value {
            OperatingMode::Continuous => false,
            OperatingMode::SingleShot => true,
        }
    }
}

impl TryFrom<u8> for OperatingMode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 | 1 => Ok(Self::from(value == 1)),
            value => Err(DecodeError::UnknownField {
                field: "MODE",
                value,
            }),
        }
    }
}

impl From<OperatingMode> for u8 {
    fn from(value: OperatingMode) -> Self {
        bool::from(value).into()
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingMode::Continuous => write!(f, "Continuous conversion"),
            OperatingMode::SingleShot => write!(f, "Single-shot conversion"),
        }
    }
}

/// Conversion data rate, in samples per second.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    /// 8 SPS (`0b000`).
    Sps8,
    /// 16 SPS (`0b001`).
    Sps16,
    /// 32 SPS (`0b010`).
    Sps32,
    /// 64 SPS (`0b011`).
    Sps64,
    /// 128 SPS (`0b100`, power-on default).
    #[default]
    Sps128,
    /// 250 SPS (`0b101`).
    Sps250,
    /// 475 SPS (`0b110`).
    Sps475,
    /// 860 SPS (`0b111`).
    Sps860,
}

impl DataRate {
    /// All data rates, in bit-pattern order.
    pub const ALL: [Self; 8] = [
        Self::Sps8,
        Self::Sps16,
        Self::Sps32,
        Self::Sps64,
        Self::Sps128,
        Self::Sps250,
        Self::Sps475,
        Self::Sps860,
    ];

    /// Nominal number of conversions per second.
    pub fn samples_per_second(&self) -> u16 {
        match self {
            DataRate::Sps8 => 8,
            DataRate::Sps16 => 16,
            DataRate::Sps32 => 32,
            DataRate::Sps64 => 64,
            DataRate::Sps128 => 128,
            DataRate::Sps250 => 250,
            DataRate::Sps475 => 475,
            DataRate::Sps860 => 860,
        }
    }

    /// Time to wait after starting a conversion before reading its result.
    ///
    /// One conversion period (rounded up to the microsecond) plus a 100µs margin.
    pub fn conversion_time(&self) -> Duration {
        Duration::from_micros(self.conversion_time_us().into())
    }

    pub(crate) fn conversion_time_us(&self) -> u32 {
        1_000_000_u32.div_ceil(self.samples_per_second().into()) + SETTLING_MARGIN_US
    }
}

impl TryFrom<u8> for DataRate {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0b000 => Self::Sps8,
            0b001 => Self::Sps16,
            0b010 => Self::Sps32,
            0b011 => Self::Sps64,
            0b100 => Self::Sps128,
            0b101 => Self::Sps250,
            0b110 => Self::Sps475,
            0b111 => Self::Sps860,
            value => {
                return Err(DecodeError::UnknownField {
                    field: "DR",
                    value,
                });
            }
        })
    }
}

impl From<DataRate> for u8 {
    fn from(value: DataRate) -> Self {
        match value {
            DataRate::Sps8 => 0b000,
            DataRate::Sps16 => 0b001,
            DataRate::Sps32 => 0b010,
            DataRate::Sps64 => 0b011,
            DataRate::Sps128 => 0b100,
            DataRate::Sps250 => 0b101,
            DataRate::Sps475 => 0b110,
            DataRate::Sps860 => 0b111,
        }
    }
}

impl fmt::Display for DataRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SPS", self.samples_per_second())
    }
}
