//! Encoding and decoding of ADS1115 register contents.
//!
//! These functions are pure; they never touch the bus. The configuration
//! register layout (MSB first) is:
//!
//! | Bits   | Field                          |
//! | :---   | :---                           |
//! | 15     | OS, start a single conversion  |
//! | 14..12 | MUX, [`ChannelSelector`]       |
//! | 11..9  | PGA, [`GainRange`]             |
//! | 8      | MODE, [`OperatingMode`]        |
//! | 7..5   | DR, [`DataRate`]               |
//! | 4..0   | Comparator, always disabled    |

use bit_field::BitField;

use crate::DecodeError;
use crate::config::{ChannelSelector, Config, DataRate, GainRange, OperatingMode};
use crate::constants::COMPARATOR_DISABLED;

/// Register pointer values.
///
/// The low and high threshold registers (0x02 and 0x03) are not used by this
/// driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Conversion register, holding the latest 16-bit result.
    Conversion = 0x00,
    /// Configuration register.
    Config = 0x01,
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value as u8
    }
}

/// Pack configuration fields into a configuration register value.
///
/// The start-conversion bit (15) is always clear in the result; the driver sets it
/// when a conversion should begin. The comparator bits are set to leave the
/// comparator disabled.
pub fn encode(
    channel: ChannelSelector,
    gain: GainRange,
    mode: OperatingMode,
    data_rate: DataRate,
) -> u16 {
    let mut word = COMPARATOR_DISABLED;
    word.set_bits(12..=14, u8::from(channel).into())
        .set_bits(9..=11, u8::from(gain).into())
        .set_bit(8, mode.into())
        .set_bits(5..=7, u8::from(data_rate).into());
    word
}

/// Extract the configuration fields from a configuration register value.
///
/// The start-conversion bit and comparator bits are ignored.
///
/// # Errors
///
/// [`DecodeError::UnknownField`] if a field has no matching variant. All bit
/// patterns are currently defined, so this does not happen for values read from
/// an ADS1115.
pub fn decode(word: u16) -> Result<Config, DecodeError> {
    // Each range is at most three bits wide, so the `as u8` casts are lossless.
    Ok(Config {
        channel: (word.get_bits(12..=14) as u8).try_into()?,
        gain: (word.get_bits(9..=11) as u8).try_into()?,
        mode: word.get_bit(8).into(),
        data_rate: (word.get_bits(5..=7) as u8).try_into()?,
    })
}

/// Convert a raw conversion result into volts.
///
/// The result is 16-bit two's complement scaled so that 2^15 counts equal the
/// full-scale range. `0x8000` is therefore exactly `-FSR` and `0x7FFF` is one count
/// below `+FSR`.
pub fn raw_to_voltage(raw: u16, gain: GainRange) -> f64 {
    RawSample(raw).to_voltage(gain)
}

/// A single conversion result as read from the conversion register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample(pub u16);

impl RawSample {
    /// Counts corresponding to the full-scale range.
    const FULL_SCALE_COUNTS: f64 = 32768.0;

    /// The register value as read.
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// The result interpreted as two's complement.
    pub fn signed(&self) -> i16 {
        self.0 as i16
    }

    /// The result in volts at the given full-scale range.
    pub fn to_voltage(&self, gain: GainRange) -> f64 {
        f64::from(self.signed()) / Self::FULL_SCALE_COUNTS * gain.full_scale_volts()
    }
}

impl From<u16> for RawSample {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl Config {
    /// The configuration register value for this configuration.
    ///
    /// See [`encode`].
    pub fn to_word(&self) -> u16 {
        encode(self.channel, self.gain, self.mode, self.data_rate)
    }

    /// Parse a configuration register value.
    ///
    /// See [`decode`].
    pub fn try_from_word(word: u16) -> Result<Self, DecodeError> {
        decode(word)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_matches_reset_pattern() {
        // MUX 100, PGA 010, MODE 1, DR 100, comparator disabled.
        assert_eq!(Config::default().to_word(), 0x4583);
    }

    #[test]
    fn start_bit_and_comparator_are_ignored_on_decode() {
        let config = Config::default()
            .with_channel(ChannelSelector::Ain1Ain3)
            .with_gain(GainRange::FSR_6_144V)
            .with_mode(OperatingMode::Continuous)
            .with_data_rate(DataRate::Sps860);
        let word = config.to_word();
        assert_eq!(decode(word | 0x8000), Ok(config));
        assert_eq!(decode(word & !0b1_1111), Ok(config));
    }

    #[test]
    fn signed_interpretation() {
        assert_eq!(RawSample(0x0000).signed(), 0);
        assert_eq!(RawSample(0x7FFF).signed(), 32767);
        assert_eq!(RawSample(0x8000).signed(), -32768);
        assert_eq!(RawSample(0xFFFF).signed(), -1);
    }
}
