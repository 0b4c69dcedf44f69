use embedded_hal::i2c::ErrorKind;

/// Wrapper for problems when configuring or communicating with the ADS1115.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The given I2C address is not one the ADS1115 can be strapped to.
    ///
    /// The enclosed `u8` is the rejected address. Valid addresses are listed in
    /// [`DEVICE_ADDRESSES`](crate::DEVICE_ADDRESSES).
    #[error("{0:#04x} is not a valid ADS1115 address (expected 0x48..=0x4B)")]
    InvalidAddress(u8),
    /// A register value read from the device could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The register transport failed to complete a read or write.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failure to map a configuration register field to one of its defined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A bit pattern extracted from the configuration register has no matching
    /// variant.
    ///
    /// Every 3-bit pattern is currently defined for each field, so in practice
    /// this is only produced when a field conversion is given a value wider than
    /// its field.
    #[error("unknown {field} bit pattern {value:#05b}")]
    UnknownField {
        /// Name of the configuration register field.
        field: &'static str,
        /// The bit pattern that could not be decoded.
        value: u8,
    },
}

/// Failure of a register read or write on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The device did not respond, or the bus reported an error or timeout.
    ///
    /// No retry is attempted by the driver.
    #[error("ADS1115 at {address:#04x} is unreachable: {kind}")]
    DeviceUnreachable {
        /// I2C address of the target device.
        address: u8,
        /// Bus error reported by the underlying I2C implementation.
        kind: ErrorKind,
    },
}
