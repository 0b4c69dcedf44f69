use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::config::{Config, DataRate};
use crate::constants::{DEVICE_ADDRESSES, START_CONVERSION};
use crate::register::{RawSample, Register};
use crate::transport::RegisterTransport;
use crate::{Error, TransportError};

/// Driver for the ADS1115.
///
/// # Quick start
///
/// Create the driver with [`ADS1115::new`], passing a [`RegisterTransport`] (such as
/// an [`I2cTransport`] wrapping an I2C bus), something to wait with, the device
/// address and the initial [`Config`]. Nothing is written to the device until a
/// sample is requested or [`ADS1115::write_config`] is called.
///
/// [`I2cTransport`]: crate::I2cTransport
///
/// # Configuration state
///
/// The driver keeps the configuration it last wrote (or is about to write). It is
/// never updated from the device; use [`ADS1115::read_config`] to see what the
/// device currently holds.
#[derive(Debug)]
pub struct ADS1115<T, D> {
    transport: T,
    delay: D,
    address: u8,
    config: Config,
    /// Whether a configuration write has been attempted.
    ///
    /// Only used to warn about reading the conversion register before the device
    /// was ever configured by this driver.
    config_written: bool,
}

impl<T: RegisterTransport, D: DelayNs> ADS1115<T, D> {
    /// Create a driver for the ADS1115 at the given 7-bit address.
    ///
    /// No bus traffic occurs.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if `address` is not one of
    /// [`DEVICE_ADDRESSES`](crate::DEVICE_ADDRESSES).
    pub fn new(transport: T, delay: D, address: u8, config: Config) -> Result<Self, Error> {
        if !DEVICE_ADDRESSES.contains(&address) {
            return Err(Error::InvalidAddress(address));
        }
        Ok(Self {
            transport,
            delay,
            address,
            config,
            config_written: false,
        })
    }

    /// The 7-bit I2C address of the device.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The configuration last written (or to be written) to the device.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Destroy the driver and give back the transport and delay.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Write the stored configuration with the start-conversion bit set.
    ///
    /// In single-shot mode this starts one conversion. In continuous mode it
    /// (re)starts free-running conversions.
    ///
    /// This does not wait for the conversion to complete. Wait at least
    /// [`DataRate::conversion_time`] before reading the result.
    ///
    /// # Errors
    ///
    /// [`TransportError::DeviceUnreachable`] if the write failed. The stored
    /// configuration is kept either way.
    pub fn write_config(&mut self) -> Result<(), TransportError> {
        self.write_config_word(self.config.to_word() | START_CONVERSION)
    }

    /// Store a new configuration and write it to the device.
    ///
    /// This is how to move between single-shot and continuous mode.
    ///
    /// # Errors
    ///
    /// See [`ADS1115::write_config`].
    pub fn reconfigure(&mut self, config: Config) -> Result<(), TransportError> {
        self.config = config;
        self.write_config()
    }

    /// Return the device to its reset configuration.
    ///
    /// Writes [`Config::default`] (`0x4583`: AIN0 against GND, ±2.048 V, single-shot,
    /// 128 SPS) without the start-conversion bit, then waits one conversion period.
    /// This stops a device that is converting continuously.
    ///
    /// # Errors
    ///
    /// [`TransportError::DeviceUnreachable`] if the write failed.
    pub fn reset(&mut self) -> Result<(), TransportError> {
        self.config = Config::default();
        self.write_config_word(self.config.to_word())?;
        self.wait_for_conversion(self.config.data_rate);
        Ok(())
    }

    /// Read and decode the configuration register of the device.
    ///
    /// The stored configuration is not changed.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the read failed, or [`Error::Decode`] if the
    /// register value could not be decoded.
    pub fn read_config(&mut self) -> Result<Config, Error> {
        let word = self
            .transport
            .read16(self.address, Register::Config.into())?;
        debug!("read config {:#06x} from {:#04x}", word, self.address);
        Ok(Config::try_from_word(word)?)
    }

    /// Read the conversion register.
    ///
    /// With `force_fresh_conversion` set, the configuration is written first
    /// (starting a new conversion in single-shot mode) and the driver waits for
    /// [`DataRate::conversion_time`] before reading.
    ///
    /// Without it, the conversion register is read immediately. This is how to
    /// poll the device in continuous mode, spacing calls by at least one
    /// conversion period, or to re-read the last single-shot result.
    ///
    /// The configuration must have been written at least once before reading
    /// without a fresh conversion, otherwise the result is whatever the device
    /// last converted (if anything).
    ///
    /// # Errors
    ///
    /// [`TransportError::DeviceUnreachable`] if either the write or the read failed.
    pub fn sample_raw(&mut self, force_fresh_conversion: bool) -> Result<RawSample, TransportError> {
        if force_fresh_conversion {
            self.write_config()?;
            self.wait_for_conversion(self.config.data_rate);
        } else if !self.config_written {
            warn!(
                "reading conversion register of {:#04x} before any configuration write",
                self.address
            );
        }
        let raw = self
            .transport
            .read16(self.address, Register::Conversion.into())?;
        debug!("read conversion {:#06x} from {:#04x}", raw, self.address);
        Ok(RawSample(raw))
    }

    /// Read the conversion register and convert the result to volts.
    ///
    /// The full-scale range of the stored configuration is used for the conversion.
    /// See [`ADS1115::sample_raw`] for the meaning of `force_fresh_conversion`.
    ///
    /// # Errors
    ///
    /// [`TransportError::DeviceUnreachable`] if either the write or the read failed.
    pub fn sample_voltage(&mut self, force_fresh_conversion: bool) -> Result<f64, TransportError> {
        let raw = self.sample_raw(force_fresh_conversion)?;
        Ok(raw.to_voltage(self.config.gain))
    }

    fn write_config_word(&mut self, word: u16) -> Result<(), TransportError> {
        self.config_written = true;
        debug!("writing config {:#06x} to {:#04x}", word, self.address);
        self.transport
            .write16(self.address, Register::Config.into(), word)
    }

    fn wait_for_conversion(&mut self, data_rate: DataRate) {
        self.delay.delay_us(data_rate.conversion_time_us());
    }
}
