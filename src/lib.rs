#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
mod constants;
mod driver;
mod error;
pub mod register;
mod transport;

pub use constants::DEVICE_ADDRESSES;
pub use driver::ADS1115;
pub use error::{DecodeError, Error, TransportError};
pub use transport::{I2cTransport, RegisterTransport};
