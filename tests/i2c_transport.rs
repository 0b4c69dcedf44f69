//! Register access over an embedded-hal I2C bus.
use ads1115_hal::config::{Config, DataRate, GainRange, OperatingMode};
use ads1115_hal::{ADS1115, Error, I2cTransport, RegisterTransport, TransportError};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

const ADDRESS: u8 = 0x4A;

#[test]
fn write16_sends_pointer_then_high_byte_first() -> Result<(), TransportError> {
    let expectations = [I2cTransaction::write(ADDRESS, vec![0x01, 0xC3, 0x63])];
    let mut transport = I2cTransport::new(I2cMock::new(&expectations));
    transport.write16(ADDRESS, 0x01, 0xC363)?;
    transport.release().done();
    Ok(())
}

#[test]
fn read16_combines_bytes_most_significant_first() -> Result<(), TransportError> {
    let expectations = [I2cTransaction::write_read(
        ADDRESS,
        vec![0x00],
        vec![0x12, 0x34],
    )];
    let mut transport = I2cTransport::new(I2cMock::new(&expectations));
    assert_eq!(transport.read16(ADDRESS, 0x00)?, 0x1234);
    transport.release().done();
    Ok(())
}

#[test]
fn bus_error_becomes_device_unreachable() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x45, 0x83])
            .with_error(ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            )),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x00, 0x00])
            .with_error(ErrorKind::ArbitrationLoss),
    ];
    let mut transport = I2cTransport::new(I2cMock::new(&expectations));
    assert_eq!(
        transport.write16(ADDRESS, 0x01, 0x4583),
        Err(TransportError::DeviceUnreachable {
            address: ADDRESS,
            kind: ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address),
        })
    );
    assert_eq!(
        transport.read16(ADDRESS, 0x00),
        Err(TransportError::DeviceUnreachable {
            address: ADDRESS,
            kind: ErrorKind::ArbitrationLoss,
        })
    );
    transport.release().done();
}

/// Full single-shot sample over I2C: configure, then read the conversion register.
#[test]
fn single_shot_sample_over_i2c() -> Result<(), Error> {
    let config = Config::default()
        .with_gain(GainRange::FSR_6_144V)
        .with_mode(OperatingMode::SingleShot)
        .with_data_rate(DataRate::Sps860);
    // OS 1, MUX 100, PGA 000, MODE 1, DR 111, comparator disabled.
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0b1100_0001, 0b1110_0011]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0xC0, 0x00]),
    ];
    let bus = I2cTransport::new(I2cMock::new(&expectations));
    let mut adc = ADS1115::new(bus, NoopDelay, ADDRESS, config)?;

    // 0xC000 is -16384 counts, half of negative full scale.
    assert_eq!(adc.sample_voltage(true)?, -3.072);

    let (bus, _) = adc.release();
    bus.release().done();
    Ok(())
}
