/// I2C addresses selectable with the ADDR strap pin.
///
/// ADDR tied to GND, VDD, SDA and SCL respectively. See table 4 in section 9.5.1.1
/// of the datasheet.
pub const DEVICE_ADDRESSES: [u8; 4] = [0x48, 0x49, 0x4A, 0x4B];

/// Bit 15 of the configuration register (OS).
///
/// Writing a 1 starts a single conversion when the device is powered down in
/// single-shot mode. It reads back as the conversion-in-progress flag, which the
/// driver does not report.
pub(crate) const START_CONVERSION: u16 = 1 << 15;

/// Comparator bits 4..=0 with the comparator disabled.
///
/// Traditional comparator, active-low, non-latching, and COMP_QUE = 0b11 (disabled).
pub(crate) const COMPARATOR_DISABLED: u16 = 0b0_0011;

/// Extra time waited after one nominal conversion period before reading the result.
pub(crate) const SETTLING_MARGIN_US: u32 = 100;
