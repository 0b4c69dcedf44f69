pub(crate) fn u8_from_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    u8::from_str_radix(s, 16)
}

#[cfg(test)]
mod test {
    use super::u8_from_hex;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!(u8_from_hex("0x48"), Ok(0x48));
        assert_eq!(u8_from_hex("0X4b"), Ok(0x4B));
        assert_eq!(u8_from_hex("49"), Ok(0x49));
        assert!(u8_from_hex("0x148").is_err());
    }
}
