use super::*;

const MIXED: &str = "0x2C7536E3605D9C16a7a3D7b1898e529396a65c23";
const LOWER: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";

#[test]
fn parse_lowercases_checksummed_input() {
    let addr = Address::parse(MIXED).expect("address");
    assert_eq!(addr.as_str(), LOWER);
}

#[test]
fn parse_accepts_uppercase_prefix_and_whitespace() {
    let addr = Address::parse("  0X2C7536E3605D9C16A7A3D7B1898E529396A65C23 ").expect("address");
    assert_eq!(addr.as_str(), LOWER);
}

#[test]
fn parse_rejects_missing_prefix() {
    assert_eq!(
        Address::parse("2c7536e3605d9c16a7a3d7b1898e529396a65c23"),
        Err(AddressError::MissingPrefix)
    );
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(Address::parse("0xabc"), Err(AddressError::InvalidLength(3)));
}

#[test]
fn parse_rejects_non_hex() {
    assert_eq!(
        Address::parse("0xzz7536e3605d9c16a7a3d7b1898e529396a65c23"),
        Err(AddressError::InvalidHex)
    );
}

#[test]
fn short_keeps_prefix_and_tail() {
    let addr = Address::parse(LOWER).expect("address");
    assert_eq!(addr.short(), "0x2c75...5c23");
}

#[test]
fn matches_ignores_case() {
    let addr = Address::parse(LOWER).expect("address");
    assert!(addr.matches(MIXED));
    assert!(!addr.matches("0x0000000000000000000000000000000000000000"));
}

#[test]
fn serde_uses_plain_string_and_validates() {
    let addr = Address::parse(MIXED).expect("address");
    let json = serde_json::to_string(&addr).expect("serialize");
    assert_eq!(json, format!("\"{LOWER}\""));

    let back: Address = serde_json::from_str(&format!("\"{MIXED}\"")).expect("deserialize");
    assert_eq!(back, addr);

    assert!(serde_json::from_str::<Address>("\"not-an-address\"").is_err());
}
