//! Encoding and formatting tests.

use fixed64::{Error, Fixed64};
use hex_literal::hex;
use proptest::{prelude::any, prop_assert_eq, proptest};

#[test]
fn byte_round_trip() {
    let value = Fixed64::from_raw(1000);
    let bytes = value.to_bytes();

    assert_eq!(bytes, hex!("e803000000000000"));
    assert_eq!(Fixed64::from_bytes(bytes), value);
    assert_eq!(Fixed64::from_slice(&bytes), Ok(value));
}

#[test]
fn negative_bytes() {
    assert_eq!(Fixed64::from_raw(-1).to_bytes(), [0xff; 8]);
    assert_eq!(Fixed64::from_bytes([0xff; 8]), Fixed64::from_raw(-1));
}

#[test]
fn display() {
    assert_eq!(Fixed64::from_raw(1).to_string(), "0.00000001");
    assert_eq!(Fixed64::from_raw(-1).to_string(), "-0.00000001");
    assert_eq!(Fixed64::from_raw(1_234_567_890).to_string(), "12.34567890");
    assert_eq!(Fixed64::ZERO.to_string(), "0.00000000");
    assert_eq!(Fixed64::ONE.to_string(), "1.00000000");
    assert_eq!(Fixed64::MIN.to_string(), "-92233720368.54775808");
    assert_eq!(Fixed64::MAX.to_string(), "92233720368.54775807");
}

#[test]
fn parse() {
    assert_eq!("0.00000001".parse(), Ok(Fixed64::from_raw(1)));
    assert_eq!("-0.00000001".parse(), Ok(Fixed64::from_raw(-1)));
    assert_eq!("12.3456789".parse(), Ok(Fixed64::from_raw(1_234_567_890)));
    assert_eq!("+7".parse(), Ok(Fixed64::from_raw(700_000_000)));
    assert_eq!("-0".parse(), Ok(Fixed64::ZERO));
    assert_eq!("-92233720368.54775808".parse(), Ok(Fixed64::MIN));
}

#[test]
fn parse_rejects_malformed() {
    for s in ["", "-", ".5", "1.", "1.123456789", "1.2.3", "1e8", " 1", "--1", "0x10"] {
        assert_eq!(s.parse::<Fixed64>(), Err(Error::InvalidFormat), "{s:?}");
    }
}

#[test]
fn parse_rejects_out_of_range() {
    for s in [
        "92233720368.54775808",
        "-92233720368.54775809",
        "100000000000",
        "99999999999999999999",
    ] {
        assert_eq!(s.parse::<Fixed64>(), Err(Error::OutOfRange), "{s:?}");
    }
}

#[test]
fn ordering() {
    let mut values: Vec<Fixed64> = ["1.5", "-2", "0", "0.00000001"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    values.sort();

    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        sorted,
        ["-2.00000000", "0.00000000", "0.00000001", "1.50000000"]
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_json() {
    let value = Fixed64::from_raw(1000);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"e803000000000000\"");
    assert_eq!(serde_json::from_str::<Fixed64>(&json).unwrap(), value);
}

proptest! {
    #[test]
    fn string_round_trip(raw in any::<i64>()) {
        let value = Fixed64::from_raw(raw);
        prop_assert_eq!(value.to_string().parse::<Fixed64>(), Ok(value));
    }

    #[test]
    fn bytes_round_trip(raw in any::<i64>()) {
        let value = Fixed64::from_raw(raw);
        prop_assert_eq!(Fixed64::from_bytes(value.to_bytes()), value);
    }
}
