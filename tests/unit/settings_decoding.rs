//! Unit tests for axis settings text decoding.

use mount_settings::config::{AxisSettings, FIELD_COUNT};
use mount_settings::error::{NumberFault, ParseError};

/// Test decoding a well-formed settings line.
#[test]
fn test_decode_reference_line() {
    let s = AxisSettings::decode("1000,16,800,0,-100,100").expect("Failed to decode");

    assert_eq!(s.steps_per_measure, 1000.0);
    assert_eq!(s.microsteps, 16);
    assert_eq!(s.irun, 800);
    assert_eq!(s.reverse, 0);
    assert_eq!(s.min, -100);
    assert_eq!(s.max, 100);
}

/// Test that a missing field fails the whole decode.
#[test]
fn test_missing_field_rejected() {
    let result = AxisSettings::decode("1000,16,800,0,-100");
    assert_eq!(result, Err(ParseError::FieldCount(FIELD_COUNT - 1)));
}

/// Test that a non-numeric field fails the whole decode.
#[test]
fn test_non_numeric_field_rejected() {
    let result = AxisSettings::decode("1000,sixteen,800,0,-100,100");
    assert!(matches!(
        result,
        Err(ParseError::InvalidField {
            index: 1,
            cause: NumberFault::InvalidDigit,
            ..
        })
    ));
}

/// Test that trailing garbage in the last field is not ignored.
#[test]
fn test_trailing_garbage_rejected() {
    assert!(AxisSettings::decode("1000,16,800,0,-100,100#").is_err());
    assert!(AxisSettings::decode("1000,16,800,0,-100,100,").is_err());
}

/// Test that values too large for the field type are rejected.
#[test]
fn test_field_overflow_rejected() {
    let result = AxisSettings::decode("1000,16,800,0,-100,40000");
    assert!(matches!(
        result,
        Err(ParseError::InvalidField {
            index: 5,
            cause: NumberFault::OutOfRange,
            ..
        })
    ));
}

/// Test a different delimiter is not accepted.
#[test]
fn test_wrong_delimiter_rejected() {
    assert_eq!(
        AxisSettings::decode("1000;16;800;0;-100;100"),
        Err(ParseError::FieldCount(1))
    );
}

/// Test that encoded text decodes to the same record.
#[test]
fn test_encode_then_decode() {
    let original = AxisSettings::decode("7200.5,256,1500,1,-90,90").unwrap();
    let text = original.encode().unwrap();
    assert_eq!(text.as_str(), "7200.5,256,1500,1,-90,90");
    assert_eq!(AxisSettings::decode(text.as_str()), Ok(original));
}
