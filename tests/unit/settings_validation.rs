//! Unit tests for axis settings validation.

use mount_settings::config::{check_axis_settings, validate_axis_settings, AxisSettings, MountType};
use mount_settings::error::AxisSettingsError;

const MOUNTS: [MountType; 2] = [MountType::Equatorial, MountType::AltAzimuth];

fn decode(text: &str) -> AxisSettings {
    AxisSettings::decode(text).expect("Failed to decode")
}

/// Test inverted limits fail for every axis and mount.
#[test]
fn test_inverted_limits_fail_everywhere() {
    let s = decode("1000,16,800,0,100,-100");
    for mount in MOUNTS {
        for axis in 1..=5 {
            assert!(!validate_axis_settings(axis, mount, &s), "axis {} {:?}", axis, mount);
        }
    }
}

/// Test nominal settings pass for an equatorial RA axis.
#[test]
fn test_nominal_equatorial_primary_passes() {
    let s = decode("1000,16,800,0,-100,100");
    assert!(validate_axis_settings(1, MountType::Equatorial, &s));
}

/// Test the same settings fail for an alt-azimuth altitude axis.
#[test]
fn test_same_settings_fail_alt_az_secondary() {
    let s = decode("1000,16,800,0,-100,100");
    assert!(!validate_axis_settings(2, MountType::AltAzimuth, &s));
}

/// Test azimuth may wrap further than RA.
#[test]
fn test_azimuth_wraps_further_than_ra() {
    let s = decode("12800,16,800,0,-300,300");
    assert!(validate_axis_settings(1, MountType::AltAzimuth, &s));
    assert_eq!(
        check_axis_settings(1, MountType::Equatorial, &s),
        Err(AxisSettingsError::MinOutOfRange(-300))
    );
}

/// Test focuser settings use focuser ranges.
#[test]
fn test_focuser_ranges() {
    let focuser = decode("5.5,32,600,0,0,250");
    assert!(validate_axis_settings(4, MountType::Equatorial, &focuser));
    assert!(validate_axis_settings(5, MountType::AltAzimuth, &focuser));

    let too_much_current = decode("5.5,32,1200,0,0,250");
    assert_eq!(
        check_axis_settings(4, MountType::Equatorial, &too_much_current),
        Err(AxisSettingsError::InvalidIrun { irun: 1200, max: 1000 })
    );
}

/// Test the rotator allows a full turn each way.
#[test]
fn test_rotator_ranges() {
    let s = decode("64,8,400,1,-360,360");
    assert!(validate_axis_settings(3, MountType::Equatorial, &s));
}
