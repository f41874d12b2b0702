//! Axis settings and configuration validation.

use crate::error::{AxisSettingsError, ConfigError, Error, Result};

use super::axis::AxisSettings;
use super::limits::AxisLimits;
use super::mount::{Axis, MountType};
use super::units::{Microsteps, OFF};
use super::ControllerConfig;

type Check = fn(&AxisSettings, &AxisLimits) -> core::result::Result<(), AxisSettingsError>;

/// Checks in the order they are applied. The first failure wins.
const CHECKS: [Check; 7] = [
    check_limit_order,
    check_microsteps,
    check_irun,
    check_reverse,
    check_steps_per_measure,
    check_min,
    check_max,
];

/// Validate axis settings for an axis and mount type.
///
/// Boolean gate over [`check_axis_settings`]: a rejected record must be
/// discarded as a whole.
pub fn validate_axis_settings(axis: u8, mount: MountType, settings: &AxisSettings) -> bool {
    match check_axis_settings(axis, mount, settings) {
        Ok(()) => true,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("axis {} settings rejected: {}", axis, _e);
            false
        }
    }
}

/// Validate axis settings, naming the first failing check.
///
/// Checks:
/// - min <= max
/// - microsteps is a power of 2 from 1 to 256, or OFF
/// - run current is within the driver range for the axis, or OFF
/// - reverse is 0 or 1
/// - steps per measure is within the range for the axis
/// - min and max fall in their windows for the axis and mount
///
/// # Errors
///
/// Returns the [`AxisSettingsError`] of the first failing check, or
/// `UnknownAxis` for an axis number outside 1-5.
pub fn check_axis_settings(
    axis: u8,
    mount: MountType,
    settings: &AxisSettings,
) -> core::result::Result<(), AxisSettingsError> {
    let axis = Axis::try_from(axis)?;
    let limits = AxisLimits::for_axis(axis, mount);
    CHECKS.iter().try_for_each(|check| check(settings, &limits))
}

fn check_limit_order(s: &AxisSettings, _: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if s.min > s.max {
        return Err(AxisSettingsError::InvertedLimits { min: s.min, max: s.max });
    }
    Ok(())
}

fn check_microsteps(s: &AxisSettings, _: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if s.microsteps == OFF {
        return Ok(());
    }
    Microsteps::try_from(s.microsteps).map(|_| ())
}

fn check_irun(s: &AxisSettings, limits: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if s.irun == OFF || limits.irun_in_range(s.irun) {
        return Ok(());
    }
    Err(AxisSettingsError::InvalidIrun {
        irun: s.irun,
        max: limits.irun_max,
    })
}

fn check_reverse(s: &AxisSettings, _: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    match s.reverse {
        0 | 1 => Ok(()),
        other => Err(AxisSettingsError::InvalidReverse(other)),
    }
}

fn check_steps_per_measure(s: &AxisSettings, limits: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if limits.steps_in_range(s.steps_per_measure) {
        return Ok(());
    }
    Err(AxisSettingsError::StepsPerMeasureOutOfRange(s.steps_per_measure))
}

fn check_min(s: &AxisSettings, limits: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if limits.min.contains(&s.min) {
        return Ok(());
    }
    Err(AxisSettingsError::MinOutOfRange(s.min))
}

fn check_max(s: &AxisSettings, limits: &AxisLimits) -> core::result::Result<(), AxisSettingsError> {
    if limits.max.contains(&s.max) {
        return Ok(());
    }
    Err(AxisSettingsError::MaxOutOfRange(s.max))
}

/// Validate a controller configuration.
///
/// Checks:
/// - each axis is listed at most once
/// - every axis passes [`check_axis_settings`] for the configured mount
pub fn validate_config(config: &ControllerConfig) -> Result<()> {
    for (i, entry) in config.axes.iter().enumerate() {
        if config.axes[..i].iter().any(|prior| prior.axis == entry.axis) {
            return Err(Error::Config(ConfigError::DuplicateAxis(entry.axis)));
        }

        check_axis_settings(entry.axis, config.mount, &entry.settings).map_err(|error| {
            Error::Config(ConfigError::InvalidAxis {
                axis: entry.axis,
                error,
            })
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(text: &str) -> AxisSettings {
        AxisSettings::decode(text).unwrap()
    }

    #[test]
    fn test_nominal_equatorial_primary() {
        let s = settings("1000,16,800,0,-100,100");
        assert!(validate_axis_settings(1, MountType::Equatorial, &s));
        assert_eq!(
            check_axis_settings(2, MountType::AltAzimuth, &s),
            Err(AxisSettingsError::MinOutOfRange(-100))
        );
    }

    #[test]
    fn test_inverted_limits_checked_first() {
        // Also has bad microsteps, but the limit order is reported.
        let s = settings("1000,3,800,0,100,-100");
        assert_eq!(
            check_axis_settings(1, MountType::Equatorial, &s),
            Err(AxisSettingsError::InvertedLimits { min: 100, max: -100 })
        );
    }

    #[test]
    fn test_off_sentinels_accepted() {
        let s = settings("12800,-1,-1,0,-180,180");
        assert!(validate_axis_settings(1, MountType::Equatorial, &s));
    }

    #[test]
    fn test_each_check() {
        let cases = [
            ("1000,12,800,0,-100,100", AxisSettingsError::InvalidMicrosteps(12)),
            ("1000,16,3001,0,-100,100", AxisSettingsError::InvalidIrun { irun: 3001, max: 3000 }),
            ("1000,16,800,2,-100,100", AxisSettingsError::InvalidReverse(2)),
            ("100,16,800,0,-100,100", AxisSettingsError::StepsPerMeasureOutOfRange(100.0)),
            ("1000,16,800,0,-80,100", AxisSettingsError::MinOutOfRange(-80)),
            ("1000,16,800,0,-100,300", AxisSettingsError::MaxOutOfRange(300)),
        ];
        for (text, expected) in cases {
            assert_eq!(
                check_axis_settings(1, MountType::Equatorial, &settings(text)),
                Err(expected),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_unknown_axis() {
        let s = settings("1000,16,800,0,-100,100");
        assert_eq!(
            check_axis_settings(0, MountType::Equatorial, &s),
            Err(AxisSettingsError::UnknownAxis(0))
        );
        assert!(!validate_axis_settings(6, MountType::AltAzimuth, &s));
    }
}
