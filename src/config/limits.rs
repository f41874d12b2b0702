//! Per-axis ranges that axis settings are validated against.

use core::ops::RangeInclusive;

use super::mount::{Axis, MountType};

/// Legal ranges for one axis on one mount type.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLimits {
    /// Steps per degree (mount axes, rotator) or per micron (focusers).
    pub steps_per_measure: RangeInclusive<f64>,
    /// Highest run current in mA.
    pub irun_max: i16,
    /// Window the minimum limit must fall in.
    pub min: RangeInclusive<i16>,
    /// Window the maximum limit must fall in.
    pub max: RangeInclusive<i16>,
}

impl AxisLimits {
    /// Ranges for an axis on the given mount.
    ///
    /// Only axis 1 depends on the mount: an azimuth axis may wrap further
    /// than an RA axis can before meridian limits apply.
    pub fn for_axis(axis: Axis, mount: MountType) -> Self {
        match (axis, mount) {
            (Axis::Primary, MountType::Equatorial) => Self::mount_axis(-270..=-90, 90..=270),
            (Axis::Primary, MountType::AltAzimuth) => Self::mount_axis(-360..=-180, 180..=360),
            (Axis::Secondary, _) => Self::mount_axis(-90..=0, 0..=90),
            (Axis::Rotator, _) => Self::auxiliary(-360..=0, 0..=360),
            (Axis::Focuser1 | Axis::Focuser2, _) => Self::auxiliary(0..=500, 0..=500),
        }
    }

    fn mount_axis(min: RangeInclusive<i16>, max: RangeInclusive<i16>) -> Self {
        Self {
            steps_per_measure: 150.0..=122_400.0,
            irun_max: 3000,
            min,
            max,
        }
    }

    fn auxiliary(min: RangeInclusive<i16>, max: RangeInclusive<i16>) -> Self {
        Self {
            steps_per_measure: 5.0..=7_200.0,
            irun_max: 1000,
            min,
            max,
        }
    }

    /// Check a steps-per-measure value.
    #[inline]
    pub fn steps_in_range(&self, steps_per_measure: f64) -> bool {
        self.steps_per_measure.contains(&steps_per_measure)
    }

    /// Check a run current in mA.
    #[inline]
    pub fn irun_in_range(&self, irun: i16) -> bool {
        (0..=self.irun_max).contains(&irun)
    }
}
