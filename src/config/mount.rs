//! Mount topology and axis identity.

use serde::Deserialize;

/// Mount geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum MountType {
    /// German or fork equatorial: axis 1 is RA, axis 2 is declination.
    #[default]
    Equatorial,
    /// Alt-azimuth: axis 1 is azimuth, axis 2 is altitude.
    AltAzimuth,
}

impl MountType {
    /// Whether this is an alt-azimuth mount.
    #[inline]
    pub const fn is_alt_az(self) -> bool {
        matches!(self, MountType::AltAzimuth)
    }
}

impl From<bool> for MountType {
    /// `true` selects alt-azimuth.
    fn from(alt_az: bool) -> Self {
        if alt_az {
            MountType::AltAzimuth
        } else {
            MountType::Equatorial
        }
    }
}

/// A driven axis, numbered as the controller's command set numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Axis 1: right ascension / hour angle, or azimuth.
    Primary = 1,
    /// Axis 2: declination, or altitude.
    Secondary = 2,
    /// Axis 3: field rotator.
    Rotator = 3,
    /// Axis 4: first focuser.
    Focuser1 = 4,
    /// Axis 5: second focuser.
    Focuser2 = 5,
}

impl Axis {
    /// All axes in number order.
    pub const ALL: [Axis; 5] = [
        Axis::Primary,
        Axis::Secondary,
        Axis::Rotator,
        Axis::Focuser1,
        Axis::Focuser2,
    ];

    /// Look up an axis by its 1-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|axis| axis.number() == number)
    }

    /// 1-based axis number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whether the axis belongs to the mount itself (not rotator or focuser).
    #[inline]
    pub const fn is_mount_axis(self) -> bool {
        matches!(self, Axis::Primary | Axis::Secondary)
    }

    /// Name of the axis for a given mount.
    pub const fn name(self, mount: MountType) -> &'static str {
        match (self, mount) {
            (Axis::Primary, MountType::Equatorial) => "RA",
            (Axis::Primary, MountType::AltAzimuth) => "Azm",
            (Axis::Secondary, MountType::Equatorial) => "Dec",
            (Axis::Secondary, MountType::AltAzimuth) => "Alt",
            (Axis::Rotator, _) => "Rotator",
            (Axis::Focuser1, _) => "Focuser1",
            (Axis::Focuser2, _) => "Focuser2",
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = crate::error::AxisSettingsError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(crate::error::AxisSettingsError::UnknownAxis(number))
    }
}
