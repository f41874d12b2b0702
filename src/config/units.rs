//! Unit types for driver settings and sensor readings.

use serde::Deserialize;

use crate::error::AxisSettingsError;

/// Sentinel for a driver field the controller does not manage.
pub const OFF: i16 = -1;

/// Microstep divisor (1, 2, 4, 8, 16, 32, 64, 128, 256).
///
/// Validated at construction to be a power of 2 within the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Microsteps(u16);

impl Microsteps {
    /// Sixteenth step.
    pub const SIXTEENTH: Self = Self(16);

    /// Valid microstep values.
    const VALID_VALUES: [u16; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

    /// Create a new Microsteps value with validation.
    ///
    /// # Errors
    ///
    /// Returns `AxisSettingsError::InvalidMicrosteps` if the value is not a
    /// supported power of 2.
    pub fn new(value: i16) -> Result<Self, AxisSettingsError> {
        u16::try_from(value)
            .ok()
            .filter(|v| Self::VALID_VALUES.contains(v))
            .map(Self)
            .ok_or(AxisSettingsError::InvalidMicrosteps(value))
    }

    /// Get the raw divisor value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i16> for Microsteps {
    type Error = AxisSettingsError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f32);

impl Celsius {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to degrees Fahrenheit.
    #[inline]
    pub fn to_fahrenheit(self) -> f32 {
        self.0 * 9.0 / 5.0 + 32.0
    }
}

/// Barometric pressure in hectopascals (millibars).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Hectopascals(pub f32);

impl Hectopascals {
    /// Inches of mercury per hectopascal.
    const INHG_PER_HPA: f32 = 0.029_529_983;

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to inches of mercury.
    #[inline]
    pub fn to_inches_hg(self) -> f32 {
        self.0 * Self::INHG_PER_HPA
    }
}
