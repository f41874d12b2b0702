//! Controller configuration - root configuration structure.

use heapless::Vec;
use serde::Deserialize;

use crate::format::locale::{locale_pressure, locale_temperature, LocaleReading, UnitSystem};

use super::axis::AxisSettings;
use super::mount::{Axis, MountType};
use super::units::{Celsius, Hectopascals};

/// Settings text for one numbered axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AxisEntry {
    /// Axis number (1-5).
    pub axis: u8,
    /// Decoded settings.
    pub settings: AxisSettings,
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControllerConfig {
    /// Mount geometry.
    #[serde(default)]
    pub mount: MountType,

    /// Display unit system.
    #[serde(default)]
    pub units: UnitSystem,

    /// Configured axes, one `[[axis]]` table each.
    #[serde(default, rename = "axis")]
    pub axes: Vec<AxisEntry, 5>,
}

impl ControllerConfig {
    /// Get the settings of an axis by number.
    pub fn axis(&self, number: u8) -> Option<&AxisSettings> {
        self.axes
            .iter()
            .find(|entry| entry.axis == number)
            .map(|entry| &entry.settings)
    }

    /// List configured axes that map to a known axis.
    pub fn configured_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        self.axes.iter().filter_map(|entry| Axis::from_number(entry.axis))
    }

    /// Format an ambient temperature in the configured units.
    pub fn temperature(&self, celsius: Celsius) -> LocaleReading {
        locale_temperature(celsius, self.units)
    }

    /// Format a barometric pressure in the configured units.
    pub fn pressure(&self, hpa: Hectopascals) -> LocaleReading {
        locale_pressure(hpa, self.units)
    }
}
