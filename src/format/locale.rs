//! Temperature and pressure display in the configured unit system.

use core::fmt::{self, Write};

use heapless::String;
use serde::Deserialize;

use crate::config::units::{Celsius, Hectopascals};
use crate::error::FormatError;

/// Capacity of rendered locale text (`<value> <unit>`).
pub const LOCALE_CAPACITY: usize = 24;

/// Display unit system selected in the controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Celsius and hectopascals.
    #[default]
    Metric,
    /// Fahrenheit and inches of mercury.
    Imperial,
}

/// A reading converted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleReading {
    /// Value in the display unit.
    pub value: f32,
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Unit label (`C`, `F`, `hPa` or `inHg`).
    pub unit: &'static str,
}

impl LocaleReading {
    /// Render as `<value> <unit>` into a fixed-capacity string.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Capacity` if the text does not fit, e.g. for an
    /// absurdly large value.
    pub fn text(&self) -> Result<String<LOCALE_CAPACITY>, FormatError> {
        let mut out = String::new();
        write!(out, "{}", self).map_err(|_| FormatError::Capacity(LOCALE_CAPACITY))?;
        Ok(out)
    }
}

impl fmt::Display for LocaleReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*} {}", self.decimals, self.value, self.unit)
    }
}

/// Convert an ambient temperature for display.
///
/// Metric shows Celsius, imperial shows Fahrenheit, both with one decimal.
pub fn locale_temperature(temperature: Celsius, units: UnitSystem) -> LocaleReading {
    match units {
        UnitSystem::Metric => LocaleReading {
            value: temperature.value(),
            decimals: 1,
            unit: "C",
        },
        UnitSystem::Imperial => LocaleReading {
            value: temperature.to_fahrenheit(),
            decimals: 1,
            unit: "F",
        },
    }
}

/// Convert a barometric pressure for display.
///
/// Metric shows hectopascals with one decimal, imperial shows inches of
/// mercury with two.
pub fn locale_pressure(pressure: Hectopascals, units: UnitSystem) -> LocaleReading {
    match units {
        UnitSystem::Metric => LocaleReading {
            value: pressure.value(),
            decimals: 1,
            unit: "hPa",
        },
        UnitSystem::Imperial => LocaleReading {
            value: pressure.to_inches_hg(),
            decimals: 2,
            unit: "inHg",
        },
    }
}
