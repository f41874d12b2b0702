//! Axis settings record and its text form.
//!
//! Settings travel as one line of six comma-separated numbers, in order
//! `steps_per_measure,microsteps,irun,reverse,min,max`, e.g.
//! `12800,16,800,0,-180,180`.

use core::fmt::{self, Write};
use core::str::FromStr;

use heapless::String;
use serde::Deserialize;

use crate::error::{FormatError, ParseError};
use crate::num::{parse_bounded, parse_float};

use super::units::{Microsteps, OFF};

/// Field separator of the settings text.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in the settings text.
pub const FIELD_COUNT: usize = 6;

/// Capacity of encoded settings text.
pub const SETTINGS_CAPACITY: usize = 64;

const FIELD_NAMES: [&str; FIELD_COUNT] = ["steps_per_measure", "microsteps", "irun", "reverse", "min", "max"];

/// Drive settings for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSettings {
    /// Steps per degree (mount axes, rotator) or per micron (focusers).
    pub steps_per_measure: f64,
    /// Microstep divisor, or [`OFF`] when the driver is not managed.
    pub microsteps: i16,
    /// Run current in mA, or [`OFF`].
    pub irun: i16,
    /// 1 if the axis direction is reversed, 0 otherwise.
    pub reverse: i8,
    /// Minimum limit (degrees, or millimetres for focusers).
    pub min: i16,
    /// Maximum limit (degrees, or millimetres for focusers).
    pub max: i16,
}

impl AxisSettings {
    /// Decode settings text.
    ///
    /// Whitespace around a field is ignored. Nothing is returned unless all
    /// six fields parse.
    ///
    /// # Errors
    ///
    /// - `ParseError::FieldCount` if there are not exactly six fields
    /// - `ParseError::InvalidField` naming the first field that is empty,
    ///   not a number, or out of range for its type
    ///
    /// # Example
    ///
    /// ```rust
    /// use mount_settings::config::AxisSettings;
    ///
    /// let s = AxisSettings::decode("1000,16,800,0,-100,100").unwrap();
    /// assert_eq!(s.microsteps, 16);
    /// assert_eq!(s.min, -100);
    /// ```
    pub fn decode(text: &str) -> Result<Self, ParseError> {
        let count = text.split(FIELD_DELIMITER).count();
        if count != FIELD_COUNT {
            #[cfg(feature = "defmt")]
            defmt::warn!("axis settings: expected {} fields, found {}", FIELD_COUNT, count);
            return Err(ParseError::FieldCount(count));
        }

        let mut raw = [""; FIELD_COUNT];
        for (slot, field) in raw.iter_mut().zip(text.split(FIELD_DELIMITER)) {
            *slot = field.trim();
        }

        Ok(Self {
            steps_per_measure: field(&raw, 0, parse_float)?,
            microsteps: field(&raw, 1, parse_bounded::<i16>)?,
            irun: field(&raw, 2, parse_bounded::<i16>)?,
            reverse: field(&raw, 3, parse_bounded::<i8>)?,
            min: field(&raw, 4, parse_bounded::<i16>)?,
            max: field(&raw, 5, parse_bounded::<i16>)?,
        })
    }

    /// Encode back into settings text.
    ///
    /// Steps per measure is written in its shortest form that reads back to
    /// the same value, so `12800.0` becomes `12800` and `12800.0004` is kept
    /// as is. Decoding the result gives back an identical record.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Capacity` if the text exceeds
    /// [`SETTINGS_CAPACITY`], which only happens for huge step values. The
    /// [`Display`](fmt::Display) form has no such limit.
    pub fn encode(&self) -> Result<String<SETTINGS_CAPACITY>, FormatError> {
        let mut out = String::new();
        write!(out, "{}", self).map_err(|_| FormatError::Capacity(SETTINGS_CAPACITY))?;
        Ok(out)
    }

    /// Whether the axis direction is reversed.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reverse == 1
    }

    /// Microstep divisor, if the driver is managed and the value is valid.
    pub fn microstep_divisor(&self) -> Option<Microsteps> {
        if self.microsteps == OFF {
            None
        } else {
            Microsteps::try_from(self.microsteps).ok()
        }
    }

    /// Run current in mA, if managed.
    pub fn run_current(&self) -> Option<i16> {
        (self.irun != OFF).then_some(self.irun)
    }
}

fn field<T>(raw: &[&str; FIELD_COUNT], index: usize, parse: fn(&str) -> Result<T, ParseError>) -> Result<T, ParseError> {
    parse(raw[index]).map_err(|cause| {
        #[cfg(feature = "defmt")]
        defmt::warn!("axis settings: bad {} field '{}'", FIELD_NAMES[index], raw[index]);
        ParseError::InvalidField {
            index,
            name: FIELD_NAMES[index],
            cause: cause.into(),
        }
    })
}

impl FromStr for AxisSettings {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for AxisSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            self.steps_per_measure,
            self.microsteps,
            self.irun,
            self.reverse,
            self.min,
            self.max,
            d = FIELD_DELIMITER
        )
    }
}

impl<'de> Deserialize<'de> for AxisSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::<SETTINGS_CAPACITY>::deserialize(deserializer)?;
        AxisSettings::decode(text.as_str()).map_err(|e| {
            let mut buf = String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
