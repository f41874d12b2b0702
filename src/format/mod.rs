//! Display text: DMS coordinates and locale-dependent sensor readings.
//!
//! All output goes into fixed-capacity `heapless` strings.

pub mod dms;
pub mod locale;

pub use dms::{format_dms, parse_dms, DmsString, DmsStyle, SecondsPrecision, DMS_CAPACITY};
pub use locale::{locale_pressure, locale_temperature, LocaleReading, UnitSystem, LOCALE_CAPACITY};
