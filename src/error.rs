//! Error types for mount-settings.
//!
//! Provides unified error handling across numeric parsing, axis settings,
//! coordinate formatting and configuration loading.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all mount-settings operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Numeric or settings-string parsing error
    Parse(ParseError),
    /// Angle formatting or parsing error
    Dms(DmsError),
    /// Axis settings rejected by validation
    Axis(AxisSettingsError),
    /// Output buffer error
    Format(FormatError),
    /// Configuration document error
    Config(ConfigError),
}

/// Text-to-number parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Input was empty (or only whitespace)
    Empty,
    /// Input contained a character that is not part of a number
    InvalidDigit,
    /// Value does not fit the target type, or is not finite
    OutOfRange,
    /// Settings string had the wrong number of fields
    FieldCount(usize),
    /// A settings field failed to parse
    InvalidField {
        /// Zero-based field position
        index: usize,
        /// Field name
        name: &'static str,
        /// Underlying cause
        cause: NumberFault,
    },
}

/// Cause of a single-field failure inside a settings string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumberFault {
    /// Field was empty
    Empty,
    /// Field contained a non-numeric character
    InvalidDigit,
    /// Field value out of range for its type
    OutOfRange,
}

/// Degrees/minutes/seconds errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DmsError {
    /// Angle is NaN or infinite
    NotFinite,
    /// Angle magnitude exceeds the range of the requested style
    OutOfRange(f64),
    /// Text is not a DMS string
    Malformed,
}

/// Output buffer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Formatted text does not fit the fixed-capacity buffer
    Capacity(usize),
}

/// Reasons an axis settings record is rejected, in check order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisSettingsError {
    /// Axis number is not 1-5
    UnknownAxis(u8),
    /// Minimum limit is above maximum limit
    InvertedLimits {
        /// Minimum limit value
        min: i16,
        /// Maximum limit value
        max: i16,
    },
    /// Microsteps not a supported power of 2 (1-256) or OFF
    InvalidMicrosteps(i16),
    /// Run current outside the driver range for this axis
    InvalidIrun {
        /// Configured current in mA
        irun: i16,
        /// Highest allowed current in mA
        max: i16,
    },
    /// Reverse flag is not 0 or 1
    InvalidReverse(i8),
    /// Steps per measure outside the range for this axis
    StepsPerMeasureOutOfRange(f64),
    /// Minimum limit outside the window for this axis and mount
    MinOutOfRange(i16),
    /// Maximum limit outside the window for this axis and mount
    MaxOutOfRange(i16),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Same axis listed twice
    DuplicateAxis(u8),
    /// More `[[axis]]` tables than there are axes
    TooManyAxes(usize),
    /// Axis settings text could not be decoded
    UndecodableAxis {
        /// Axis number
        axis: u8,
        /// Decode failure
        error: ParseError,
    },
    /// Axis settings failed validation
    InvalidAxis {
        /// Axis number
        axis: u8,
        /// Failing check
        error: AxisSettingsError,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Dms(e) => write!(f, "DMS error: {}", e),
            Error::Axis(e) => write!(f, "Axis settings error: {}", e),
            Error::Format(e) => write!(f, "Format error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty input"),
            ParseError::InvalidDigit => write!(f, "invalid digit"),
            ParseError::OutOfRange => write!(f, "value out of range"),
            ParseError::FieldCount(n) => {
                write!(f, "expected 6 fields, found {}", n)
            }
            ParseError::InvalidField { index, name, cause } => {
                write!(f, "field {} ({}): {}", index, name, cause)
            }
        }
    }
}

impl fmt::Display for NumberFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFault::Empty => write!(f, "empty"),
            NumberFault::InvalidDigit => write!(f, "not a number"),
            NumberFault::OutOfRange => write!(f, "out of range"),
        }
    }
}

impl fmt::Display for DmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DmsError::NotFinite => write!(f, "angle is not finite"),
            DmsError::OutOfRange(v) => write!(f, "angle {} out of range", v),
            DmsError::Malformed => write!(f, "malformed DMS string"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Capacity(cap) => {
                write!(f, "output exceeds buffer capacity of {} bytes", cap)
            }
        }
    }
}

impl fmt::Display for AxisSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSettingsError::UnknownAxis(n) => write!(f, "Unknown axis {}. Must be 1-5", n),
            AxisSettingsError::InvertedLimits { min, max } => {
                write!(f, "Invalid limits: min ({}) must be <= max ({})", min, max)
            }
            AxisSettingsError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: OFF, 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            AxisSettingsError::InvalidIrun { irun, max } => {
                write!(f, "Invalid IRUN: {} mA. Must be 0-{} or OFF", irun, max)
            }
            AxisSettingsError::InvalidReverse(v) => write!(f, "Invalid reverse flag: {}. Must be 0 or 1", v),
            AxisSettingsError::StepsPerMeasureOutOfRange(v) => {
                write!(f, "Steps per measure {} out of range", v)
            }
            AxisSettingsError::MinOutOfRange(v) => write!(f, "Minimum limit {} out of range", v),
            AxisSettingsError::MaxOutOfRange(v) => write!(f, "Maximum limit {} out of range", v),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::DuplicateAxis(n) => write!(f, "Duplicate axis: {}", n),
            ConfigError::TooManyAxes(n) => write!(f, "Too many axes: {}", n),
            ConfigError::UndecodableAxis { axis, error } => write!(f, "Axis {} settings: {}", axis, error),
            ConfigError::InvalidAxis { axis, error } => write!(f, "Axis {}: {}", axis, error),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<DmsError> for Error {
    fn from(e: DmsError) -> Self {
        Error::Dms(e)
    }
}

impl From<AxisSettingsError> for Error {
    fn from(e: AxisSettingsError) -> Self {
        Error::Axis(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ParseError> for NumberFault {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Empty => NumberFault::Empty,
            ParseError::OutOfRange => NumberFault::OutOfRange,
            _ => NumberFault::InvalidDigit,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl std::error::Error for DmsError {}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisSettingsError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
