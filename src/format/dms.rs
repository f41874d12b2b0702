//! Degrees/minutes/seconds text for coordinates.
//!
//! Output is `[sign]DD*MM'SS` for ±90° values (declination, altitude,
//! latitude) and `[sign]DDD*MM'SS` for full-circle values (azimuth,
//! longitude). Tenths precision appends `.f` to the seconds.

use core::fmt::Write;

use heapless::String;

use crate::error::{DmsError, Error, FormatError, Result};
use crate::num::{parse_float, parse_int};

/// Capacity of a formatted DMS string. The longest output,
/// `-359*59'59.9`, is 12 bytes.
pub const DMS_CAPACITY: usize = 16;

/// Fixed-capacity DMS text.
pub type DmsString = String<DMS_CAPACITY>;

/// Resolution of the seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecondsPrecision {
    /// Whole arc-seconds.
    #[default]
    Whole,
    /// Tenths of an arc-second.
    Tenths,
}

impl SecondsPrecision {
    /// Formatting units per arc-second.
    const fn scale(self) -> u64 {
        match self {
            SecondsPrecision::Whole => 1,
            SecondsPrecision::Tenths => 10,
        }
    }
}

/// How an angle is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DmsStyle {
    /// Allow degrees up to 360 with a 3-digit degree field. Otherwise the
    /// angle must be within ±90 and degrees get 2 digits.
    pub full_range: bool,
    /// Always emit `+` or `-`. Otherwise only negative values carry a sign.
    pub sign_present: bool,
    /// Seconds resolution.
    pub precision: SecondsPrecision,
}

impl DmsStyle {
    /// Signed ±90° layout used for declination and altitude: `+DD*MM'SS`.
    pub const DECLINATION: Self = Self {
        full_range: false,
        sign_present: true,
        precision: SecondsPrecision::Whole,
    };

    /// Unsigned full-circle layout used for azimuth: `DDD*MM'SS`.
    pub const AZIMUTH: Self = Self {
        full_range: true,
        sign_present: false,
        precision: SecondsPrecision::Whole,
    };

    /// Signed full-circle layout used for longitude: `+DDD*MM'SS`.
    pub const LONGITUDE: Self = Self {
        full_range: true,
        sign_present: true,
        precision: SecondsPrecision::Whole,
    };

    /// Create a style with whole-second precision.
    pub const fn new(full_range: bool, sign_present: bool) -> Self {
        Self {
            full_range,
            sign_present,
            precision: SecondsPrecision::Whole,
        }
    }

    /// Same style with a different seconds precision.
    pub const fn with_precision(self, precision: SecondsPrecision) -> Self {
        Self { precision, ..self }
    }

    fn limit(self) -> f64 {
        if self.full_range {
            360.0
        } else {
            90.0
        }
    }
}

/// Format an angle in degrees as DMS text.
///
/// The magnitude is rounded to the seconds precision with carries into
/// minutes and degrees. A full-range value that rounds up to 360° is shown
/// as `000*00'00`. A value that rounds to zero is positive.
///
/// # Errors
///
/// - `DmsError::NotFinite` for NaN or infinite input
/// - `DmsError::OutOfRange` when the magnitude exceeds 90° (or 360° for a
///   full-range style)
///
/// # Example
///
/// ```rust
/// use mount_settings::format::{format_dms, DmsStyle};
///
/// let text = format_dms(-12.5, DmsStyle::DECLINATION).unwrap();
/// assert_eq!(text.as_str(), "-12*30'00");
/// ```
pub fn format_dms(angle: f64, style: DmsStyle) -> Result<DmsString> {
    if !angle.is_finite() {
        return Err(DmsError::NotFinite.into());
    }
    let magnitude = libm::fabs(angle);
    if magnitude > style.limit() {
        #[cfg(feature = "defmt")]
        defmt::warn!("format_dms: {} exceeds +/-{}", angle, style.limit());
        return Err(DmsError::OutOfRange(angle).into());
    }

    let scale = style.precision.scale();
    let per_minute = 60 * scale;
    let per_degree = 60 * per_minute;

    let mut total = libm::round(magnitude * per_degree as f64) as u64;
    if style.full_range && total >= 360 * per_degree {
        total -= 360 * per_degree;
    }

    let degrees = total / per_degree;
    let minutes = (total % per_degree) / per_minute;
    let seconds = (total % per_minute) / scale;
    let fraction = total % scale;

    let sign = if angle < 0.0 && total != 0 {
        "-"
    } else if style.sign_present {
        "+"
    } else {
        ""
    };
    let width = if style.full_range { 3 } else { 2 };

    let mut out = DmsString::new();
    write!(out, "{}{:0width$}*{:02}'{:02}", sign, degrees, minutes, seconds, width = width)
        .map_err(|_| Error::Format(FormatError::Capacity(DMS_CAPACITY)))?;
    if style.precision == SecondsPrecision::Tenths {
        write!(out, ".{}", fraction).map_err(|_| Error::Format(FormatError::Capacity(DMS_CAPACITY)))?;
    }
    Ok(out)
}

/// Read DMS text produced by [`format_dms`] back into signed degrees.
///
/// Accepts an optional sign, any number of degree digits, two minute digits
/// and two second digits with an optional decimal fraction.
///
/// # Errors
///
/// Returns `DmsError::Malformed` if the text does not have that shape or a
/// minutes/seconds field is 60 or more.
pub fn parse_dms(text: &str) -> core::result::Result<f64, DmsError> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (degrees, rest) = body.split_once('*').ok_or(DmsError::Malformed)?;
    let (minutes, seconds) = rest.split_once('\'').ok_or(DmsError::Malformed)?;

    let unsigned_field = |field: &str| {
        if field.bytes().next().map_or(false, |b| b.is_ascii_digit()) {
            parse_int(field).map_err(|_| DmsError::Malformed)
        } else {
            Err(DmsError::Malformed)
        }
    };
    let degrees = unsigned_field(degrees)?;
    let minutes = unsigned_field(minutes)?;
    if minutes >= 60 || !seconds.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(DmsError::Malformed);
    }
    let seconds = parse_float(seconds).map_err(|_| DmsError::Malformed)?;
    if seconds >= 60.0 {
        return Err(DmsError::Malformed);
    }

    let magnitude = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
    Ok(if negative { -magnitude } else { magnitude })
}
