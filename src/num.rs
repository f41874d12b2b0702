//! Checked numeric parsing and canonical number text.
//!
//! Settings arrive as text from storage or a web form, so every conversion
//! here reports failure instead of guessing a value.

use core::num::IntErrorKind;

use heapless::String;

use crate::error::ParseError;

/// Parse a decimal integer with error checking.
///
/// Accepts an optional leading `+` or `-` followed by one or more ASCII
/// digits. Whitespace is not trimmed.
///
/// # Errors
///
/// - `ParseError::Empty` for an empty string
/// - `ParseError::InvalidDigit` for anything outside `[+-]?[0-9]+`
/// - `ParseError::OutOfRange` when the value does not fit an `i32`
///
/// # Example
///
/// ```rust
/// use mount_settings::num::parse_int;
///
/// assert_eq!(parse_int("-042"), Ok(-42));
/// assert!(parse_int("12a").is_err());
/// ```
pub fn parse_int(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => ParseError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange,
        _ => ParseError::InvalidDigit,
    })
}

/// Parse an integer and narrow it to a smaller field type.
///
/// # Errors
///
/// Same as [`parse_int`], plus `ParseError::OutOfRange` if the value does
/// not fit `T`.
pub fn parse_bounded<T>(s: &str) -> Result<T, ParseError>
where
    T: TryFrom<i32>,
{
    let value = parse_int(s)?;
    T::try_from(value).map_err(|_| ParseError::OutOfRange)
}

/// Parse a finite decimal floating-point value.
///
/// # Errors
///
/// - `ParseError::Empty` for an empty string
/// - `ParseError::InvalidDigit` for trailing garbage or non-numeric text
/// - `ParseError::OutOfRange` for NaN or infinite results
pub fn parse_float(s: &str) -> Result<f64, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let value = s.parse::<f64>().map_err(|_| ParseError::InvalidDigit)?;
    if !value.is_finite() {
        return Err(ParseError::OutOfRange);
    }
    Ok(value)
}

/// Split a plain decimal number into sign, integer digits and fraction digits.
///
/// Returns `None` unless the text is `[+-]?[0-9]*(\.[0-9]*)?` with at least
/// one digit.
fn split_decimal(s: &str) -> Option<(&str, &str, Option<&str>)> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => s.split_at(1),
        _ => ("", s),
    };
    let (int, frac) = match rest.find('.') {
        Some(dot) => (&rest[..dot], Some(&rest[dot + 1..])),
        None => (rest, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !frac.map_or(true, all_digits) {
        return None;
    }
    if int.is_empty() && frac.map_or(true, str::is_empty) {
        return None;
    }
    Some((sign, int, frac))
}

/// Remove leading and trailing zeros from a decimal number in place.
///
/// - leading zeros of the integer part go, keeping a single `0` before the
///   point (`"00012.340"` → `"12.34"`, `"0.50"` → `"0.5"`, `"007"` → `"7"`)
/// - trailing zeros of the fraction go, and the point with them when the
///   fraction empties (`"0.0"` → `"0"`, `"10.0"` → `"10"`)
/// - integer zeros are significant (`"100"` stays `"100"`)
/// - a value that strips to zero loses its sign (`"-0.00"` → `"0"`)
///
/// Text that is not a plain decimal number is left untouched.
pub fn strip_num<const N: usize>(s: &mut String<N>) {
    let Some((sign, int, frac)) = split_decimal(s.as_str()) else {
        return;
    };

    let frac = frac.map(|f| f.trim_end_matches('0')).unwrap_or("");
    let int = match int.trim_start_matches('0') {
        "" if int.is_empty() && !frac.is_empty() => "",
        "" => "0",
        digits => digits,
    };
    let sign = if int.trim_start_matches('0').is_empty() && frac.is_empty() {
        ""
    } else {
        sign
    };

    // Never longer than the input, so a same-capacity buffer always fits.
    if let Ok(out) = rebuild::<N>(sign, int, frac) {
        *s = out;
    }
}

fn rebuild<const N: usize>(sign: &str, int: &str, frac: &str) -> Result<String<N>, ()> {
    let mut out = String::new();
    out.push_str(sign)?;
    out.push_str(int)?;
    if !frac.is_empty() {
        out.push('.')?;
        out.push_str(frac)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(input: &str) -> String<32> {
        let mut s = String::<32>::try_from(input).unwrap();
        strip_num(&mut s);
        s
    }

    #[test]
    fn test_parse_int_accepts_signs() {
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("+17"), Ok(17));
        assert_eq!(parse_int("-17"), Ok(-17));
        assert_eq!(parse_int("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_int("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn test_parse_int_rejects_malformed() {
        assert_eq!(parse_int(""), Err(ParseError::Empty));
        assert_eq!(parse_int("-"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int("12a"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int(" 12"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int("1.5"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int("2147483648"), Err(ParseError::OutOfRange));
        assert_eq!(parse_int("-2147483649"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_parse_bounded_narrows() {
        assert_eq!(parse_bounded::<i16>("-32768"), Ok(i16::MIN));
        assert_eq!(parse_bounded::<i16>("32768"), Err(ParseError::OutOfRange));
        assert_eq!(parse_bounded::<i8>("1"), Ok(1i8));
        assert_eq!(parse_bounded::<i8>("200"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("12800.5"), Ok(12800.5));
        assert_eq!(parse_float("-3"), Ok(-3.0));
        assert_eq!(parse_float(""), Err(ParseError::Empty));
        assert_eq!(parse_float("1.2.3"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_float("inf"), Err(ParseError::OutOfRange));
        assert_eq!(parse_float("NaN"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_strip_leading_and_trailing() {
        assert_eq!(stripped("00012.340"), "12.34");
        assert_eq!(stripped("0.50"), "0.5");
        assert_eq!(stripped("007"), "7");
        assert_eq!(stripped("100"), "100");
        assert_eq!(stripped("10.0"), "10");
        assert_eq!(stripped("-007.100"), "-7.1");
    }

    #[test]
    fn test_strip_zero_forms() {
        assert_eq!(stripped("0"), "0");
        assert_eq!(stripped("000"), "0");
        assert_eq!(stripped("0.0"), "0");
        assert_eq!(stripped("-0.00"), "0");
        assert_eq!(stripped(".0"), "0");
        assert_eq!(stripped(".50"), ".5");
    }

    #[test]
    fn test_strip_leaves_non_numbers() {
        assert_eq!(stripped(""), "");
        assert_eq!(stripped("abc"), "abc");
        assert_eq!(stripped("1,000"), "1,000");
        assert_eq!(stripped("-"), "-");
    }
}
