//! Text layouts and the shape detection used by `from_string`

use log::debug;
use microtime_ports::{MicrotimeError, MicrotimeResult};
use std::fmt;

/// Microseconds in one second
pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Digits in the microseconds-of-second field
pub const FRACTION_DIGITS: usize = 6;

/// Leading field marker of the microtime text: `"0.66153000 1590417215"`
pub const MICROTIME_PREFIX: &str = "0.";

/// Trailing digits appended to the fraction field of exported microtime text
pub const MICROTIME_PADDING: &str = "00";

const MICROS_PER_SECOND_U32: u32 = 1_000_000;

/// Layout recognised in a timestamp string
///
/// Detection order matters: the microtime check runs first, then the
/// all-digits check, then the float check. `"0.5 10"` is microtime text
/// even though its first field is a float, and `"1590417215"` is a count of
/// microseconds even though it would also parse as float seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Two-field `"0.<fraction> <seconds>"` text
    Microtime,
    /// Only ASCII digits: microseconds since the epoch
    Microseconds(i64),
    /// Any other finite number: seconds since the epoch
    Seconds(f64),
}

impl Shape {
    /// Detect which layout `text` is written in
    ///
    /// Digit strings too long for an `i64` saturate to `i64::MAX`
    /// microseconds.
    pub fn detect(text: &str) -> MicrotimeResult<Self> {
        if text.contains(' ') && text.starts_with(MICROTIME_PREFIX) {
            debug!("Parsing {:?} as microtime text", text);
            return Ok(Shape::Microtime);
        }

        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            debug!("Parsing {:?} as microseconds", text);
            return Ok(Shape::Microseconds(text.parse().unwrap_or(i64::MAX)));
        }

        // Any finite parse compares equal to its own text numerically.
        // Surrounding whitespace is tolerated here only.
        match text.trim_ascii().parse::<f64>() {
            Ok(seconds) if seconds.is_finite() => {
                debug!("Parsing {:?} as float seconds", text);
                Ok(Shape::Seconds(seconds))
            }
            _ => {
                debug!("Rejected timestamp text {:?}", text);
                Err(MicrotimeError::InvalidFormat(text.to_string()))
            }
        }
    }
}

/// Read up to six fraction digits as microseconds, right-padding with zeros
///
/// `digits` must be ASCII digits only.
pub(crate) fn parse_fraction(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(FRACTION_DIGITS)
        .fold(0, |micros, digit| micros * 10 + u32::from(digit - b'0'))
}

/// Split `"0.<digits> <seconds>[ ...]"` into seconds and microseconds-of-second
pub(crate) fn parse_microtime(text: &str) -> MicrotimeResult<(i64, u32)> {
    let invalid = || {
        debug!("Rejected microtime text {:?}", text);
        MicrotimeError::InvalidFormat(text.to_string())
    };

    // Fields past the second are ignored.
    let mut fields = text.splitn(3, ' ');
    let fraction = fields.next().ok_or_else(invalid)?;
    let seconds = fields.next().ok_or_else(invalid)?;
    let digits = fraction.strip_prefix(MICROTIME_PREFIX).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let seconds = seconds.parse::<i64>().map_err(|_| invalid())?;

    Ok((seconds, parse_fraction(digits)))
}

/// Split float seconds into seconds and microseconds-of-second
///
/// Works on the shortest decimal text of `float`, so the microseconds are
/// exactly the digits that text shows: `1590417215.6615` gives `661500`.
/// Digits past the sixth are truncated. Non-finite values saturate the way
/// an `as` cast does.
pub(crate) fn split_float(float: f64) -> (i64, u32) {
    let text = float.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let seconds = whole.parse::<i64>().unwrap_or(float.trunc() as i64);
    let micros = parse_fraction(fraction);

    if float.is_sign_negative() && micros > 0 {
        // Keep the fraction non-negative: -1.5 is -2 s + 500000 us.
        (seconds.saturating_sub(1), MICROS_PER_SECOND_U32 - micros)
    } else {
        (seconds, micros)
    }
}

/// Parse `"<seconds>.<micros>"` as float seconds
pub(crate) fn float_seconds(seconds: i64, micros: u32) -> f64 {
    let total = i128::from(seconds) * i128::from(MICROS_PER_SECOND) + i128::from(micros);
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    let per_second = MICROS_PER_SECOND.unsigned_abs() as u128;

    format!(
        "{sign}{}.{:0width$}",
        magnitude / per_second,
        magnitude % per_second,
        width = FRACTION_DIGITS
    )
    .parse()
    .unwrap_or(f64::NAN)
}

/// Seconds followed by the zero-padded microseconds, no separator
pub(crate) fn write_text(f: &mut fmt::Formatter<'_>, seconds: i64, micros: u32) -> fmt::Result {
    write!(f, "{}{:0width$}", seconds, micros, width = FRACTION_DIGITS)
}

/// `"0.<micros>00 <seconds>"`
pub(crate) fn microtime_text(seconds: i64, micros: u32) -> String {
    format!(
        "{MICROTIME_PREFIX}{:0width$}{MICROTIME_PADDING} {seconds}",
        micros,
        width = FRACTION_DIGITS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_order() {
        assert_eq!(Shape::detect("0.66153000 1590417215"), Ok(Shape::Microtime));
        assert_eq!(
            Shape::detect("1590417215661530"),
            Ok(Shape::Microseconds(1_590_417_215_661_530))
        );
        assert_eq!(
            Shape::detect("1590417215.6615"),
            Ok(Shape::Seconds(1_590_417_215.6615))
        );
    }

    #[test]
    fn test_detect_microtime_needs_prefix_and_space() {
        // Space without the prefix falls through and fails as a float.
        assert!(Shape::detect("1.5 10").is_err());
        // Prefix without a space is a plain float.
        assert_eq!(Shape::detect("0.5"), Ok(Shape::Seconds(0.5)));
    }

    #[test]
    fn test_detect_leading_zero_digits_are_microseconds() {
        assert_eq!(Shape::detect("0000005"), Ok(Shape::Microseconds(5)));
    }

    #[test]
    fn test_detect_digit_overflow_saturates() {
        assert_eq!(
            Shape::detect("99999999999999999999"),
            Ok(Shape::Microseconds(i64::MAX))
        );
    }

    #[test]
    fn test_detect_rejects() {
        for text in ["", " ", "not-a-number", "inf", "NaN", "12abc", "1 2"] {
            assert_eq!(
                Shape::detect(text),
                Err(MicrotimeError::InvalidFormat(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_detect_float_tolerates_surrounding_whitespace() {
        assert_eq!(Shape::detect(" 12"), Ok(Shape::Seconds(12.0)));
        assert_eq!(Shape::detect("12 "), Ok(Shape::Seconds(12.0)));
        assert_eq!(
            Shape::detect(" 1590417215.5"),
            Ok(Shape::Seconds(1_590_417_215.5))
        );
        // Whitespace does not make digits count as microseconds.
        assert_eq!(Shape::detect("\t5\n"), Ok(Shape::Seconds(5.0)));
    }

    #[test]
    fn test_parse_fraction_pads_and_truncates() {
        assert_eq!(parse_fraction(""), 0);
        assert_eq!(parse_fraction("5"), 500_000);
        assert_eq!(parse_fraction("6615"), 661_500);
        assert_eq!(parse_fraction("000001"), 1);
        assert_eq!(parse_fraction("66153099"), 661_530);
    }

    #[test]
    fn test_parse_microtime() {
        assert_eq!(
            parse_microtime("0.66153000 1590417215"),
            Ok((1_590_417_215, 661_530))
        );
        assert_eq!(parse_microtime("0.5 10"), Ok((10, 500_000)));
    }

    #[test]
    fn test_parse_microtime_ignores_extra_fields() {
        assert_eq!(
            parse_microtime("0.66153000 1590417215 7"),
            Ok((1_590_417_215, 661_530))
        );
        assert_eq!(parse_microtime("0.5 10 x y"), Ok((10, 500_000)));
    }

    #[test]
    fn test_parse_microtime_rejects_malformed() {
        for text in [
            "0.66153000",
            "0.66153000 ",
            "0. 1590417215",
            "1.66153000 1590417215",
            "0.66x53000 1590417215",
        ] {
            assert!(parse_microtime(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_split_float() {
        assert_eq!(split_float(1_590_417_215.6615), (1_590_417_215, 661_500));
        assert_eq!(split_float(42.0), (42, 0));
        assert_eq!(split_float(0.000_000_1), (0, 0));
        assert_eq!(split_float(-1.5), (-2, 500_000));
    }

    #[test]
    fn test_split_float_non_finite_saturates() {
        assert_eq!(split_float(f64::NAN), (0, 0));
        assert_eq!(split_float(f64::INFINITY), (i64::MAX, 0));
        assert_eq!(split_float(1e20), (i64::MAX, 0));
    }

    #[test]
    fn test_float_seconds() {
        assert_eq!(float_seconds(1_590_417_215, 661_530), 1_590_417_215.66153);
        assert_eq!(float_seconds(1, 5), 1.000_005);
        assert_eq!(float_seconds(-1, 500_000), -0.5);
    }

    #[test]
    fn test_microtime_text_keeps_leading_zeros() {
        assert_eq!(microtime_text(1_590_417_215, 12_345), "0.01234500 1590417215");
    }
}
