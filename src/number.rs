//! Parsing of the temperature column.
//!
//! The accepted grammar is `-?[0-9]+(\.[0-9]+)?`: no exponent, no leading `+`,
//! no whitespace. [`parse_trusted`] assumes that grammar holds and skips every
//! check, [`parse_validated`] rejects anything else.

use crate::error::RecordError;

/// How the value column of a record is turned into a number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NumberMode {
    /// Digit arithmetic without any checks. Input outside the grammar yields
    /// an unspecified value instead of an error.
    #[default]
    Trusted,
    /// Checks the grammar first; malformed values become
    /// [`RecordError::MalformedNumber`].
    Validated,
}

impl NumberMode {
    #[inline]
    pub fn parse(self, bytes: &[u8]) -> Result<f64, RecordError> {
        match self {
            Self::Trusted => Ok(parse_trusted(bytes)),
            Self::Validated => parse_validated(bytes),
        }
    }
}

/// Converts `bytes` by subtracting `b'0'` from every digit. The fractional
/// part is accumulated with a weight that shrinks by a factor of ten per
/// position.
#[inline]
pub fn parse_trusted(bytes: &[u8]) -> f64 {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    let mut digits = digits.iter();
    let mut value = 0.0_f64;
    for &digit in digits.by_ref() {
        if digit == b'.' {
            break;
        }
        value = value * 10.0 + f64::from(digit.wrapping_sub(b'0'));
    }

    let mut fraction = 0.0_f64;
    let mut weight = 0.1_f64;
    for &digit in digits {
        fraction += f64::from(digit.wrapping_sub(b'0')) * weight;
        weight *= 0.1;
    }
    value += fraction;

    if negative {
        -value
    } else {
        value
    }
}

/// Checks the grammar and converts with `fast_float`, so the result is the
/// correctly rounded `f64`. This can differ from [`parse_trusted`] in the
/// last bit.
pub fn parse_validated(bytes: &[u8]) -> Result<f64, RecordError> {
    if !matches_grammar(bytes) {
        return Err(RecordError::MalformedNumber);
    }
    fast_float::parse(bytes).map_err(|_| RecordError::MalformedNumber)
}

fn matches_grammar(bytes: &[u8]) -> bool {
    let unsigned = bytes.strip_prefix(b"-").unwrap_or(bytes);
    let (integer, fraction) = match memchr::memchr(b'.', unsigned) {
        Some(dot) => (&unsigned[..dot], Some(&unsigned[dot + 1..])),
        None => (unsigned, None),
    };
    let all_digits = |part: &[u8]| !part.is_empty() && part.iter().all(u8::is_ascii_digit);
    all_digits(integer) && fraction.map_or(true, all_digits)
}
