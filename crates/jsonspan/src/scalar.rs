//! Scalar interpretation of misc leaf content.
//!
//! These routines read a leaf's raw bytes and never look at structure.
//! Numbers follow the C literal convention: `0x`/`0X` is hexadecimal, a
//! leading zero is octal, everything else is decimal, and the whole span
//! must be consumed. Spans that do not start with a digit (or a `-` and a
//! digit for the signed form) fall back to a keyword reading where `no`,
//! `null`, and `false` mean 0 and `yes` and `true` mean 1.

use crate::error::Error;

/// Numbers longer than this are rejected outright.
const MAX_NUMBER_LEN: usize = 127;

pub(crate) fn to_unsigned(raw: &[u8]) -> Result<u64, Error> {
    match raw.first() {
        Some(b) if b.is_ascii_digit() => parse_magnitude(raw),
        Some(_) => keyword_value(raw).map(u64::from),
        None => Err(Error::Conversion),
    }
}

pub(crate) fn to_signed(raw: &[u8]) -> Result<i64, Error> {
    match raw {
        [b'-', digits @ ..] if digits.first().is_some_and(u8::is_ascii_digit) => {
            let magnitude = parse_magnitude(digits)?;
            0i64.checked_sub_unsigned(magnitude).ok_or(Error::Conversion)
        }
        [first, ..] if first.is_ascii_digit() => {
            let magnitude = parse_magnitude(raw)?;
            i64::try_from(magnitude).map_err(|_| Error::Conversion)
        }
        [_, ..] => keyword_value(raw).map(i64::from),
        [] => Err(Error::Conversion),
    }
}

/// Parses a digit-led span as an unsigned number, detecting the base from
/// the literal prefix.
fn parse_magnitude(raw: &[u8]) -> Result<u64, Error> {
    if raw.len() > MAX_NUMBER_LEN {
        return Err(Error::Conversion);
    }
    let (radix, digits) = match raw {
        [b'0', b'x' | b'X', digits @ ..] => (16, digits),
        [b'0', digits @ ..] if !digits.is_empty() => (8, digits),
        _ => (10, raw),
    };
    let text = core::str::from_utf8(digits).map_err(|_| Error::Conversion)?;
    u64::from_str_radix(text, radix).map_err(|_| Error::Conversion)
}

/// The boolean and null keywords, matched exactly.
fn keyword_value(raw: &[u8]) -> Result<u8, Error> {
    match raw {
        b"no" | b"null" | b"false" => Ok(0),
        b"yes" | b"true" => Ok(1),
        _ => Err(Error::Conversion),
    }
}
