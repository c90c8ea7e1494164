//! Number value type that keeps the exact JSON text.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;

/// A JSON number.
///
/// `Number` stores the number exactly as it appeared in the document, so no
/// precision is lost. Conversions happen on demand: integer and float
/// conversions fail when the target cannot hold the value, while the decimal
/// conversion rounds excess fractional digits.
///
/// Equality is textual: `1.0` and `1` are different numbers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

/// Error returned when text is not a valid JSON number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumberError;

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("invalid JSON number")
    }
}

impl std::error::Error for ParseNumberError {}

impl Number {
    /// Creates a number from a signed integer.
    pub fn from_i64(v: i64) -> Self {
        Number(v.to_string())
    }

    /// Creates a number from an unsigned integer.
    pub fn from_u64(v: u64) -> Self {
        Number(v.to_string())
    }

    /// Creates a number from a float. Returns `None` for NaN and infinities.
    pub fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then(|| Number(v.to_string()))
    }

    /// Creates a number from a decimal.
    pub fn from_decimal(v: Decimal) -> Self {
        Number(v.normalize().to_string())
    }

    /// The number's JSON text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the number, returning its JSON text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the text has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        !self.0.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// Converts to i64 if the number is an integer in range.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.0.parse().ok()
        } else {
            None
        }
    }

    /// Converts to u64 if the number is a non-negative integer in range.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.0.parse().ok()
        } else {
            None
        }
    }

    /// Converts to f64 if the value is finite as an f64.
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.to_f64_lossy()).filter(|f| f.is_finite())
    }

    /// Converts to f64, overflowing to infinity.
    pub fn to_f64_lossy(&self) -> f64 {
        // The grammar is a subset of what `f64::from_str` accepts.
        self.0.parse().unwrap_or(f64::NAN)
    }

    /// Converts to a decimal, rounding digits beyond `Decimal`'s precision.
    ///
    /// Returns `None` if the magnitude is too large for a `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.0)
    }
}

/// Digits before the point in `Decimal::MAX`.
const DECIMAL_INTEGER_DIGITS: i64 = 29;

/// Digits after the point a `Decimal` can hold.
const DECIMAL_MAX_SCALE: i64 = 28;

/// Parses JSON number text as a decimal.
///
/// Fractional digits beyond what a `Decimal` holds are rounded away, so
/// `1e-30` parses as zero. Returns `None` if the text is not a number or its
/// magnitude overflows `Decimal`.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let Some((mantissa, exponent)) = text.split_once(['e', 'E']) else {
        return Decimal::from_str(text).ok();
    };

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int}{frac}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }

    // Position of the decimal point relative to the first significant digit.
    let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
    let skipped = (digits.len() - significant.len()) as i64;
    let point = match exponent.parse::<i64>() {
        Ok(exponent) => (int.len() as i64 - skipped).saturating_add(exponent),
        Err(_) if exponent.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    };

    if point > DECIMAL_INTEGER_DIGITS {
        return None;
    }
    if point < -DECIMAL_MAX_SCALE {
        return Some(Decimal::ZERO);
    }

    let sign = if negative { "-" } else { "" };
    let plain = if point <= 0 {
        format!("{sign}0.{}{significant}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= significant.len() {
        format!("{sign}{significant}{}", "0".repeat(point as usize - significant.len()))
    } else {
        let (whole, fraction) = significant.split_at(point as usize);
        format!("{sign}{whole}.{fraction}")
    };
    Decimal::from_str(&plain).ok()
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_json_number(s.as_bytes()) {
            Ok(Number(s.to_owned()))
        } else {
            Err(ParseNumberError)
        }
    }
}

impl TryFrom<String> for Number {
    type Error = ParseNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_json_number(s.as_bytes()) {
            Ok(Number(s))
        } else {
            Err(ParseNumberError)
        }
    }
}

// -? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?
fn is_json_number(s: &[u8]) -> bool {
    fn digits(s: &[u8], mut i: usize) -> usize {
        while s.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    }

    let mut i = usize::from(s.first() == Some(&b'-'));
    match s.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits(s, i + 1),
        _ => return false,
    }
    if s.get(i) == Some(&b'.') {
        let end = digits(s, i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }
    if matches!(s.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(s.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits(s, i);
        if end == i {
            return false;
        }
        i = end;
    }
    i == s.len()
}

impl Default for Number {
    fn default() -> Self {
        Number(String::from("0"))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number(v.to_string())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Decimal> for Number {
    fn from(v: Decimal) -> Self {
        Number::from_decimal(v)
    }
}
