//! Numeric coercions from raw JSON number text.
//!
//! Integers accept only integer lexemes that fit the width. Floats accept any
//! lexeme whose value is finite in the target. Decimals accept any lexeme,
//! rounding digits they cannot hold, and fail only on overflow. `Number`
//! slots keep the text as written.

use std::str::FromStr;

use jsonbind_core::{Erased, ScalarType};
use jsonbind_value::{Number, parse_decimal};
use rust_decimal::Decimal;

/// Why a number could not be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoerceError {
    /// The number does not fit the target type.
    Invalid,
    /// The slot is not of the scalar type it was described as.
    SlotMismatch,
}

/// Parses `raw` as the number type `scalar` and writes it into `slot`.
pub(crate) fn store_number(
    slot: &mut Erased,
    scalar: ScalarType,
    raw: &str,
) -> Result<(), CoerceError> {
    macro_rules! store {
        ($t:ty, $value:expr) => {{
            let value: $t = $value.ok_or(CoerceError::Invalid)?;
            *slot.downcast_mut::<$t>().ok_or(CoerceError::SlotMismatch)? = value;
            Ok(())
        }};
    }

    if scalar.is_integer() && raw.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
        return Err(CoerceError::Invalid);
    }

    match scalar {
        ScalarType::U8 => store!(u8, integer(raw)),
        ScalarType::U16 => store!(u16, integer(raw)),
        ScalarType::U32 => store!(u32, integer(raw)),
        ScalarType::U64 => store!(u64, integer(raw)),
        ScalarType::U128 => store!(u128, integer(raw)),
        ScalarType::USize => store!(usize, integer(raw)),
        ScalarType::I8 => store!(i8, integer(raw)),
        ScalarType::I16 => store!(i16, integer(raw)),
        ScalarType::I32 => store!(i32, integer(raw)),
        ScalarType::I64 => store!(i64, integer(raw)),
        ScalarType::I128 => store!(i128, integer(raw)),
        ScalarType::ISize => store!(isize, integer(raw)),
        ScalarType::F32 => store!(f32, raw.parse::<f32>().ok().filter(|f| f.is_finite())),
        ScalarType::F64 => store!(f64, raw.parse::<f64>().ok().filter(|f| f.is_finite())),
        ScalarType::Decimal => store!(Decimal, parse_decimal(raw)),
        ScalarType::Number => store!(Number, raw.parse::<Number>().ok()),
        _ => Err(CoerceError::Invalid),
    }
}

fn integer<T: FromStr>(raw: &str) -> Option<T> {
    // Unsigned parsers reject the sign even for zero.
    let raw = if raw == "-0" { "0" } else { raw };
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce<T: Default + 'static>(scalar: ScalarType, raw: &str) -> Result<T, CoerceError> {
        let mut slot = T::default();
        store_number(&mut slot, scalar, raw).map(|()| slot)
    }

    #[test]
    fn integers_must_fit() {
        assert_eq!(coerce::<i32>(ScalarType::I32, "123"), Ok(123));
        assert_eq!(coerce::<i32>(ScalarType::I32, "123.456"), Err(CoerceError::Invalid));
        assert_eq!(coerce::<i32>(ScalarType::I32, "1e2"), Err(CoerceError::Invalid));
        assert_eq!(coerce::<u8>(ScalarType::U8, "256"), Err(CoerceError::Invalid));
        assert_eq!(coerce::<u8>(ScalarType::U8, "-1"), Err(CoerceError::Invalid));
        assert_eq!(coerce::<u8>(ScalarType::U8, "-0"), Ok(0));
        assert_eq!(coerce::<i8>(ScalarType::I8, "-128"), Ok(-128));
        assert_eq!(
            coerce::<u128>(ScalarType::U128, "340282366920938463463374607431768211455"),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn floats_must_be_finite() {
        assert_eq!(coerce::<f64>(ScalarType::F64, "1.5e3"), Ok(1500.0));
        assert_eq!(coerce::<f64>(ScalarType::F64, "7"), Ok(7.0));
        assert_eq!(coerce::<f32>(ScalarType::F32, "1e39"), Err(CoerceError::Invalid));
        assert_eq!(coerce::<f64>(ScalarType::F64, "1e309"), Err(CoerceError::Invalid));
    }

    #[test]
    fn decimals_round_and_reject_only_overflow() {
        assert_eq!(
            coerce::<Decimal>(ScalarType::Decimal, "123.456"),
            Ok(Decimal::new(123456, 3))
        );
        assert_eq!(
            coerce::<Decimal>(ScalarType::Decimal, "2.5E-2"),
            Ok(Decimal::new(25, 3))
        );
        assert_eq!(
            coerce::<Decimal>(ScalarType::Decimal, "1e-30"),
            Ok(Decimal::ZERO)
        );
        let pi = coerce::<Decimal>(ScalarType::Decimal, "3.14159265358979323846264338327950288");
        assert_eq!(pi.map(|d| d.round_dp(10)), Ok(Decimal::new(31_415_926_536, 10)));
        assert_eq!(
            coerce::<Decimal>(ScalarType::Decimal, "1e40"),
            Err(CoerceError::Invalid)
        );
    }

    #[test]
    fn numbers_keep_their_text() {
        let number = coerce::<Number>(ScalarType::Number, "1.50").unwrap();
        assert_eq!(number.as_str(), "1.50");
    }

    #[test]
    fn mismatched_slots_are_reported() {
        assert_eq!(coerce::<i64>(ScalarType::I32, "1"), Err(CoerceError::SlotMismatch));
    }
}
