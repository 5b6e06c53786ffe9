// ============================================================================
// Decimal Provider
// ============================================================================

use super::numeric::DecimalProvider;
use crate::conversion::{Convertible, Repr};
use crate::domain::{GenerationMode, MidpointRounding, NumberFormat};
use crate::interfaces::{Arithmetic, ByteBuf, ByteCodec, Conversion, MathFunctions, RandomGen};
use crate::numeric::{NumericError, NumericResult};
use crate::random;
use num_traits::ToPrimitive;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

impl From<MidpointRounding> for RoundingStrategy {
    fn from(mode: MidpointRounding) -> Self {
        match mode {
            MidpointRounding::ToEven => RoundingStrategy::MidpointNearestEven,
            MidpointRounding::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            MidpointRounding::ToZero => RoundingStrategy::ToZero,
            MidpointRounding::ToNegativeInfinity => RoundingStrategy::ToNegativeInfinity,
            MidpointRounding::ToPositiveInfinity => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

impl Arithmetic<Decimal> for DecimalProvider {
    fn add(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        a.checked_add(b).ok_or(NumericError::Overflow)
    }

    fn sub(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        a.checked_sub(b).ok_or(NumericError::Overflow)
    }

    fn mul(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        a.checked_mul(b).ok_or(NumericError::Overflow)
    }

    fn div(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        a.checked_div(b).ok_or(NumericError::Overflow)
    }

    fn rem(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        a.checked_rem(b).ok_or(NumericError::Overflow)
    }

    fn neg(&self, a: Decimal) -> NumericResult<Decimal> {
        Ok(-a)
    }

    fn abs(&self, a: Decimal) -> NumericResult<Decimal> {
        Ok(a.abs())
    }
}

impl MathFunctions<Decimal> for DecimalProvider {
    fn to_f64(&self, x: Decimal) -> f64 {
        x.to_f64().unwrap_or(0.0)
    }

    fn from_f64(&self, x: f64) -> Decimal {
        Decimal::saturate_from_repr(Repr::Float(x))
    }

    fn floor(&self, x: Decimal) -> NumericResult<Decimal> {
        Ok(x.floor())
    }

    fn ceiling(&self, x: Decimal) -> NumericResult<Decimal> {
        Ok(x.ceil())
    }

    fn truncate(&self, x: Decimal) -> Decimal {
        x.trunc()
    }

    fn round(&self, x: Decimal, digits: i32, mode: MidpointRounding) -> NumericResult<Decimal> {
        let digits = u32::try_from(digits).map_err(|_| NumericError::ArgumentOutOfRange)?;
        Ok(x.round_dp_with_strategy(digits, mode.into()))
    }
}

impl Conversion<Decimal> for DecimalProvider {
    fn parse(&self, text: &str, format: &NumberFormat) -> NumericResult<Decimal> {
        let text = format.normalize(text)?;
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| NumericError::InvalidInput)
    }
}

impl RandomGen<Decimal> for DecimalProvider {
    fn next<R: Rng + ?Sized>(&self, rng: &mut R, mode: GenerationMode) -> Decimal {
        random::next_decimal(rng, mode)
    }

    fn next_in_range<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lo: Decimal,
        hi: Decimal,
        mode: GenerationMode,
    ) -> NumericResult<Decimal> {
        random::next_decimal_in_range(rng, lo, hi, mode)
    }
}

/// Encoded as the native 16-byte `serialize` layout
impl ByteCodec<Decimal> for DecimalProvider {
    const SIZE: usize = 16;

    fn to_bytes(&self, value: Decimal) -> ByteBuf {
        ByteBuf::from(value.serialize())
    }

    fn from_bytes(&self, bytes: &[u8]) -> NumericResult<Decimal> {
        let raw = bytes.try_into().map_err(|_| NumericError::InvalidInput)?;
        Ok(Decimal::deserialize(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Numeric;

    #[test]
    fn test_checked_arithmetic() {
        let p = Decimal::provider();
        assert_eq!(p.add(Decimal::MAX, Decimal::ONE), Err(NumericError::Overflow));
        assert_eq!(p.div(Decimal::ONE, Decimal::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(p.div(Decimal::ONE, Decimal::from(4)), Ok(Decimal::new(25, 2)));
        assert_eq!(p.rem(Decimal::new(75, 1), Decimal::TWO), Ok(Decimal::new(15, 1)));
    }

    #[test]
    fn test_round_strategies() {
        let p = Decimal::provider();
        let x = Decimal::new(2345, 3); // 2.345
        assert_eq!(p.round(x, 2, MidpointRounding::ToEven), Ok(Decimal::new(234, 2)));
        assert_eq!(p.round(x, 2, MidpointRounding::AwayFromZero), Ok(Decimal::new(235, 2)));
        assert_eq!(p.round(-x, 1, MidpointRounding::ToPositiveInfinity), Ok(Decimal::new(-23, 1)));
        assert_eq!(p.round(x, -1, MidpointRounding::ToEven), Err(NumericError::ArgumentOutOfRange));
        assert_eq!(p.floor(-x), Ok(Decimal::from(-3)));
    }

    #[test]
    fn test_math_goes_through_f64() {
        let p = Decimal::provider();
        assert_eq!(p.sqrt(Decimal::from(16)), Decimal::from(4));
        assert_eq!(p.sqrt(Decimal::from(-16)), Decimal::ZERO);
    }

    #[test]
    fn test_parse() {
        let p = Decimal::provider();
        assert_eq!(p.parse("1.234,56", &NumberFormat::european()), Ok(Decimal::new(123456, 2)));
        assert_eq!(p.parse("1.5e3", &NumberFormat::invariant()), Ok(Decimal::from(1500)));
        assert_eq!(p.parse("x", &NumberFormat::invariant()), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_bytes_round_trip() {
        let p = Decimal::provider();
        for value in [Decimal::MIN, Decimal::MAX, Decimal::new(-1, 28), Decimal::ZERO] {
            let bytes = p.to_bytes(value);
            assert_eq!(bytes.len(), 16);
            assert_eq!(p.from_bytes(&bytes), Ok(value));
        }
        assert_eq!(p.from_bytes(&[0u8; 8]), Err(NumericError::InvalidInput));
    }
}
