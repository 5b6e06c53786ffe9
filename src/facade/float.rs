// ============================================================================
// Float Providers
// IEEE 754 semantics: arithmetic never fails, NaN and infinities propagate
// ============================================================================

use super::numeric::{F32Provider, F64Provider};
use crate::domain::{GenerationMode, MidpointRounding, NumberFormat};
use crate::interfaces::{Arithmetic, ByteBuf, ByteCodec, Conversion, MathFunctions, RandomGen};
use crate::numeric::{NumericError, NumericResult};
use crate::random;
use rand::Rng;

/// Beyond this many digits an f64 has no fractional precision left to round
const MAX_ROUND_DIGITS: i32 = 15;

/// Round `x` to `digits` fractional digits under `mode`.
pub(crate) fn round_float(x: f64, digits: i32, mode: MidpointRounding) -> NumericResult<f64> {
    if digits < 0 {
        return Err(NumericError::ArgumentOutOfRange);
    }
    if !x.is_finite() || digits > MAX_ROUND_DIGITS {
        return Ok(x);
    }

    let factor = 10f64.powi(digits);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return Ok(x);
    }

    let rounded = match mode {
        MidpointRounding::ToEven => scaled.round_ties_even(),
        MidpointRounding::AwayFromZero => scaled.round(),
        MidpointRounding::ToZero => scaled.trunc(),
        MidpointRounding::ToNegativeInfinity => scaled.floor(),
        MidpointRounding::ToPositiveInfinity => scaled.ceil(),
    };

    Ok(rounded / factor)
}

macro_rules! float_provider {
    ($provider:ident, $t:ty, next: $next:path, next_in_range: $next_in_range:path) => {
        impl Arithmetic<$t> for $provider {
            #[inline]
            fn add(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a + b)
            }

            #[inline]
            fn sub(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a - b)
            }

            #[inline]
            fn mul(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a * b)
            }

            #[inline]
            fn div(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a / b)
            }

            #[inline]
            fn rem(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a % b)
            }

            #[inline]
            fn neg(&self, a: $t) -> NumericResult<$t> {
                Ok(-a)
            }

            #[inline]
            fn abs(&self, a: $t) -> NumericResult<$t> {
                Ok(a.abs())
            }
        }

        impl MathFunctions<$t> for $provider {
            #[inline]
            fn to_f64(&self, x: $t) -> f64 {
                f64::from(x)
            }

            #[inline]
            fn from_f64(&self, x: f64) -> $t {
                x as $t
            }

            fn floor(&self, x: $t) -> NumericResult<$t> {
                Ok(x.floor())
            }

            fn ceiling(&self, x: $t) -> NumericResult<$t> {
                Ok(x.ceil())
            }

            fn truncate(&self, x: $t) -> $t {
                x.trunc()
            }

            fn round(&self, x: $t, digits: i32, mode: MidpointRounding) -> NumericResult<$t> {
                round_float(f64::from(x), digits, mode).map(|r| r as $t)
            }
        }

        impl Conversion<$t> for $provider {
            fn parse(&self, text: &str, format: &NumberFormat) -> NumericResult<$t> {
                format
                    .normalize(text)?
                    .parse::<$t>()
                    .map_err(|_| NumericError::InvalidInput)
            }
        }

        impl RandomGen<$t> for $provider {
            fn next<R: Rng + ?Sized>(&self, rng: &mut R, mode: GenerationMode) -> $t {
                $next(rng, mode)
            }

            fn next_in_range<R: Rng + ?Sized>(
                &self,
                rng: &mut R,
                lo: $t,
                hi: $t,
                mode: GenerationMode,
            ) -> NumericResult<$t> {
                $next_in_range(rng, lo, hi, mode)
            }
        }

        impl ByteCodec<$t> for $provider {
            const SIZE: usize = std::mem::size_of::<$t>();

            fn to_bytes(&self, value: $t) -> ByteBuf {
                value.to_le_bytes().into_iter().collect()
            }

            fn from_bytes(&self, bytes: &[u8]) -> NumericResult<$t> {
                let raw = bytes.try_into().map_err(|_| NumericError::InvalidInput)?;
                Ok(<$t>::from_le_bytes(raw))
            }
        }
    };
}

float_provider!(F32Provider, f32, next: random::next_f32, next_in_range: random::next_f32_in_range);
float_provider!(F64Provider, f64, next: random::next_f64, next_in_range: random::next_f64_in_range);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Numeric;

    #[test]
    fn test_ieee_arithmetic_never_fails() {
        let p = f64::provider();
        assert_eq!(p.div(1.0, 0.0), Ok(f64::INFINITY));
        assert!(p.sub(f64::INFINITY, f64::INFINITY).unwrap().is_nan());
        assert_eq!(p.rem(7.5, 2.0), Ok(1.5));
        assert_eq!(f32::provider().abs(-0.5), Ok(0.5));
    }

    #[test]
    fn test_math_keeps_nan() {
        let p = f64::provider();
        assert!(p.sqrt(-1.0).is_nan());
        assert!(f32::provider().ln(-1.0).is_nan());
        assert_eq!(p.atan2(0.0, 1.0), 0.0);
        assert_eq!(p.truncate(-2.7), -2.0);
        assert_eq!(p.floor(-2.5), Ok(-3.0));
        assert_eq!(p.ceiling(2.1), Ok(3.0));
    }

    #[test]
    fn test_round_modes() {
        assert_eq!(round_float(2.5, 0, MidpointRounding::ToEven), Ok(2.0));
        assert_eq!(round_float(3.5, 0, MidpointRounding::ToEven), Ok(4.0));
        assert_eq!(round_float(2.5, 0, MidpointRounding::AwayFromZero), Ok(3.0));
        assert_eq!(round_float(-2.5, 0, MidpointRounding::AwayFromZero), Ok(-3.0));
        assert_eq!(round_float(-2.5, 0, MidpointRounding::ToZero), Ok(-2.0));
        assert_eq!(round_float(1.25, 1, MidpointRounding::ToNegativeInfinity), Ok(1.2));
        assert_eq!(round_float(1.25, 1, MidpointRounding::ToPositiveInfinity), Ok(1.3));
        assert_eq!(round_float(1.0, -1, MidpointRounding::ToEven), Err(NumericError::ArgumentOutOfRange));
        assert!(round_float(f64::NAN, 2, MidpointRounding::ToEven).unwrap().is_nan());
        assert_eq!(round_float(f64::MAX, 10, MidpointRounding::ToEven), Ok(f64::MAX));
    }

    #[test]
    fn test_parse_formats() {
        let p = f64::provider();
        assert_eq!(p.parse("1.234,5", &NumberFormat::european()), Ok(1234.5));
        assert_eq!(p.parse("-0.25", &NumberFormat::invariant()), Ok(-0.25));
        assert_eq!(p.parse("abc", &NumberFormat::invariant()), Err(NumericError::InvalidInput));
        assert!(p.parse("NaN", &NumberFormat::invariant()).unwrap().is_nan());
    }

    #[test]
    fn test_bit_patterns_survive_bytes() {
        let p = f32::provider();
        let nan = f32::from_bits(0x7FC0_0001);
        let back = p.from_bytes(&p.to_bytes(nan)).unwrap();
        assert_eq!(back.to_bits(), nan.to_bits());
        assert_eq!(p.to_bytes(1.0).as_slice(), &1.0f32.to_le_bytes());
    }
}
