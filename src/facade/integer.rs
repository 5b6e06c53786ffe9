// ============================================================================
// Integer Providers
// ============================================================================

use super::numeric::{
    I16Provider, I32Provider, I64Provider, I8Provider, U16Provider, U32Provider, U64Provider,
    U8Provider,
};
use crate::conversion::{Convertible, Repr};
use crate::domain::{GenerationMode, MidpointRounding, NumberFormat};
use crate::interfaces::{Arithmetic, ByteBuf, ByteCodec, Conversion, MathFunctions, RandomGen};
use crate::numeric::{NumericError, NumericResult};
use crate::random;
use rand::Rng;
use std::num::IntErrorKind;

macro_rules! integer_provider {
    ($provider:ident, $t:ty, abs: $abs:expr) => {
        impl Arithmetic<$t> for $provider {
            #[inline]
            fn add(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a.wrapping_add(b))
            }

            #[inline]
            fn sub(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a.wrapping_sub(b))
            }

            #[inline]
            fn mul(&self, a: $t, b: $t) -> NumericResult<$t> {
                Ok(a.wrapping_mul(b))
            }

            fn div(&self, a: $t, b: $t) -> NumericResult<$t> {
                if b == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(a.wrapping_div(b))
            }

            fn rem(&self, a: $t, b: $t) -> NumericResult<$t> {
                if b == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(a.wrapping_rem(b))
            }

            #[inline]
            fn neg(&self, a: $t) -> NumericResult<$t> {
                Ok(a.wrapping_neg())
            }

            #[inline]
            fn abs(&self, a: $t) -> NumericResult<$t> {
                ($abs)(a).ok_or(NumericError::Overflow)
            }
        }

        impl MathFunctions<$t> for $provider {
            #[inline]
            fn to_f64(&self, x: $t) -> f64 {
                x as f64
            }

            #[inline]
            fn from_f64(&self, x: f64) -> $t {
                <$t>::saturate_from_repr(Repr::Float(x))
            }

            fn floor(&self, x: $t) -> NumericResult<$t> {
                Ok(x)
            }

            fn ceiling(&self, x: $t) -> NumericResult<$t> {
                Ok(x)
            }

            fn truncate(&self, x: $t) -> $t {
                x
            }

            fn round(&self, x: $t, digits: i32, _mode: MidpointRounding) -> NumericResult<$t> {
                if digits < 0 {
                    return Err(NumericError::ArgumentOutOfRange);
                }
                Ok(x)
            }
        }

        impl Conversion<$t> for $provider {
            fn parse(&self, text: &str, format: &NumberFormat) -> NumericResult<$t> {
                format
                    .normalize(text)?
                    .parse::<$t>()
                    .map_err(|err| match err.kind() {
                        IntErrorKind::PosOverflow => NumericError::Overflow,
                        IntErrorKind::NegOverflow => NumericError::Underflow,
                        _ => NumericError::InvalidInput,
                    })
            }
        }

        impl RandomGen<$t> for $provider {
            fn next<R: Rng + ?Sized>(&self, rng: &mut R, mode: GenerationMode) -> $t {
                random::next_int(rng, mode)
            }

            fn next_in_range<R: Rng + ?Sized>(
                &self,
                rng: &mut R,
                lo: $t,
                hi: $t,
                mode: GenerationMode,
            ) -> NumericResult<$t> {
                random::next_in_range(rng, lo, hi, mode)
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

integer_provider!(I8Provider, i8, abs: i8::checked_abs);
integer_provider!(U8Provider, u8, abs: Some::<u8>);
integer_provider!(I16Provider, i16, abs: i16::checked_abs);
integer_provider!(U16Provider, u16, abs: Some::<u16>);
integer_provider!(I32Provider, i32, abs: i32::checked_abs);
integer_provider!(U32Provider, u32, abs: Some::<u32>);
integer_provider!(I64Provider, i64, abs: i64::checked_abs);
integer_provider!(U64Provider, u64, abs: Some::<u64>);
