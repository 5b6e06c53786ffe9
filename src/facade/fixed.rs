// ============================================================================
// Fixed-Point Providers
// ============================================================================

use super::numeric::{FixedProvider, UFixedProvider};
use crate::domain::{GenerationMode, MidpointRounding, NumberFormat};
use crate::interfaces::{Arithmetic, ByteBuf, ByteCodec, Conversion, MathFunctions, RandomGen};
use crate::numeric::{Fixed, NumericError, NumericResult, UFixed};
use crate::random;
use rand::Rng;

macro_rules! fixed_provider {
    (
        $provider:ident, $t:ty, $raw:ty,
        next: $next:path, next_in_range: $next_in_range:path
    ) => {
        /// Add, subtract, multiply and negate wrap; divide and remainder are checked
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

            fn div(&self, a: $t, b: $t) -> NumericResult<$t> {
                a.checked_div(b)
            }

            fn rem(&self, a: $t, b: $t) -> NumericResult<$t> {
                a.checked_rem(b)
            }

            #[inline]
            fn neg(&self, a: $t) -> NumericResult<$t> {
                Ok(-a)
            }

            fn abs(&self, a: $t) -> NumericResult<$t> {
                a.abs()
            }
        }

        impl MathFunctions<$t> for $provider {
            #[inline]
            fn to_f64(&self, x: $t) -> f64 {
                x.to_f64()
            }

            #[inline]
            fn from_f64(&self, x: f64) -> $t {
                <$t>::from_f64_saturating(x)
            }

            fn floor(&self, x: $t) -> NumericResult<$t> {
                x.floor()
            }

            fn ceiling(&self, x: $t) -> NumericResult<$t> {
                x.ceiling()
            }

            fn truncate(&self, x: $t) -> $t {
                x.truncate()
            }

            fn round(&self, x: $t, digits: i32, mode: MidpointRounding) -> NumericResult<$t> {
                x.round(digits, mode)
            }
        }

        impl Conversion<$t> for $provider {
            fn parse(&self, text: &str, format: &NumberFormat) -> NumericResult<$t> {
                <$t>::parse_with(text, format)
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

        /// Encoded as the little-endian scaled integer
        impl ByteCodec<$t> for $provider {
            const SIZE: usize = std::mem::size_of::<$raw>();

            fn to_bytes(&self, value: $t) -> ByteBuf {
                value.raw_value().to_le_bytes().into_iter().collect()
            }

            fn from_bytes(&self, bytes: &[u8]) -> NumericResult<$t> {
                let raw = bytes.try_into().map_err(|_| NumericError::InvalidInput)?;
                Ok(<$t>::from_raw(<$raw>::from_le_bytes(raw)))
            }
        }
    };
}

fixed_provider!(
    FixedProvider, Fixed, i64,
    next: random::next_fixed, next_in_range: random::next_fixed_in_range
);

fixed_provider!(
    UFixedProvider, UFixed, u64,
    next: random::next_ufixed, next_in_range: random::next_ufixed_in_range
);
