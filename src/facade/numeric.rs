// ============================================================================
// Numeric Trait
// Compile-time capability dispatch: each kind names its static provider
// ============================================================================

use crate::conversion::Convertible;
use crate::interfaces::{Arithmetic, ByteCodec, Conversion, MathFunctions, RandomGen};
use crate::numeric::{BitPattern, Fixed, UFixed};
use rust_decimal::Decimal;
use std::fmt;

/// A numeric kind usable by generic algorithms.
///
/// `N::provider()` resolves to the single stateless provider for `N` at
/// monomorphization time; nothing is looked up at runtime.
///
/// # Example
/// ```
/// use numeric_toolkit::facade::Numeric;
/// use numeric_toolkit::interfaces::Arithmetic;
///
/// fn double<N: Numeric>(x: N) -> N {
///     N::provider().add(x, x).unwrap_or(N::MAX)
/// }
///
/// assert_eq!(double(21u8), 42);
/// assert_eq!(double(1.25f64), 2.5);
/// ```
pub trait Numeric:
    Convertible + BitPattern + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    /// Smallest positive increment
    const EPSILON: Self;

    type Provider: Arithmetic<Self>
        + MathFunctions<Self>
        + Conversion<Self>
        + RandomGen<Self>
        + ByteCodec<Self>
        + 'static;

    fn provider() -> &'static Self::Provider;
}

macro_rules! numeric_kind {
    (
        $t:ty, $provider:ident, $instance:ident,
        min: $min:expr, max: $max:expr, zero: $zero:expr, one: $one:expr, epsilon: $eps:expr
    ) => {
        #[doc = concat!("Capability provider for `", stringify!($t), "`")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $provider;

        static $instance: $provider = $provider;

        impl Numeric for $t {
            const MIN: Self = $min;
            const MAX: Self = $max;
            const ZERO: Self = $zero;
            const ONE: Self = $one;
            const EPSILON: Self = $eps;

            type Provider = $provider;

            #[inline]
            fn provider() -> &'static $provider {
                &$instance
            }
        }
    };
}

macro_rules! integer_kind {
    ($($t:ty => $provider:ident, $instance:ident;)*) => {
        $(
            numeric_kind!(
                $t, $provider, $instance,
                min: <$t>::MIN, max: <$t>::MAX, zero: 0, one: 1, epsilon: 1
            );
        )*
    };
}

integer_kind! {
    i8 => I8Provider, I8_PROVIDER;
    u8 => U8Provider, U8_PROVIDER;
    i16 => I16Provider, I16_PROVIDER;
    u16 => U16Provider, U16_PROVIDER;
    i32 => I32Provider, I32_PROVIDER;
    u32 => U32Provider, U32_PROVIDER;
    i64 => I64Provider, I64_PROVIDER;
    u64 => U64Provider, U64_PROVIDER;
}

numeric_kind!(
    f32, F32Provider, F32_PROVIDER,
    min: f32::MIN, max: f32::MAX, zero: 0.0, one: 1.0, epsilon: f32::from_bits(1)
);

numeric_kind!(
    f64, F64Provider, F64_PROVIDER,
    min: f64::MIN, max: f64::MAX, zero: 0.0, one: 1.0, epsilon: f64::from_bits(1)
);

numeric_kind!(
    Decimal, DecimalProvider, DECIMAL_PROVIDER,
    min: Decimal::MIN, max: Decimal::MAX, zero: Decimal::ZERO, one: Decimal::ONE,
    epsilon: Decimal::from_parts(1, 0, 0, false, 28)
);

numeric_kind!(
    Fixed, FixedProvider, FIXED_PROVIDER,
    min: Fixed::MIN, max: Fixed::MAX, zero: Fixed::ZERO, one: Fixed::ONE, epsilon: Fixed::EPSILON
);

numeric_kind!(
    UFixed, UFixedProvider, UFIXED_PROVIDER,
    min: UFixed::MIN, max: UFixed::MAX, zero: UFixed::ZERO, one: UFixed::ONE,
    epsilon: UFixed::EPSILON
);
