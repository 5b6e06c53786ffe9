// ============================================================================
// Conversion Policy
// Move values between numeric domains under Default/Clamp/Cast/CastClamp
// ============================================================================

use crate::domain::{ConversionMode, NumericKind};
use crate::numeric::{Fixed, NumericError, NumericResult, UFixed};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Fixed-point scale as i128
const FIXED_SCALE: i128 = 1_000_000;

// ============================================================================
// Intermediate Representation
// ============================================================================

/// Common carrier every kind lowers into before lifting into a destination.
///
/// Integers (up to 64 bits) fit `Int` exactly, floats widen to f64 exactly,
/// and Decimal/fixed-point values keep their digits in `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repr {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Repr {
    /// Whether the carried value is below zero
    pub fn is_negative(self) -> bool {
        match self {
            Repr::Int(i) => i < 0,
            Repr::Float(f) => f < 0.0,
            Repr::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
        }
    }

    /// Whether the carried value is exactly zero
    pub fn is_zero(self) -> bool {
        match self {
            Repr::Int(i) => i == 0,
            Repr::Float(f) => f == 0.0,
            Repr::Decimal(d) => d.is_zero(),
        }
    }

    /// Whether the carried value is NaN
    pub fn is_nan(self) -> bool {
        matches!(self, Repr::Float(f) if f.is_nan())
    }
}

/// Error for a value that missed the destination range on the given side
#[inline]
fn range_error(negative: bool) -> NumericError {
    if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

/// Split a decimal into a scaled integer (six fractional digits, truncated).
///
/// The integral part of any Decimal times 10^6 stays below 2^117, so the
/// result never overflows i128.
fn decimal_scaled(d: Decimal) -> i128 {
    let integral = d.trunc().mantissa();
    let fractional = (d.fract() * Decimal::from(FIXED_SCALE as i64)).trunc().mantissa();
    integral * FIXED_SCALE + fractional
}

// ============================================================================
// Convertible
// ============================================================================

/// A numeric kind that can take part in policy conversion.
pub trait Convertible: Copy {
    /// Runtime descriptor
    const KIND: NumericKind;

    /// Lower into the common carrier.
    fn to_repr(self) -> Repr;

    /// Lift under `ConversionMode::Default`.
    fn try_from_repr(repr: Repr) -> NumericResult<Self>;

    /// Lift under `ConversionMode::Cast`: truncate toward zero and wrap.
    fn wrap_from_repr(repr: Repr) -> NumericResult<Self>;

    /// Lift under `ConversionMode::Clamp`: saturate, NaN becomes zero.
    fn saturate_from_repr(repr: Repr) -> Self;
}

macro_rules! int_convertible {
    ($t:ty, $kind:expr) => {
        impl Convertible for $t {
            const KIND: NumericKind = $kind;

            #[inline]
            fn to_repr(self) -> Repr {
                Repr::Int(i128::from(self))
            }

            fn try_from_repr(repr: Repr) -> NumericResult<Self> {
                match repr {
                    Repr::Int(i) => <$t>::try_from(i).map_err(|_| range_error(i < 0)),
                    // NumCast truncates and range-checks without rounding the bounds
                    Repr::Float(f) => {
                        <$t as num_traits::NumCast>::from(f).ok_or(range_error(f < 0.0))
                    },
                    Repr::Decimal(d) => {
                        let i = d.trunc().mantissa();
                        <$t>::try_from(i).map_err(|_| range_error(i < 0))
                    },
                }
            }

            fn wrap_from_repr(repr: Repr) -> NumericResult<Self> {
                Ok(match repr {
                    Repr::Int(i) => i as $t,
                    // f64 -> i128 saturates (NaN -> 0), then narrows by wrapping
                    Repr::Float(f) => (f as i128) as $t,
                    Repr::Decimal(d) => d.trunc().mantissa() as $t,
                })
            }

            fn saturate_from_repr(repr: Repr) -> Self {
                let clamp = |i: i128| i.clamp(i128::from(<$t>::MIN), i128::from(<$t>::MAX)) as $t;
                match repr {
                    Repr::Int(i) => clamp(i),
                    // float -> int `as` truncates, saturates, and maps NaN to 0
                    Repr::Float(f) => f as $t,
                    Repr::Decimal(d) => clamp(d.trunc().mantissa()),
                }
            }
        }
    };
}

int_convertible!(i8, NumericKind::Int8);
int_convertible!(u8, NumericKind::UInt8);
int_convertible!(i16, NumericKind::Int16);
int_convertible!(u16, NumericKind::UInt16);
int_convertible!(i32, NumericKind::Int32);
int_convertible!(u32, NumericKind::UInt32);
int_convertible!(i64, NumericKind::Int64);
int_convertible!(u64, NumericKind::UInt64);

impl Convertible for f64 {
    const KIND: NumericKind = NumericKind::Float64;

    #[inline]
    fn to_repr(self) -> Repr {
        Repr::Float(self)
    }

    fn try_from_repr(repr: Repr) -> NumericResult<Self> {
        match repr {
            Repr::Int(i) => Ok(i as f64),
            Repr::Float(f) => Ok(f),
            Repr::Decimal(d) => d.to_f64().ok_or(range_error(d.is_sign_negative())),
        }
    }

    fn wrap_from_repr(repr: Repr) -> NumericResult<Self> {
        Self::try_from_repr(repr)
    }

    fn saturate_from_repr(repr: Repr) -> Self {
        match repr {
            Repr::Float(f) if f.is_nan() => 0.0,
            Repr::Float(f) => f.clamp(f64::MIN, f64::MAX),
            other => Self::try_from_repr(other).unwrap_or(0.0),
        }
    }
}

impl Convertible for f32 {
    const KIND: NumericKind = NumericKind::Float32;

    #[inline]
    fn to_repr(self) -> Repr {
        Repr::Float(f64::from(self))
    }

    fn try_from_repr(repr: Repr) -> NumericResult<Self> {
        let wide = f64::try_from_repr(repr)?;
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            return Err(range_error(wide < 0.0));
        }
        Ok(wide as f32)
    }

    fn wrap_from_repr(repr: Repr) -> NumericResult<Self> {
        // Out-of-range finite values become infinities
        f64::wrap_from_repr(repr).map(|wide| wide as f32)
    }

    fn saturate_from_repr(repr: Repr) -> Self {
        let wide = f64::saturate_from_repr(repr);
        wide.clamp(f64::from(f32::MIN), f64::from(f32::MAX)) as f32
    }
}

impl Convertible for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;

    #[inline]
    fn to_repr(self) -> Repr {
        Repr::Decimal(self)
    }

    fn try_from_repr(repr: Repr) -> NumericResult<Self> {
        match repr {
            Repr::Int(i) => Decimal::from_i128(i).ok_or(range_error(i < 0)),
            // from_f64 rejects NaN, infinities and magnitudes above 2^96
            Repr::Float(f) => Decimal::from_f64(f).ok_or(range_error(f < 0.0)),
            Repr::Decimal(d) => Ok(d),
        }
    }

    fn wrap_from_repr(repr: Repr) -> NumericResult<Self> {
        // Decimal has no width to wrap at
        Self::try_from_repr(repr)
    }

    fn saturate_from_repr(repr: Repr) -> Self {
        if repr.is_nan() {
            return Decimal::ZERO;
        }
        Self::try_from_repr(repr).unwrap_or(if repr.is_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    }
}

macro_rules! fixed_convertible {
    ($t:ty, $kind:expr) => {
        impl Convertible for $t {
            const KIND: NumericKind = $kind;

            #[inline]
            fn to_repr(self) -> Repr {
                Repr::Decimal(self.to_decimal())
            }

            fn try_from_repr(repr: Repr) -> NumericResult<Self> {
                match repr {
                    Repr::Int(i) => <$t>::from_wide(i * FIXED_SCALE),
                    // float -> fixed saturates, matching fixed-point parsing
                    Repr::Float(f) => Ok(<$t>::from_f64_saturating(f)),
                    Repr::Decimal(d) => <$t>::from_wide(decimal_scaled(d)),
                }
            }

            fn wrap_from_repr(repr: Repr) -> NumericResult<Self> {
                Ok(match repr {
                    Repr::Int(i) => <$t>::wrap_wide(i * FIXED_SCALE),
                    Repr::Float(f) => <$t>::wrap_wide((f * FIXED_SCALE as f64) as i128),
                    Repr::Decimal(d) => <$t>::wrap_wide(decimal_scaled(d)),
                })
            }

            fn saturate_from_repr(repr: Repr) -> Self {
                match repr {
                    Repr::Int(i) => <$t>::saturate_wide(i * FIXED_SCALE),
                    Repr::Float(f) => <$t>::from_f64_saturating(f),
                    Repr::Decimal(d) => <$t>::saturate_wide(decimal_scaled(d)),
                }
            }
        }
    };
}

fixed_convertible!(Fixed, NumericKind::Fixed);
fixed_convertible!(UFixed, NumericKind::UFixed);

// ============================================================================
// Entry Point
// ============================================================================

/// Convert `value` into kind `D` under `mode`.
///
/// # Errors
/// - `Default`: `Overflow`/`Underflow` when the value misses the destination
///   range, including NaN or infinities into a non-float kind
/// - `Cast`: only when the destination cannot wrap (Decimal)
/// - `Clamp`/`CastClamp`: never
pub fn convert<S: Convertible, D: Convertible>(value: S, mode: ConversionMode) -> NumericResult<D> {
    let repr = value.to_repr();

    let result = match mode {
        ConversionMode::Default => D::try_from_repr(repr),
        ConversionMode::Cast => D::wrap_from_repr(repr),
        // The truncating cast of a pre-clamped value equals the saturated value
        ConversionMode::Clamp | ConversionMode::CastClamp => Ok(D::saturate_from_repr(repr)),
    };

    if let Err(err) = result {
        tracing::trace!(
            src = S::KIND.name(),
            dst = D::KIND.name(),
            ?mode,
            %err,
            "conversion left destination domain"
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_byte() {
        assert_eq!(convert::<i32, u8>(300, ConversionMode::Clamp), Ok(255));
        assert_eq!(convert::<i32, u8>(-5, ConversionMode::Clamp), Ok(0));
        assert_eq!(convert::<i32, u8>(200, ConversionMode::Clamp), Ok(200));
    }

    #[test]
    fn test_default_overflow() {
        assert_eq!(convert::<i32, u8>(300, ConversionMode::Default), Err(NumericError::Overflow));
        assert_eq!(convert::<i32, u8>(-5, ConversionMode::Default), Err(NumericError::Underflow));
        assert_eq!(convert::<i64, i32>(42, ConversionMode::Default), Ok(42));
        assert_eq!(convert::<f64, i32>(-7.9, ConversionMode::Default), Ok(-7));
        assert_eq!(convert::<f64, u64>(-0.5, ConversionMode::Default), Ok(0));
        assert_eq!(
            convert::<f64, i32>(f64::NAN, ConversionMode::Default),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            convert::<f64, i64>(9.3e18, ConversionMode::Default),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_cast_wraps() {
        assert_eq!(convert::<i32, u8>(300, ConversionMode::Cast), Ok(44));
        assert_eq!(convert::<i32, u8>(-1, ConversionMode::Cast), Ok(255));
        assert_eq!(convert::<u64, i64>(u64::MAX, ConversionMode::Cast), Ok(-1));
        assert_eq!(convert::<f64, i8>(-1.9, ConversionMode::Cast), Ok(-1));
        assert_eq!(convert::<f64, u8>(257.7, ConversionMode::Cast), Ok(1));
    }

    #[test]
    fn test_cast_into_decimal_can_overflow() {
        assert_eq!(
            convert::<f64, Decimal>(1e300, ConversionMode::Cast),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            convert::<f64, Decimal>(2.5, ConversionMode::Cast),
            Ok(Decimal::new(25, 1))
        );
    }

    #[test]
    fn test_nan_clamps_to_zero() {
        assert_eq!(convert::<f64, i8>(f64::NAN, ConversionMode::Clamp), Ok(0));
        assert_eq!(convert::<f64, u64>(f64::NAN, ConversionMode::Clamp), Ok(0));
        assert_eq!(convert::<f32, f32>(f32::NAN, ConversionMode::Clamp), Ok(0.0));
        assert_eq!(
            convert::<f64, Decimal>(f64::NAN, ConversionMode::CastClamp),
            Ok(Decimal::ZERO)
        );
        assert_eq!(convert::<f64, Fixed>(f64::NAN, ConversionMode::Clamp), Ok(Fixed::ZERO));
    }

    #[test]
    fn test_float_narrowing() {
        assert_eq!(
            convert::<f64, f32>(1e300, ConversionMode::Default),
            Err(NumericError::Overflow)
        );
        assert_eq!(convert::<f64, f32>(1e300, ConversionMode::Clamp), Ok(f32::MAX));
        assert_eq!(
            convert::<f64, f32>(-1e300, ConversionMode::Cast),
            Ok(f32::NEG_INFINITY)
        );
        assert_eq!(convert::<f64, f32>(f64::INFINITY, ConversionMode::Clamp), Ok(f32::MAX));
        assert!(convert::<f64, f32>(f64::INFINITY, ConversionMode::Default)
            .unwrap()
            .is_infinite());
    }

    #[test]
    fn test_fixed_conversions() {
        let x: Fixed = "-12.75".parse().unwrap();
        assert_eq!(convert::<Fixed, i32>(x, ConversionMode::Default), Ok(-12));
        assert_eq!(convert::<Fixed, u8>(x, ConversionMode::Clamp), Ok(0));
        assert_eq!(convert::<Fixed, f64>(x, ConversionMode::Default), Ok(-12.75));
        assert_eq!(
            convert::<Fixed, Decimal>(x, ConversionMode::Default),
            Ok(Decimal::new(-1275, 2))
        );
        assert_eq!(
            convert::<Fixed, UFixed>(x, ConversionMode::Default),
            Err(NumericError::Underflow)
        );
        assert_eq!(convert::<Fixed, UFixed>(x, ConversionMode::Clamp), Ok(UFixed::ZERO));
    }

    #[test]
    fn test_into_fixed() {
        assert_eq!(convert::<i32, Fixed>(7, ConversionMode::Default), Ok(Fixed::from_raw(7_000_000)));
        assert_eq!(
            convert::<u64, Fixed>(u64::MAX, ConversionMode::Default),
            Err(NumericError::Overflow)
        );
        assert_eq!(convert::<u64, Fixed>(u64::MAX, ConversionMode::Clamp), Ok(Fixed::MAX));
        // float -> fixed saturates even under Default
        assert_eq!(convert::<f64, Fixed>(1e300, ConversionMode::Default), Ok(Fixed::MAX));
        assert_eq!(
            convert::<Decimal, UFixed>(Decimal::new(123_456_789, 8), ConversionMode::Default),
            Ok(UFixed::from_raw(1_234_567))
        );
    }

    #[test]
    fn test_decimal_saturation() {
        assert_eq!(convert::<f64, Decimal>(1e300, ConversionMode::Clamp), Ok(Decimal::MAX));
        assert_eq!(convert::<f64, Decimal>(-1e300, ConversionMode::Clamp), Ok(Decimal::MIN));
        assert_eq!(convert::<Decimal, i8>(Decimal::MAX, ConversionMode::Clamp), Ok(i8::MAX));
        assert_eq!(
            convert::<Decimal, i64>(Decimal::MIN, ConversionMode::Default),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_decimal_scaled_split() {
        assert_eq!(decimal_scaled(Decimal::new(-15, 1)), -1_500_000);
        assert_eq!(decimal_scaled(Decimal::new(1, 7)), 0);
        assert_eq!(decimal_scaled(Decimal::MAX), 79_228_162_514_264_337_593_543_950_335 * FIXED_SCALE);
    }

    #[test]
    fn test_repr_sign() {
        assert!(Repr::Decimal(Decimal::new(-1, 0)).is_negative());
        assert!(!Repr::Float(-0.0).is_negative());
        assert!(Repr::Float(f64::NAN).is_nan());
        assert!(Repr::Int(0).is_zero());
    }
}
