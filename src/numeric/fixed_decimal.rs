// ============================================================================
// Fixed-Point Decimal
// Scaled-integer arithmetic with six implied fractional digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::{MidpointRounding, NumberFormat};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Scale Constants
// ============================================================================

/// Number of implied fractional digits
pub const DECIMALS: u32 = 6;

/// The scale factor (10^DECIMALS)
pub const SCALE: i128 = pow10(DECIMALS);

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Round the quotient `q` of a truncating division given its remainder `r`
/// and the divisor `unit`.
fn round_quotient(q: i128, r: i128, unit: i128, mode: MidpointRounding) -> i128 {
    if r == 0 {
        return q;
    }

    let away = r.signum();
    let twice = r.abs() * 2;

    match mode {
        MidpointRounding::ToZero => q,
        MidpointRounding::ToNegativeInfinity => {
            if r < 0 {
                q - 1
            } else {
                q
            }
        },
        MidpointRounding::ToPositiveInfinity => {
            if r > 0 {
                q + 1
            } else {
                q
            }
        },
        MidpointRounding::AwayFromZero => {
            if twice >= unit {
                q + away
            } else {
                q
            }
        },
        MidpointRounding::ToEven => {
            if twice > unit || (twice == unit && q % 2 != 0) {
                q + away
            } else {
                q
            }
        },
    }
}

/// Parse the canonical `[+-]digits[.digits]` form into a scaled i128.
///
/// The fractional run is padded or truncated to exactly six digits and glued
/// onto the integral run. Magnitudes beyond i128 saturate by sign.
fn parse_scaled(text: &str) -> NumericResult<i128> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(NumericError::InvalidInput);
    }
    if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidInput);
    }

    let frac_run = frac_str
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(DECIMALS as usize);

    let magnitude = int_str
        .bytes()
        .chain(frac_run)
        .try_fold(0i128, |acc, b| {
            acc.checked_mul(10)?.checked_add(i128::from(b - b'0'))
        });

    Ok(match (magnitude, negative) {
        (Some(m), false) => m,
        (Some(m), true) => -m,
        (None, false) => i128::MAX,
        (None, true) => i128::MIN,
    })
}

// ============================================================================
// Fixed-Point Types
// ============================================================================

macro_rules! fixed_point {
    ($(#[$meta:meta])* $name:ident, $raw:ty, $wide:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        #[repr(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Number of implied fractional digits
            pub const DECIMALS: u32 = DECIMALS;

            /// The scale factor (10^DECIMALS)
            pub const SCALE: $raw = SCALE as $raw;

            /// Zero value
            pub const ZERO: Self = Self(0);

            /// One (1.0)
            pub const ONE: Self = Self(SCALE as $raw);

            /// Maximum representable value
            pub const MAX: Self = Self(<$raw>::MAX);

            /// Minimum representable value
            pub const MIN: Self = Self(<$raw>::MIN);

            /// Smallest positive increment (0.000001)
            pub const EPSILON: Self = Self(1);

            // ================================================================
            // Construction
            // ================================================================

            /// Create from raw internal representation.
            #[inline]
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// Create from an integer value.
            ///
            /// # Errors
            /// Returns `Overflow` if the value is too large to represent.
            #[inline]
            pub fn from_integer(value: $raw) -> NumericResult<Self> {
                Self::from_wide(i128::from(value) * SCALE)
            }

            /// Create from integer and fractional parts.
            ///
            /// `fraction` is the magnitude of the fractional digits (< SCALE)
            /// and takes the sign of `integer`.
            pub fn from_parts(integer: $raw, fraction: u64) -> NumericResult<Self> {
                if i128::from(fraction) >= SCALE {
                    return Err(NumericError::InvalidInput);
                }

                let int_scaled = i128::from(integer) * SCALE;
                let frac = i128::from(fraction);

                if int_scaled < 0 {
                    Self::from_wide(int_scaled - frac)
                } else {
                    Self::from_wide(int_scaled + frac)
                }
            }

            /// Narrow a scaled i128, reporting the side that was exceeded.
            #[inline]
            pub(crate) fn from_wide(value: i128) -> NumericResult<Self> {
                <$raw>::try_from(value).map(Self).map_err(|_| {
                    if value < 0 {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    }
                })
            }

            /// Narrow a scaled i128, saturating at the bounds.
            #[inline]
            pub(crate) fn saturate_wide(value: i128) -> Self {
                Self(value.clamp(i128::from(<$raw>::MIN), i128::from(<$raw>::MAX)) as $raw)
            }

            /// Narrow a scaled i128, wrapping to the storage width.
            #[inline]
            pub(crate) fn wrap_wide(value: i128) -> Self {
                Self(value as $raw)
            }

            // ================================================================
            // Accessors
            // ================================================================

            /// Get the raw internal value (scaled).
            #[inline]
            pub const fn raw_value(self) -> $raw {
                self.0
            }

            /// Get the integer part (truncated toward zero).
            #[inline]
            pub const fn integer_part(self) -> $raw {
                self.0 / Self::SCALE
            }

            /// Get the fractional part as a positive value.
            #[inline]
            pub fn fractional_part(self) -> u64 {
                (i128::from(self.0) % SCALE).unsigned_abs() as u64
            }

            /// Check if value is zero.
            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }

            /// Check if value is negative.
            #[inline]
            pub fn is_negative(self) -> bool {
                i128::from(self.0) < 0
            }

            /// Get absolute value.
            ///
            /// # Errors
            /// Returns `Overflow` for the signed minimum, which has no
            /// positive counterpart.
            #[inline]
            pub fn abs(self) -> NumericResult<Self> {
                Self::from_wide(i128::from(self.0).abs())
            }

            // ================================================================
            // Arithmetic Operations
            // ================================================================

            /// Addition wrapping at the storage width.
            #[inline]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }

            /// Subtraction wrapping at the storage width.
            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }

            /// Negation wrapping at the storage width.
            #[inline]
            pub const fn wrapping_neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }

            /// Checked addition.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the result is out of range.
            #[inline]
            pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
                Self::from_wide(i128::from(self.0) + i128::from(rhs.0))
            }

            /// Checked subtraction.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the result is out of range.
            #[inline]
            pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
                Self::from_wide(i128::from(self.0) - i128::from(rhs.0))
            }

            /// Scaled product, truncated toward zero, wrapping to 64 bits.
            ///
            /// The raw product is formed in a 128-bit intermediate and only
            /// narrowed after dividing by the scale.
            #[inline]
            pub fn wrapping_mul(self, rhs: Self) -> Self {
                let product = (self.0 as $wide) * (rhs.0 as $wide);
                Self((product / (SCALE as $wide)) as $raw)
            }

            /// Checked multiplication, truncated toward zero.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the re-scaled result does
            /// not fit the storage width.
            #[inline]
            pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
                let product = (self.0 as $wide) * (rhs.0 as $wide);
                let result = product / (SCALE as $wide);

                <$raw>::try_from(result).map(Self).map_err(|_| {
                    if self.is_negative() != rhs.is_negative() {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    }
                })
            }

            /// Checked division, truncated toward zero.
            ///
            /// # Errors
            /// - `DivisionByZero` if `rhs` is zero
            /// - `Overflow`/`Underflow` if the quotient does not fit
            #[inline]
            pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
                if rhs.0 == 0 {
                    return Err(NumericError::DivisionByZero);
                }

                let dividend = (self.0 as $wide) * (SCALE as $wide);
                let result = dividend / (rhs.0 as $wide);

                <$raw>::try_from(result).map(Self).map_err(|_| {
                    if self.is_negative() != rhs.is_negative() {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    }
                })
            }

            /// Remainder of truncated division, carrying the dividend's sign.
            ///
            /// # Errors
            /// Returns `DivisionByZero` if `rhs` is zero.
            #[inline]
            pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
                if rhs.0 == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(Self(self.0.wrapping_rem(rhs.0)))
            }

            // ================================================================
            // Rounding
            // ================================================================

            /// Round to `digits` fractional digits.
            ///
            /// Digits at or above [`Self::DECIMALS`] leave the value
            /// unchanged.
            ///
            /// # Errors
            /// - `ArgumentOutOfRange` for negative `digits`
            /// - `Overflow`/`Underflow` if rounding away leaves the range
            pub fn round(self, digits: i32, mode: MidpointRounding) -> NumericResult<Self> {
                if digits < 0 {
                    return Err(NumericError::ArgumentOutOfRange);
                }
                if digits as u32 >= DECIMALS {
                    return Ok(self);
                }

                let unit = pow10(DECIMALS - digits as u32);
                let raw = i128::from(self.0);
                let q = round_quotient(raw / unit, raw % unit, unit, mode);

                Self::from_wide(q * unit)
            }

            /// Largest integral value not above `self`.
            #[inline]
            pub fn floor(self) -> NumericResult<Self> {
                self.round(0, MidpointRounding::ToNegativeInfinity)
            }

            /// Smallest integral value not below `self`.
            #[inline]
            pub fn ceiling(self) -> NumericResult<Self> {
                self.round(0, MidpointRounding::ToPositiveInfinity)
            }

            /// Drop the fractional digits.
            #[inline]
            pub const fn truncate(self) -> Self {
                Self(self.0 - self.0 % Self::SCALE)
            }

            // ================================================================
            // Conversion
            // ================================================================

            /// Convert to f64, recombining integral and fractional parts so
            /// large integral parts keep their precision.
            pub fn to_f64(self) -> f64 {
                let integral = (self.0 / Self::SCALE) as f64;
                let fractional = (self.0 % Self::SCALE) as f64 / SCALE as f64;
                integral + fractional
            }

            /// Convert to f32 through the split f64 path.
            pub fn to_f32(self) -> f32 {
                self.to_f64() as f32
            }

            /// Convert to rust_decimal::Decimal (exact).
            pub fn to_decimal(self) -> Decimal {
                Decimal::from_i128_with_scale(i128::from(self.0), DECIMALS)
            }

            /// Convert from rust_decimal::Decimal, truncating digits past the
            /// sixth.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the value is out of range.
            pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
                let sign_error = if d.is_sign_negative() {
                    NumericError::Underflow
                } else {
                    NumericError::Overflow
                };

                let scaled = d
                    .checked_mul(Decimal::from(Self::SCALE))
                    .ok_or(sign_error)?
                    .trunc();

                scaled
                    .to_i128()
                    .ok_or(sign_error)
                    .and_then(Self::from_wide)
            }

            /// Convert from f64, truncating toward zero and saturating out of
            /// range values. NaN maps to zero.
            pub fn from_f64_saturating(value: f64) -> Self {
                if value.is_nan() {
                    return Self::ZERO;
                }
                // `as i128` saturates on its own, including for infinities
                Self::saturate_wide((value * SCALE as f64).trunc() as i128)
            }

            // ================================================================
            // Parsing
            // ================================================================

            /// Parse text laid out according to `format`.
            ///
            /// Out-of-range magnitudes saturate to `MIN`/`MAX` by sign.
            ///
            /// # Errors
            /// Returns `InvalidInput` if the text is not a decimal literal.
            pub fn parse_with(text: &str, format: &NumberFormat) -> NumericResult<Self> {
                let canonical = format.normalize(text)?;
                parse_scaled(&canonical).map(Self::saturate_wide)
            }

            /// Returns the minimum of two values.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Returns the maximum of two values.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        // ====================================================================
        // Operator Implementations
        // ====================================================================

        // Add/Sub/Mul/Neg wrap at the storage width; use checked_* to detect it
        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                self.wrapping_add(rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                self.wrapping_sub(rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                self.wrapping_mul(rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                self.wrapping_neg()
            }
        }

        // ====================================================================
        // Display and Debug
        // ====================================================================

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}, raw={})", stringify!($name), self, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let int_part = self.integer_part();
                let frac_part = self.fractional_part();
                let sign = if self.is_negative() && int_part == 0 { "-" } else { "" };

                if frac_part == 0 {
                    return write!(f, "{}", int_part);
                }

                let digits = format!("{:0>width$}", frac_part, width = DECIMALS as usize);
                write!(f, "{}{}.{}", sign, int_part, digits.trim_end_matches('0'))
            }
        }

        impl std::str::FromStr for $name {
            type Err = NumericError;

            /// Parse a culture-invariant decimal literal.
            ///
            /// # Examples
            /// - "123" -> 123
            /// - "12.340000" -> 12.34
            /// - "-0.001" -> -0.001
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_with(s, &NumberFormat::invariant())
            }
        }

        // ====================================================================
        // num-traits Integration
        // ====================================================================

        impl num_traits::Bounded for $name {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }
        }

        impl num_traits::Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl num_traits::One for $name {
            fn one() -> Self {
                Self::ONE
            }
        }

        impl num_traits::ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                i64::try_from(self.integer_part()).ok()
            }

            fn to_u64(&self) -> Option<u64> {
                u64::try_from(self.integer_part()).ok()
            }

            fn to_i128(&self) -> Option<i128> {
                Some(i128::from(self.integer_part()))
            }

            fn to_f64(&self) -> Option<f64> {
                Some($name::to_f64(*self))
            }
        }

        impl num_traits::NumCast for $name {
            fn from<T: num_traits::ToPrimitive>(n: T) -> Option<Self> {
                let float = n.to_f64()?;
                if float.fract() == 0.0 {
                    if let Some(int) = n.to_i128() {
                        return int.checked_mul(SCALE).and_then(|v| Self::from_wide(v).ok());
                    }
                }
                if !float.is_finite() {
                    return None;
                }
                Self::from_wide((float * SCALE as f64).trunc() as i128).ok()
            }
        }
    };
}

fixed_point!(
    /// Signed fixed-point decimal: `raw / 10^6` stored in an i64.
    ///
    /// # Value Range
    /// - Minimum: -9,223,372,036,854.775808
    /// - Maximum: +9,223,372,036,854.775807
    /// - Precision: 0.000001
    ///
    /// `MIN` has no positive counterpart; negating it wraps back to `MIN`.
    ///
    /// # Example
    /// ```
    /// use numeric_toolkit::numeric::Fixed;
    ///
    /// let three = Fixed::from_integer(3).unwrap();
    /// let two = Fixed::from_integer(2).unwrap();
    /// assert_eq!(three.checked_div(two).unwrap().to_string(), "1.5");
    /// ```
    Fixed, i64, i128
);

fixed_point!(
    /// Non-negative fixed-point decimal: `raw / 10^6` stored in a u64.
    ///
    /// There is no true negation: unary minus and subtraction below zero wrap
    /// modulo 2^64.
    ///
    /// # Value Range
    /// - Minimum: 0
    /// - Maximum: 18,446,744,073,709.551615
    UFixed, u64, u128
);

// ============================================================================
// Tests
// ============================================================================
