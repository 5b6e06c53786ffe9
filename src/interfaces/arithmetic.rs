// ============================================================================
// Arithmetic Interfaces
// Operator and transcendental capabilities every numeric kind exposes
// ============================================================================

use crate::domain::MidpointRounding;
use crate::numeric::{self, BitPattern, NumericResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary bitwise operator applied to a bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

/// Basic arithmetic for one numeric kind.
///
/// Failure policy by family:
/// - integers wrap, dividing by zero is an error
/// - floats follow IEEE 754 and never fail
/// - decimals are checked
/// - fixed point wraps except for division and remainder
pub trait Arithmetic<T>: Send + Sync {
    fn add(&self, a: T, b: T) -> NumericResult<T>;

    fn sub(&self, a: T, b: T) -> NumericResult<T>;

    fn mul(&self, a: T, b: T) -> NumericResult<T>;

    fn div(&self, a: T, b: T) -> NumericResult<T>;

    fn rem(&self, a: T, b: T) -> NumericResult<T>;

    fn neg(&self, a: T) -> NumericResult<T>;

    fn abs(&self, a: T) -> NumericResult<T>;

    /// Apply `op` to the bit patterns of `a` and `b`
    fn bitwise(&self, op: BitwiseOp, a: T, b: T) -> T
    where
        T: BitPattern,
    {
        match op {
            BitwiseOp::And => numeric::bit_and(a, b),
            BitwiseOp::Or => numeric::bit_or(a, b),
            BitwiseOp::Xor => numeric::bit_xor(a, b),
        }
    }

    fn bit_not(&self, a: T) -> T
    where
        T: BitPattern,
    {
        numeric::bit_not(a)
    }

    fn shift_left(&self, a: T, count: u32) -> NumericResult<T>
    where
        T: BitPattern,
    {
        numeric::shift_left(a, count)
    }

    fn shift_right(&self, a: T, count: u32) -> NumericResult<T>
    where
        T: BitPattern,
    {
        numeric::shift_right(a, count)
    }

    /// Total for every kind except NaN floats
    fn compare(&self, a: T, b: T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        a.partial_cmp(&b)
    }
}

/// Transcendental and rounding functions.
///
/// Defaults evaluate in f64 through `to_f64`/`from_f64`; kinds that are not
/// floats bring the result back saturating, so `sqrt(-1)` is zero for them.
pub trait MathFunctions<T>: Send + Sync {
    /// Widen into f64 for evaluation
    fn to_f64(&self, x: T) -> f64;

    /// Narrow an f64 result back into the kind
    fn from_f64(&self, x: f64) -> T;

    fn floor(&self, x: T) -> NumericResult<T>;

    fn ceiling(&self, x: T) -> NumericResult<T>;

    fn truncate(&self, x: T) -> T;

    /// Round to `digits` fractional digits.
    ///
    /// # Errors
    /// `ArgumentOutOfRange` for negative `digits`.
    fn round(&self, x: T, digits: i32, mode: MidpointRounding) -> NumericResult<T>;

    fn sqrt(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).sqrt())
    }

    fn cbrt(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).cbrt())
    }

    fn exp(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).exp())
    }

    fn ln(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).ln())
    }

    fn log10(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).log10())
    }

    fn log(&self, x: T, base: T) -> T {
        self.from_f64(self.to_f64(x).log(self.to_f64(base)))
    }

    fn pow(&self, x: T, y: T) -> T {
        self.from_f64(self.to_f64(x).powf(self.to_f64(y)))
    }

    fn sin(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).sin())
    }

    fn cos(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).cos())
    }

    fn tan(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).tan())
    }

    fn asin(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).asin())
    }

    fn acos(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).acos())
    }

    fn atan(&self, x: T) -> T {
        self.from_f64(self.to_f64(x).atan())
    }

    fn atan2(&self, y: T, x: T) -> T {
        self.from_f64(self.to_f64(y).atan2(self.to_f64(x)))
    }
}
