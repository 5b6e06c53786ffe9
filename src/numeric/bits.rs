// ============================================================================
// Bit Operations
// Reinterpret float, double and decimal bit patterns as integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::{Fixed, UFixed};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Integer storage a bit pattern lives in.
pub trait BitStorage:
    Copy
    + Eq
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits
    const BITS: u32;
}

macro_rules! bit_storage {
    ($($t:ty),*) => {
        $(
            impl BitStorage for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

bit_storage!(u8, i8, u16, i16, u32, i32, u64, i64, u128);

/// A value whose bit pattern can be viewed as an integer of equal width.
pub trait BitPattern: Copy {
    /// Integer of matching width
    type Bits: BitStorage;

    fn to_bit_pattern(self) -> Self::Bits;

    fn from_bit_pattern(bits: Self::Bits) -> Self;
}

macro_rules! identity_pattern {
    ($($t:ty),*) => {
        $(
            impl BitPattern for $t {
                type Bits = $t;

                #[inline]
                fn to_bit_pattern(self) -> Self::Bits {
                    self
                }

                #[inline]
                fn from_bit_pattern(bits: Self::Bits) -> Self {
                    bits
                }
            }
        )*
    };
}

identity_pattern!(u8, i8, u16, i16, u32, i32, u64, i64);

impl BitPattern for f32 {
    type Bits = u32;

    #[inline]
    fn to_bit_pattern(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn from_bit_pattern(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

impl BitPattern for f64 {
    type Bits = u64;

    #[inline]
    fn to_bit_pattern(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

/// Decimal packs its 96-bit mantissa into the low bits and the flags word
/// (scale and sign) into the top 32 bits.
///
/// Patterns that break the scale bound are normalized by
/// `Decimal::deserialize`, so bitwise results on decimals are only
/// meaningful for the mantissa words.
impl BitPattern for Decimal {
    type Bits = u128;

    #[inline]
    fn to_bit_pattern(self) -> u128 {
        // serialize() is flags, lo, mid, hi
        u128::from_le_bytes(self.serialize()).rotate_right(32)
    }

    #[inline]
    fn from_bit_pattern(bits: u128) -> Self {
        Decimal::deserialize(bits.rotate_left(32).to_le_bytes())
    }
}

impl BitPattern for Fixed {
    type Bits = i64;

    #[inline]
    fn to_bit_pattern(self) -> i64 {
        self.raw_value()
    }

    #[inline]
    fn from_bit_pattern(bits: i64) -> Self {
        Fixed::from_raw(bits)
    }
}

impl BitPattern for UFixed {
    type Bits = u64;

    #[inline]
    fn to_bit_pattern(self) -> u64 {
        self.raw_value()
    }

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        UFixed::from_raw(bits)
    }
}

// ============================================================================
// Operations
// ============================================================================

#[inline]
pub fn bit_and<T: BitPattern>(a: T, b: T) -> T {
    T::from_bit_pattern(a.to_bit_pattern() & b.to_bit_pattern())
}

#[inline]
pub fn bit_or<T: BitPattern>(a: T, b: T) -> T {
    T::from_bit_pattern(a.to_bit_pattern() | b.to_bit_pattern())
}

#[inline]
pub fn bit_xor<T: BitPattern>(a: T, b: T) -> T {
    T::from_bit_pattern(a.to_bit_pattern() ^ b.to_bit_pattern())
}

#[inline]
pub fn bit_not<T: BitPattern>(a: T) -> T {
    T::from_bit_pattern(!a.to_bit_pattern())
}

/// Shift the bit pattern left.
///
/// # Errors
/// Returns `ArgumentOutOfRange` if `count` is not below the pattern width.
#[inline]
pub fn shift_left<T: BitPattern>(a: T, count: u32) -> NumericResult<T> {
    if count >= T::Bits::BITS {
        return Err(NumericError::ArgumentOutOfRange);
    }
    Ok(T::from_bit_pattern(a.to_bit_pattern() << count))
}

/// Shift the bit pattern right (arithmetic for signed storage).
///
/// # Errors
/// Returns `ArgumentOutOfRange` if `count` is not below the pattern width.
#[inline]
pub fn shift_right<T: BitPattern>(a: T, count: u32) -> NumericResult<T> {
    if count >= T::Bits::BITS {
        return Err(NumericError::ArgumentOutOfRange);
    }
    Ok(T::from_bit_pattern(a.to_bit_pattern() >> count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_sign_flip() {
        let sign = f64::from_bits(1 << 63);
        assert_eq!(bit_xor(2.5f64, sign), -2.5);
        assert_eq!(bit_and(-2.5f64, bit_not(sign)), 2.5);
        assert_eq!(bit_or(1.0f32, -0.0f32), -1.0);
    }

    #[test]
    fn test_float_shift() {
        // 1.0f32 = 0x3F80_0000; shifting right by 23 isolates the exponent
        let exponent = shift_right(1.0f32, 23).unwrap().to_bits();
        assert_eq!(exponent, 127);
        assert_eq!(shift_left(1.0f64, 64), Err(NumericError::ArgumentOutOfRange));
    }

    #[test]
    fn test_decimal_pattern_round_trip() {
        let d = Decimal::new(-12345, 3);
        assert_eq!(Decimal::from_bit_pattern(d.to_bit_pattern()), d);
        assert_eq!(bit_and(d, d), d);
        assert_eq!(bit_or(d, Decimal::ZERO), d);
    }

    #[test]
    fn test_decimal_mantissa_mask() {
        let d = Decimal::new(0b1111, 0);
        let mask = Decimal::new(0b0101, 0);
        assert_eq!(bit_and(d, mask), mask);
        assert_eq!(shift_right(d, 2).unwrap(), Decimal::new(0b0011, 0));
    }

    #[test]
    fn test_integer_identity() {
        assert_eq!(bit_xor(0b1100u8, 0b1010), 0b0110);
        assert_eq!(shift_right(-8i32, 1).unwrap(), -4);
        assert_eq!(shift_left(1u8, 8), Err(NumericError::ArgumentOutOfRange));
    }

    #[test]
    fn test_fixed_raw_bits() {
        let x = Fixed::from_raw(0b1010);
        assert_eq!(bit_not(x).raw_value(), !0b1010i64);
        assert_eq!(shift_left(UFixed::from_raw(1), 63).unwrap().raw_value(), 1 << 63);
    }
}
