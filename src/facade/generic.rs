// ============================================================================
// Generic Algorithms
// Written once over `N: Numeric`, dispatched to the kind's provider
// ============================================================================

use super::numeric::Numeric;
use crate::conversion::{self, convert_saturating_generic, Convertible};
use crate::domain::ConversionMode;
use crate::interfaces::{Arithmetic, Conversion};
use crate::numeric::{Fixed, NumericResult, UFixed};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Sum of `values` under the kind's arithmetic (integers wrap, decimals are checked).
pub fn sum<N: Numeric>(values: &[N]) -> NumericResult<N> {
    let provider = N::provider();
    values.iter().try_fold(N::ZERO, |acc, &v| provider.add(acc, v))
}

/// Product of `values`; `N::ONE` for an empty slice.
pub fn product<N: Numeric>(values: &[N]) -> NumericResult<N> {
    let provider = N::provider();
    values.iter().try_fold(N::ONE, |acc, &v| provider.mul(acc, v))
}

/// Smallest and largest element, `None` for an empty slice.
///
/// Unordered elements (NaN) are skipped unless they come first.
pub fn min_max<N: Numeric>(values: &[N]) -> Option<(N, N)> {
    let provider = N::provider();
    let mut iter = values.iter().copied();
    let first = iter.next()?;

    Some(iter.fold((first, first), |(lo, hi), v| {
        let lo = if provider.compare(v, lo) == Some(Ordering::Less) { v } else { lo };
        let hi = if provider.compare(v, hi) == Some(Ordering::Greater) { v } else { hi };
        (lo, hi)
    }))
}

/// Arithmetic mean evaluated in f64 and converted back saturating.
pub fn mean<N: Numeric>(values: &[N]) -> Option<N> {
    if values.is_empty() {
        return None;
    }

    let total: f64 = values
        .iter()
        .map(|&v| convert_saturating_generic::<N, f64>(v))
        .sum();

    Some(convert_saturating_generic(total / values.len() as f64))
}

/// Convert every element of `values` into `D` under `mode`, failing on the first miss.
pub fn convert_slice<S: Numeric, D: Numeric>(
    values: &[S],
    mode: ConversionMode,
) -> NumericResult<Vec<D>> {
    let provider = S::provider();
    values.iter().map(|&v| provider.convert_to::<D>(v, mode)).collect()
}

// ============================================================================
// Named Conversions
// ============================================================================

macro_rules! named_conversions {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Convert `value` into `", stringify!($t), "` under `mode`")]
            #[inline]
            pub fn $name<S: Convertible>(value: S, mode: ConversionMode) -> NumericResult<$t> {
                conversion::convert(value, mode)
            }
        )*
    };
}

named_conversions! {
    to_i8 => i8,
    to_u8 => u8,
    to_i16 => i16,
    to_u16 => u16,
    to_i32 => i32,
    to_u32 => u32,
    to_i64 => i64,
    to_u64 => u64,
    to_f32 => f32,
    to_f64 => f64,
    to_decimal => Decimal,
    to_fixed => Fixed,
    to_ufixed => UFixed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_sum_per_kind() {
        assert_eq!(sum(&[1u8, 2, 3]), Ok(6));
        assert_eq!(sum(&[200u8, 100]), Ok(44));
        assert_eq!(sum(&[Decimal::MAX, Decimal::ONE]), Err(NumericError::Overflow));
        assert_eq!(sum::<f64>(&[]), Ok(0.0));

        let halves = [Fixed::from_raw(500_000); 3];
        assert_eq!(sum(&halves).map(|v| v.to_string()), Ok("1.5".to_string()));
    }

    #[test]
    fn test_product() {
        assert_eq!(product(&[2i32, 3, 7]), Ok(42));
        assert_eq!(product::<u16>(&[]), Ok(1));
        assert_eq!(product(&[Decimal::new(5, 1), Decimal::from(4)]), Ok(Decimal::TWO));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3i64, -7, 12, 0]), Some((-7, 12)));
        assert_eq!(min_max::<u8>(&[]), None);
        assert_eq!(min_max(&[1.0, f64::NAN, -2.0]), Some((-2.0, 1.0)));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1i32, 2, 3, 4]), Some(2));
        assert_eq!(mean(&[1.0f64, 2.0]), Some(1.5));
        assert_eq!(mean::<u8>(&[]), None);
        assert_eq!(mean(&[u8::MAX, u8::MAX]), Some(u8::MAX));
    }

    #[test]
    fn test_convert_slice() {
        let wide = [-5i32, 100, 300];
        assert_eq!(convert_slice::<i32, u8>(&wide, ConversionMode::Clamp), Ok(vec![0, 100, 255]));
        assert!(convert_slice::<i32, u8>(&wide, ConversionMode::Default).is_err());
    }

    #[test]
    fn test_named_conversions() {
        assert_eq!(to_u8(300i32, ConversionMode::Clamp), Ok(255));
        assert_eq!(to_u8(-5i32, ConversionMode::Clamp), Ok(0));
        assert_eq!(to_i8(200u8, ConversionMode::Cast), Ok(-56));
        assert_eq!(to_fixed(1.25f64, ConversionMode::Default).map(|f| f.raw_value()), Ok(1_250_000));
    }
}
