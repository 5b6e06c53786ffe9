// ============================================================================
// Bounded Random Generator
// Unbiased sampling over caller-given or full-domain ranges
// ============================================================================

use crate::domain::GenerationMode;
use crate::numeric::{Fixed, NumericError, NumericResult, UFixed};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::Rng;
use rust_decimal::Decimal;

/// Digits of the uniform fraction used for decimal interpolation
const FRACTION_DIGITS: u32 = 18;
const FRACTION_DENOM: i64 = 1_000_000_000_000_000_000;

// ============================================================================
// Bound Handling
// ============================================================================

/// Order a bound pair: Extended swaps, Default rejects reversed bounds.
#[inline]
fn order_bounds<T: PartialOrd>(lo: T, hi: T, mode: GenerationMode) -> NumericResult<(T, T)> {
    if lo <= hi {
        return Ok((lo, hi));
    }
    match mode {
        GenerationMode::Extended => Ok((hi, lo)),
        GenerationMode::Default => Err(NumericError::ArgumentOutOfRange),
    }
}

// ============================================================================
// Integers
// ============================================================================

/// Draw a uniform integer in `[0, span]` by rejection over raw bytes.
///
/// The top byte is masked to the bit length of `span`, so every candidate is
/// below `2 * (span + 1)` and each draw is accepted with probability >= 1/2.
fn sample_span<R: Rng + ?Sized>(rng: &mut R, span: &BigUint) -> BigUint {
    let bits = span.bits();
    let n_bytes = bits.div_ceil(8) as usize;
    let top_mask = match bits % 8 {
        0 => u8::MAX,
        r => (1u8 << r) - 1,
    };

    let mut bytes = vec![0u8; n_bytes];
    let mut redraws = 0u32;

    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(last) = bytes.last_mut() {
            *last &= top_mask;
        }

        let candidate = BigUint::from_bytes_le(&bytes);
        if &candidate <= span {
            if redraws > 0 {
                tracing::trace!(redraws, span_bits = bits, "rejection sampling accepted");
            }
            return candidate;
        }
        redraws += 1;
    }
}

/// Uniform integer in `[lo, hi]` carried as i128.
///
/// Bounds must lie within the 64-bit signed/unsigned domains. Spans that fit
/// a signed 32-bit int go straight to `gen_range`; wider spans use
/// arbitrary-precision rejection sampling.
///
/// # Errors
/// Returns `ArgumentOutOfRange` for reversed bounds in Default mode, or for
/// bounds outside `[i64::MIN, u64::MAX]`.
pub fn next_int_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: i128,
    hi: i128,
    mode: GenerationMode,
) -> NumericResult<i128> {
    let domain = i128::from(i64::MIN)..=i128::from(u64::MAX);
    if !domain.contains(&lo) || !domain.contains(&hi) {
        return Err(NumericError::ArgumentOutOfRange);
    }
    let (lo, hi) = order_bounds(lo, hi, mode)?;
    if lo == hi {
        return Ok(lo);
    }

    let span = hi - lo;

    if span < i128::from(i32::MAX) {
        let offset = rng.gen_range(0..=span as u32);
        return Ok(lo + i128::from(offset));
    }

    let span = BigUint::from(span as u128);
    let offset = sample_span(rng, &span)
        .to_i128()
        .ok_or(NumericError::Overflow)?;

    Ok(lo + offset)
}

/// Integer kinds the generator samples through the i128 carrier.
pub trait SampleInt: Copy + Into<i128> + TryFrom<i128> {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! sample_int {
    ($($t:ty),*) => {
        $(
            impl SampleInt for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

sample_int!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Uniform integer of kind `T` in `[lo, hi]`.
pub fn next_in_range<T: SampleInt, R: Rng + ?Sized>(
    rng: &mut R,
    lo: T,
    hi: T,
    mode: GenerationMode,
) -> NumericResult<T> {
    let value = next_int_in_range(rng, lo.into(), hi.into(), mode)?;
    T::try_from(value).map_err(|_| NumericError::Overflow)
}

/// Integer of kind `T` over its conventional (`[0, MAX]`) or full domain.
pub fn next_int<T: SampleInt, R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> T {
    let lo: i128 = match mode {
        GenerationMode::Default => 0,
        GenerationMode::Extended => T::MIN.into(),
    };
    next_int_in_range(rng, lo, T::MAX.into(), GenerationMode::Default)
        .ok()
        .and_then(|v| T::try_from(v).ok())
        .unwrap_or(T::MAX)
}

// ============================================================================
// Floating Point
// ============================================================================

/// Map f64 bits onto i64 so that integer order matches float order.
///
/// Negative values transform via `i64::MIN - bits`; both zeros map to 0.
#[inline]
fn f64_key(value: f64) -> i64 {
    let bits = value.to_bits() as i64;
    if bits < 0 {
        i64::MIN.wrapping_sub(bits)
    } else {
        bits
    }
}

#[inline]
fn f64_from_key(key: i64) -> f64 {
    let bits = if key < 0 { i64::MIN.wrapping_sub(key) } else { key };
    f64::from_bits(bits as u64)
}

#[inline]
fn f32_key(value: f32) -> i32 {
    let bits = value.to_bits() as i32;
    if bits < 0 {
        i32::MIN.wrapping_sub(bits)
    } else {
        bits
    }
}

#[inline]
fn f32_from_key(key: i32) -> f32 {
    let bits = if key < 0 { i32::MIN.wrapping_sub(key) } else { key };
    f32::from_bits(bits as u32)
}

/// Linear interpolation with a fallback for spans that overflow to infinity.
#[inline]
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    let direct = lo + (hi - lo) * t;
    let value = if direct.is_finite() {
        direct
    } else {
        lo * (1.0 - t) + hi * t
    };
    value.clamp(lo, hi)
}

/// Uniform f64 in `[lo, hi]`.
///
/// Default mode interpolates a `[0, 1)` fraction; Extended mode is uniform
/// over representable values between the bounds.
///
/// # Errors
/// Returns `ArgumentOutOfRange` for non-finite bounds, or reversed bounds in
/// Default mode.
pub fn next_f64_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: f64,
    hi: f64,
    mode: GenerationMode,
) -> NumericResult<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(NumericError::ArgumentOutOfRange);
    }
    let (lo, hi) = order_bounds(lo, hi, mode)?;
    if lo == hi {
        return Ok(lo);
    }

    match mode {
        GenerationMode::Default => Ok(lerp(lo, hi, rng.gen::<f64>())),
        GenerationMode::Extended => {
            let key = next_int_in_range(
                rng,
                i128::from(f64_key(lo)),
                i128::from(f64_key(hi)),
                GenerationMode::Default,
            )?;
            let key = i64::try_from(key).map_err(|_| NumericError::Overflow)?;
            Ok(f64_from_key(key))
        },
    }
}

/// Uniform f32 in `[lo, hi]`; see [`next_f64_in_range`].
pub fn next_f32_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: f32,
    hi: f32,
    mode: GenerationMode,
) -> NumericResult<f32> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(NumericError::ArgumentOutOfRange);
    }
    let (lo, hi) = order_bounds(lo, hi, mode)?;
    if lo == hi {
        return Ok(lo);
    }

    match mode {
        GenerationMode::Default => {
            let value = lerp(f64::from(lo), f64::from(hi), rng.gen::<f64>()) as f32;
            Ok(value.clamp(lo, hi))
        },
        GenerationMode::Extended => {
            let key = next_int_in_range(
                rng,
                i128::from(f32_key(lo)),
                i128::from(f32_key(hi)),
                GenerationMode::Default,
            )?;
            let key = i32::try_from(key).map_err(|_| NumericError::Overflow)?;
            Ok(f32_from_key(key))
        },
    }
}

/// f64 over `[0, 1)` (Default) or every finite value (Extended).
pub fn next_f64<R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> f64 {
    match mode {
        GenerationMode::Default => rng.gen::<f64>(),
        GenerationMode::Extended => {
            next_f64_in_range(rng, f64::MIN, f64::MAX, mode).unwrap_or(0.0)
        },
    }
}

/// f32 over `[0, 1)` (Default) or every finite value (Extended).
pub fn next_f32<R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> f32 {
    match mode {
        GenerationMode::Default => rng.gen::<f32>(),
        GenerationMode::Extended => {
            next_f32_in_range(rng, f32::MIN, f32::MAX, mode).unwrap_or(0.0)
        },
    }
}

// ============================================================================
// Decimal
// ============================================================================

/// Uniform decimal fraction in `[0, 1)` with 18 digits.
fn decimal_fraction<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(0..FRACTION_DENOM), FRACTION_DIGITS)
}

/// Decimal in `[lo, hi]` by interpolating an 18-digit fraction.
///
/// Both modes interpolate; Extended only relaxes bound order.
pub fn next_decimal_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: Decimal,
    hi: Decimal,
    mode: GenerationMode,
) -> NumericResult<Decimal> {
    let (lo, hi) = order_bounds(lo, hi, mode)?;
    if lo == hi {
        return Ok(lo);
    }

    let t = decimal_fraction(rng);

    let direct = hi
        .checked_sub(lo)
        .and_then(|span| span.checked_mul(t))
        .and_then(|offset| lo.checked_add(offset));

    // MIN..MAX spans overflow; weight the bounds instead
    let value = direct
        .or_else(|| {
            let low = lo.checked_mul(Decimal::ONE - t)?;
            let high = hi.checked_mul(t)?;
            low.checked_add(high)
        })
        .ok_or(NumericError::Overflow)?;

    Ok(value.max(lo).min(hi))
}

/// Decimal over `[0, 1)` (Default) or `[MIN, MAX]` (Extended).
pub fn next_decimal<R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> Decimal {
    match mode {
        GenerationMode::Default => decimal_fraction(rng),
        GenerationMode::Extended => {
            next_decimal_in_range(rng, Decimal::MIN, Decimal::MAX, mode).unwrap_or(Decimal::ZERO)
        },
    }
}

// ============================================================================
// Fixed Point
// ============================================================================

/// Fixed in `[lo, hi]`, uniform over representable (raw) values.
pub fn next_fixed_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: Fixed,
    hi: Fixed,
    mode: GenerationMode,
) -> NumericResult<Fixed> {
    next_in_range(rng, lo.raw_value(), hi.raw_value(), mode).map(Fixed::from_raw)
}

/// UFixed in `[lo, hi]`, uniform over representable (raw) values.
pub fn next_ufixed_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: UFixed,
    hi: UFixed,
    mode: GenerationMode,
) -> NumericResult<UFixed> {
    next_in_range(rng, lo.raw_value(), hi.raw_value(), mode).map(UFixed::from_raw)
}

/// Fixed over `[0, 1)` (Default) or `[MIN, MAX]` (Extended).
pub fn next_fixed<R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> Fixed {
    let raw = match mode {
        GenerationMode::Default => rng.gen_range(0..Fixed::SCALE),
        GenerationMode::Extended => next_int::<i64, R>(rng, mode),
    };
    Fixed::from_raw(raw)
}

/// UFixed over `[0, 1)` (Default) or `[MIN, MAX]` (Extended).
pub fn next_ufixed<R: Rng + ?Sized>(rng: &mut R, mode: GenerationMode) -> UFixed {
    let raw = match mode {
        GenerationMode::Default => rng.gen_range(0..UFixed::SCALE),
        GenerationMode::Extended => next_int::<u64, R>(rng, mode),
    };
    UFixed::from_raw(raw)
}
