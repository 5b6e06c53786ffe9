// ============================================================================
// Saturating Generic Conversion
// The never-failing conversion generic code reaches through the facade
// ============================================================================

use super::policy::{convert, Repr};
use crate::domain::ConversionMode;
use crate::facade::Numeric;

/// Convert `value` into `D`, resolving every failure to a destination value.
///
/// - NaN becomes `D::ZERO`, `+inf` becomes `D::MAX`, `-inf` becomes `D::MIN`
/// - a value out of range becomes `D::MAX`, or `D::MIN` when negative
///   (`D::ZERO` for unsigned destinations)
/// - a non-zero positive value that underflows to zero in a float
///   destination becomes `D::EPSILON`
pub fn convert_saturating_generic<S: Numeric, D: Numeric>(value: S) -> D {
    let repr = value.to_repr();

    if let Repr::Float(f) = repr {
        if f.is_nan() {
            tracing::trace!(src = S::KIND.name(), dst = D::KIND.name(), "NaN mapped to zero");
            return D::ZERO;
        }
        if f.is_infinite() {
            tracing::trace!(src = S::KIND.name(), dst = D::KIND.name(), "infinity saturated");
            return if f > 0.0 { D::MAX } else { D::MIN };
        }
    }

    match convert::<S, D>(value, ConversionMode::Default) {
        Ok(result) => {
            let vanished = D::KIND.is_floating() && result == D::ZERO && !repr.is_zero();
            if vanished && !repr.is_negative() {
                tracing::trace!(src = S::KIND.name(), dst = D::KIND.name(), "underflow raised to epsilon");
                D::EPSILON
            } else {
                result
            }
        },
        Err(err) => {
            let fallback = match (repr.is_negative(), D::KIND.is_signed()) {
                (true, true) => D::MIN,
                (true, false) => D::ZERO,
                (false, _) => D::MAX,
            };
            tracing::trace!(
                src = S::KIND.name(),
                dst = D::KIND.name(),
                %err,
                fallback = %fallback,
                "saturating fallback"
            );
            fallback
        },
    }
}
