// ============================================================================
// Conversion Interface
// Policy conversion, parsing and formatting for one numeric kind
// ============================================================================

use crate::conversion::{self, Convertible};
use crate::domain::{ConversionMode, NumberFormat};
use crate::facade::Numeric;
use crate::numeric::NumericResult;

/// Conversion capability of kind `T`
pub trait Conversion<T>: Send + Sync {
    /// Convert a `T` into kind `D`
    fn convert_to<D: Convertible>(&self, value: T, mode: ConversionMode) -> NumericResult<D>
    where
        T: Convertible,
    {
        conversion::convert(value, mode)
    }

    /// Convert a value of kind `S` into `T`
    fn convert_from<S: Convertible>(&self, value: S, mode: ConversionMode) -> NumericResult<T>
    where
        T: Convertible,
    {
        conversion::convert(value, mode)
    }

    /// Convert into `T` without failing (see [`conversion::convert_saturating_generic`])
    fn convert_from_saturating<S: Numeric>(&self, value: S) -> T
    where
        T: Numeric,
    {
        conversion::convert_saturating_generic(value)
    }

    /// Parse text written in `format`
    fn parse(&self, text: &str, format: &NumberFormat) -> NumericResult<T>;

    /// Invariant textual form
    fn format(&self, value: T) -> String
    where
        T: std::fmt::Display,
    {
        value.to_string()
    }
}
