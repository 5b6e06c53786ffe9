// ============================================================================
// Numeric Module
// Fixed-point arithmetic, bit reinterpretation and error types
// ============================================================================
//
// This module provides:
// - Fixed / UFixed: scaled integers with six implied fractional digits
// - BitPattern: integer views of float, double and decimal bit patterns
// - NumericError: error kinds shared by the whole crate
//
// Design principles:
// - Pure integer math for fixed point, 128-bit intermediates for mul/div
// - All fallible arithmetic returns Result (no panics)
// - Operators wrap at the storage width, checked_* reports it

pub mod bits;
mod errors;
mod fixed_decimal;

pub use bits::{bit_and, bit_not, bit_or, bit_xor, shift_left, shift_right, BitPattern};
pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{Fixed, UFixed};
