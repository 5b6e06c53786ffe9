// ============================================================================
// Numeric Toolkit Library
// Uniform arithmetic, conversion and sampling over every numeric kind
// ============================================================================

//! # Numeric Toolkit
//!
//! Thirteen numeric kinds (`i8`..`u64`, `f32`, `f64`, `Decimal`, and the
//! six-digit fixed-point `Fixed`/`UFixed`) behind one capability surface, so
//! generic code is written once and resolves the right implementation at
//! compile time.
//!
//! ## Features
//!
//! - **Fixed-point arithmetic** in pure integer math with 128-bit intermediates
//! - **Conversion policies** (Default, Clamp, Cast, CastClamp) for every pair of kinds
//! - **Bias-free random sampling** over caller ranges or the full bit domain
//! - **Bit operations** on float, double and decimal bit patterns
//! - **Byte codec** with the native little-endian layout of each kind
//!
//! ## Example
//!
//! ```rust
//! use numeric_toolkit::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // Fixed point: 3 / 2
//! let three = Fixed::from_integer(3).unwrap();
//! let two = Fixed::from_integer(2).unwrap();
//! assert_eq!(three.checked_div(two).unwrap().to_string(), "1.5");
//!
//! // Conversion policies
//! assert_eq!(convert::<i32, u8>(300, ConversionMode::Clamp), Ok(255));
//! assert!(convert::<i32, u8>(300, ConversionMode::Default).is_err());
//!
//! // Generic code over any kind
//! fn total<N: Numeric>(values: &[N]) -> N {
//!     sum(values).unwrap_or(N::MAX)
//! }
//! assert_eq!(total(&[1u16, 2, 3]), 6);
//!
//! // Sampling
//! let mut rng = StdRng::seed_from_u64(7);
//! let x = i64::provider()
//!     .next_in_range(&mut rng, -10, 10, GenerationMode::Default)
//!     .unwrap();
//! assert!((-10..=10).contains(&x));
//! ```

pub mod conversion;
pub mod domain;
pub mod facade;
pub mod interfaces;
pub mod numeric;
pub mod random;

// Re-exports for convenience
pub mod prelude {
    pub use crate::conversion::{convert, convert_saturating_generic, Convertible};
    pub use crate::domain::{
        ConversionMode, GenerationMode, MidpointRounding, NumberFormat, NumericKind,
    };
    pub use crate::facade::{convert_slice, mean, min_max, product, sum, Numeric};
    pub use crate::interfaces::{
        Arithmetic, BitwiseOp, ByteBuf, ByteCodec, Conversion, MathFunctions, RandomGen,
    };
    pub use crate::numeric::{BitPattern, Fixed, NumericError, NumericResult, UFixed};
}
