// ============================================================================
// Random Module
// Bounded, bias-free random values for every numeric kind
// ============================================================================
//
// Integer spans that fit 32 bits use the rng's own bounded sampler. Wider
// spans draw raw bytes and reject out-of-range candidates. Extended float
// sampling is uniform over representable values, not over magnitude.

mod bounded;

pub use bounded::{
    next_decimal, next_decimal_in_range, next_f32, next_f32_in_range, next_f64,
    next_f64_in_range, next_fixed, next_fixed_in_range, next_in_range, next_int,
    next_int_in_range, next_ufixed, next_ufixed_in_range, SampleInt,
};
