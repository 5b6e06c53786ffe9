// ============================================================================
// Facade Module
// One stateless provider per numeric kind, resolved through `Numeric`
// ============================================================================
//
// Providers are zero-sized statics. Each implements every capability trait
// in `interfaces` for its kind:
// - integer.rs: i8 through u64
// - float.rs: f32 and f64
// - decimal.rs: rust_decimal::Decimal
// - fixed.rs: Fixed and UFixed

mod decimal;
mod fixed;
mod float;
mod generic;
mod integer;
mod numeric;

pub use generic::{
    convert_slice, mean, min_max, product, sum, to_decimal, to_f32, to_f64, to_fixed, to_i16,
    to_i32, to_i64, to_i8, to_u16, to_u32, to_u64, to_u8, to_ufixed,
};
pub use numeric::{
    DecimalProvider, F32Provider, F64Provider, FixedProvider, I16Provider, I32Provider,
    I64Provider, I8Provider, Numeric, U16Provider, U32Provider, U64Provider, U8Provider,
    UFixedProvider,
};
