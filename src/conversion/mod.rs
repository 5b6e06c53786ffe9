// ============================================================================
// Conversion Module
// Policy-driven conversion between every pair of numeric kinds
// ============================================================================

mod generic;
mod policy;

pub use generic::convert_saturating_generic;
pub use policy::{convert, Convertible, Repr};
