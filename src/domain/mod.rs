// ============================================================================
// Domain Models Module
// Kind descriptors, mode enums and format configuration
// ============================================================================

pub mod config;
pub mod kind;
pub mod modes;

pub use config::NumberFormat;
pub use kind::NumericKind;
pub use modes::{ConversionMode, GenerationMode, MidpointRounding};
