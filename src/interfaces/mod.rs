// ============================================================================
// Interfaces Module
// Capability traits the facade providers implement
// ============================================================================

mod arithmetic;
mod byte_codec;
mod conversion;
mod random_gen;

pub use arithmetic::{Arithmetic, BitwiseOp, MathFunctions};
pub use byte_codec::{ByteBuf, ByteCodec};
pub use conversion::Conversion;
pub use random_gen::RandomGen;
