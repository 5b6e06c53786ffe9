// ============================================================================
// Byte Codec Interface
// Little-endian native encoding of each kind's backing storage
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use arrayvec::ArrayVec;

/// Inline buffer large enough for the widest kind (Decimal, 16 bytes)
pub type ByteBuf = ArrayVec<u8, 16>;

pub trait ByteCodec<T>: Send + Sync {
    /// Encoded width in bytes
    const SIZE: usize;

    fn to_bytes(&self, value: T) -> ByteBuf;

    /// # Errors
    /// `InvalidInput` when `bytes.len() != SIZE`.
    fn from_bytes(&self, bytes: &[u8]) -> NumericResult<T>;

    /// Encode into a caller-provided slice of exactly `SIZE` bytes.
    fn write_bytes(&self, value: T, out: &mut [u8]) -> NumericResult<()> {
        if out.len() != Self::SIZE {
            return Err(NumericError::InvalidInput);
        }
        out.copy_from_slice(&self.to_bytes(value));
        Ok(())
    }
}
