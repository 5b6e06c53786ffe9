// ============================================================================
// Random Generation Interface
// ============================================================================

use crate::domain::GenerationMode;
use crate::numeric::NumericResult;
use rand::Rng;

/// Random sampling for kind `T`.
///
/// The rng is borrowed mutably, so concurrent callers need their own source.
pub trait RandomGen<T>: Send + Sync {
    /// Draw over the conventional (Default) or full (Extended) domain
    fn next<R: Rng + ?Sized>(&self, rng: &mut R, mode: GenerationMode) -> T;

    /// Draw uniformly from `[lo, hi]`
    fn next_in_range<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lo: T,
        hi: T,
        mode: GenerationMode,
    ) -> NumericResult<T>;
}
