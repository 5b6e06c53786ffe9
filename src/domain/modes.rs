// ============================================================================
// Mode Enums
// Conversion policies, generation modes and midpoint rounding strategies
// ============================================================================

use crate::numeric::NumericError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Mode
// ============================================================================

/// Governs how an out-of-range or NaN source maps into a destination kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ConversionMode {
    /// Natural narrowing conversion
    /// - Out of range or NaN into a non-float kind: `Overflow`
    #[default]
    Default = 0,

    /// Saturate to the destination bounds
    /// - NaN maps to zero
    /// - Never fails
    Clamp = 1,

    /// Truncate toward zero and wrap to the destination width
    /// - No range checking where the destination can wrap
    Cast = 2,

    /// Truncating cast with out-of-range values pre-clamped
    /// - Never fails
    CastClamp = 3,
}

impl ConversionMode {
    /// Whether the mode is guaranteed to succeed for every input
    pub const fn is_total(self) -> bool {
        matches!(self, ConversionMode::Clamp | ConversionMode::CastClamp)
    }
}

impl TryFrom<u8> for ConversionMode {
    type Error = NumericError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ConversionMode::Default),
            1 => Ok(ConversionMode::Clamp),
            2 => Ok(ConversionMode::Cast),
            3 => Ok(ConversionMode::CastClamp),
            _ => Err(NumericError::InvalidMode),
        }
    }
}

// ============================================================================
// Generation Mode
// ============================================================================

/// Selects the sampling domain for random generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum GenerationMode {
    /// Conventional sub-ranges, ordered bounds required
    /// - Integers: `[0, MAX]` when unbounded
    /// - Floats: linear interpolation over a `[0, 1)` fraction
    #[default]
    Default = 0,

    /// Full bit domain, bounds may arrive in either order
    /// - Floats sample uniformly over representable values
    Extended = 1,
}

impl TryFrom<u8> for GenerationMode {
    type Error = NumericError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(GenerationMode::Default),
            1 => Ok(GenerationMode::Extended),
            _ => Err(NumericError::InvalidMode),
        }
    }
}

// ============================================================================
// Midpoint Rounding
// ============================================================================

/// Rounding strategy applied at a decimal place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MidpointRounding {
    /// Banker's rounding: midpoints go to the even neighbour
    #[default]
    ToEven = 0,
    /// Midpoints go away from zero
    AwayFromZero = 1,
    /// Truncate
    ToZero = 2,
    /// Floor
    ToNegativeInfinity = 3,
    /// Ceiling
    ToPositiveInfinity = 4,
}

impl TryFrom<u8> for MidpointRounding {
    type Error = NumericError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(MidpointRounding::ToEven),
            1 => Ok(MidpointRounding::AwayFromZero),
            2 => Ok(MidpointRounding::ToZero),
            3 => Ok(MidpointRounding::ToNegativeInfinity),
            4 => Ok(MidpointRounding::ToPositiveInfinity),
            _ => Err(NumericError::InvalidMode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_mode_from_raw() {
        assert_eq!(ConversionMode::try_from(1), Ok(ConversionMode::Clamp));
        assert_eq!(ConversionMode::try_from(3), Ok(ConversionMode::CastClamp));
        assert_eq!(ConversionMode::try_from(4), Err(NumericError::InvalidMode));
    }

    #[test]
    fn test_generation_mode_from_raw() {
        assert_eq!(GenerationMode::try_from(0), Ok(GenerationMode::Default));
        assert_eq!(GenerationMode::try_from(1), Ok(GenerationMode::Extended));
        assert_eq!(GenerationMode::try_from(9), Err(NumericError::InvalidMode));
    }

    #[test]
    fn test_rounding_from_raw() {
        assert_eq!(
            MidpointRounding::try_from(4),
            Ok(MidpointRounding::ToPositiveInfinity)
        );
        assert_eq!(MidpointRounding::try_from(5), Err(NumericError::InvalidMode));
    }

    #[test]
    fn test_totality() {
        assert!(ConversionMode::Clamp.is_total());
        assert!(ConversionMode::CastClamp.is_total());
        assert!(!ConversionMode::Default.is_total());
        assert!(!ConversionMode::Cast.is_total());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ConversionMode::default(), ConversionMode::Default);
        assert_eq!(GenerationMode::default(), GenerationMode::Default);
        assert_eq!(MidpointRounding::default(), MidpointRounding::ToEven);
    }
}
