// ============================================================================
// Numeric Kind
// Runtime descriptor of every numeric kind the toolkit covers
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one numeric kind.
///
/// Dispatch never switches on this value; it exists for diagnostics, logging
/// and table-driven tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Fixed,
    UFixed,
}

impl NumericKind {
    /// Every kind, leaves first
    pub const ALL: [NumericKind; 13] = [
        NumericKind::Int8,
        NumericKind::UInt8,
        NumericKind::Int16,
        NumericKind::UInt16,
        NumericKind::Int32,
        NumericKind::UInt32,
        NumericKind::Int64,
        NumericKind::UInt64,
        NumericKind::Float32,
        NumericKind::Float64,
        NumericKind::Decimal,
        NumericKind::Fixed,
        NumericKind::UFixed,
    ];

    /// Short name used in logs
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "i8",
            NumericKind::UInt8 => "u8",
            NumericKind::Int16 => "i16",
            NumericKind::UInt16 => "u16",
            NumericKind::Int32 => "i32",
            NumericKind::UInt32 => "u32",
            NumericKind::Int64 => "i64",
            NumericKind::UInt64 => "u64",
            NumericKind::Float32 => "f32",
            NumericKind::Float64 => "f64",
            NumericKind::Decimal => "decimal",
            NumericKind::Fixed => "fixed",
            NumericKind::UFixed => "ufixed",
        }
    }

    /// Width of the byte encoding
    pub const fn size_in_bytes(self) -> usize {
        match self {
            NumericKind::Int8 | NumericKind::UInt8 => 1,
            NumericKind::Int16 | NumericKind::UInt16 => 2,
            NumericKind::Int32 | NumericKind::UInt32 | NumericKind::Float32 => 4,
            NumericKind::Int64
            | NumericKind::UInt64
            | NumericKind::Float64
            | NumericKind::Fixed
            | NumericKind::UFixed => 8,
            NumericKind::Decimal => 16,
        }
    }

    /// Whether the kind can hold negative values
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericKind::UInt8
                | NumericKind::UInt16
                | NumericKind::UInt32
                | NumericKind::UInt64
                | NumericKind::UFixed
        )
    }

    /// Whether the kind is an IEEE binary float
    pub const fn is_floating(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(NumericKind::Int8.size_in_bytes(), 1);
        assert_eq!(NumericKind::UInt16.size_in_bytes(), 2);
        assert_eq!(NumericKind::Float32.size_in_bytes(), 4);
        assert_eq!(NumericKind::Fixed.size_in_bytes(), 8);
        assert_eq!(NumericKind::Decimal.size_in_bytes(), 16);
    }

    #[test]
    fn test_signedness() {
        let unsigned: Vec<_> = NumericKind::ALL
            .iter()
            .filter(|k| !k.is_signed())
            .collect();
        assert_eq!(unsigned.len(), 5);
        assert!(NumericKind::Float64.is_signed());
        assert!(NumericKind::Float64.is_floating());
        assert!(!NumericKind::Decimal.is_floating());
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericKind::UFixed.to_string(), "ufixed");
    }
}
