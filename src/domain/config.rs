// ============================================================================
// Number Format Configuration
// Style and culture settings consumed by every text parser in the crate
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Number Format
// ============================================================================

/// Describes how numeric text is laid out.
///
/// Parsers normalize input through [`NumberFormat::normalize`] into the
/// canonical `[-]digits[.digits]` form before interpreting it, so the same
/// format value drives integer, float, decimal and fixed-point parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Character separating the integral and fractional runs
    pub decimal_separator: char,

    /// Optional digit-grouping character, stripped before parsing
    /// None means grouping is rejected
    pub group_separator: Option<char>,

    /// Whether a leading '+' or '-' is accepted
    pub allow_leading_sign: bool,

    /// Whether leading and trailing whitespace is trimmed instead of rejected
    pub allow_whitespace: bool,
}

impl NumberFormat {
    /// Create a new format with the given decimal separator and permissive
    /// sign/whitespace handling
    pub fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator: None,
            allow_leading_sign: true,
            allow_whitespace: true,
        }
    }

    /// Builder method: Set the digit-grouping character
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = Some(separator);
        self
    }

    /// Builder method: Accept or reject a leading sign
    pub fn with_leading_sign(mut self, allow: bool) -> Self {
        self.allow_leading_sign = allow;
        self
    }

    /// Builder method: Trim or reject surrounding whitespace
    pub fn with_whitespace(mut self, allow: bool) -> Self {
        self.allow_whitespace = allow;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        let reserved = |c: char| c.is_ascii_digit() || c == '+' || c == '-' || c.is_whitespace();

        if reserved(self.decimal_separator) {
            tracing::debug!(separator = ?self.decimal_separator, "rejected decimal separator");
            return Err(NumericError::InvalidInput);
        }

        if let Some(group) = self.group_separator {
            if reserved(group) || group == self.decimal_separator {
                tracing::debug!(separator = ?group, "rejected group separator");
                return Err(NumericError::InvalidInput);
            }
        }

        Ok(())
    }

    /// Rewrite `text` into the canonical form understood by `str::parse`.
    ///
    /// Group separators are dropped, the decimal separator becomes '.', and
    /// sign/whitespace rules are enforced. Letters are passed through so float
    /// parsers still see exponents and `inf`/`NaN`.
    pub fn normalize(&self, text: &str) -> NumericResult<String> {
        self.validate()?;

        let trimmed = text.trim();
        if trimmed.len() != text.len() && !self.allow_whitespace {
            return Err(NumericError::InvalidInput);
        }
        if trimmed.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !self.allow_leading_sign && trimmed.starts_with(['+', '-']) {
            return Err(NumericError::InvalidInput);
        }

        let mut out = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if Some(c) == self.group_separator {
                continue;
            }
            if c == self.decimal_separator {
                out.push('.');
            } else if c == '.' {
                // A literal '.' that is neither separator is foreign to this format
                return Err(NumericError::InvalidInput);
            } else {
                out.push(c);
            }
        }

        Ok(out)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

// ============================================================================
// Preset Formats (Factory Methods)
// ============================================================================

impl NumberFormat {
    /// Culture-invariant format
    /// - '.' decimal separator
    /// - ',' grouping
    pub fn invariant() -> Self {
        Self::new('.').with_group_separator(',')
    }

    /// Continental European format
    /// - ',' decimal separator
    /// - '.' grouping
    pub fn european() -> Self {
        Self::new(',').with_group_separator('.')
    }

    /// Strict machine format
    /// - '.' decimal separator, no grouping
    /// - Sign allowed, whitespace rejected
    pub fn strict() -> Self {
        Self::new('.').with_whitespace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_normalize() {
        let format = NumberFormat::invariant();
        assert_eq!(format.normalize(" 1,234.5 ").unwrap(), "1234.5");
        assert_eq!(format.normalize("-0.25").unwrap(), "-0.25");
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_european_normalize() {
        let format = NumberFormat::european();
        assert_eq!(format.normalize("1.234,5").unwrap(), "1234.5");
        assert_eq!(format.normalize("-12,34").unwrap(), "-12.34");
    }

    #[test]
    fn test_strict_rejects_whitespace() {
        let format = NumberFormat::strict();
        assert_eq!(format.normalize(" 1"), Err(NumericError::InvalidInput));
        assert_eq!(format.normalize("1,5"), Ok("1,5".to_string()));
    }

    #[test]
    fn test_sign_rules() {
        let format = NumberFormat::invariant().with_leading_sign(false);
        assert_eq!(format.normalize("-1"), Err(NumericError::InvalidInput));
        assert_eq!(format.normalize("1").unwrap(), "1");
    }

    #[test]
    fn test_foreign_dot_rejected() {
        let format = NumberFormat::new(',');
        assert_eq!(format.normalize("1.5"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_validation() {
        let clash = NumberFormat::new('.').with_group_separator('.');
        assert!(clash.validate().is_err());

        let digit = NumberFormat::new('1');
        assert!(digit.validate().is_err());

        assert_eq!(NumberFormat::default(), NumberFormat::invariant());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            NumberFormat::invariant().normalize("   "),
            Err(NumericError::InvalidInput)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let format = NumberFormat::european().with_whitespace(false);
        let json = serde_json::to_string(&format).unwrap();
        let back: NumberFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }
}
