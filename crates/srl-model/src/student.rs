//! Student identifiers.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::ValidationError;

/// A positive student identifier.
///
/// Only produced by [`StudentId::parse`] (or [`StudentId::new`] for values
/// already known to be positive), so a `StudentId` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(NonZeroU64);

impl StudentId {
    /// Wrap a raw value, returning `None` for zero.
    #[must_use]
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Parse operator input.
    ///
    /// Surrounding whitespace is ignored. The remainder must be decimal
    /// digits only: signs, decimal points and trailing garbage such as
    /// `"12abc"` are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        if let Some(magnitude) = trimmed.strip_prefix('-')
            && !magnitude.is_empty()
            && magnitude.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::NotPositive);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotANumber {
                input: trimmed.to_string(),
            });
        }

        let value: u64 = trimmed.parse().map_err(|_| ValidationError::TooLarge)?;
        Self::new(value).ok_or(ValidationError::NotPositive)
    }

    /// The raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(StudentId::parse("123").map(StudentId::get), Ok(123));
        assert_eq!(StudentId::parse("  42 ").map(StudentId::get), Ok(42));
        assert_eq!(StudentId::parse("007").map(StudentId::get), Ok(7));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(StudentId::parse(""), Err(ValidationError::Empty));
        assert_eq!(StudentId::parse("   "), Err(ValidationError::Empty));
        assert_eq!(StudentId::parse("0"), Err(ValidationError::NotPositive));
        assert_eq!(StudentId::parse("000"), Err(ValidationError::NotPositive));
        assert_eq!(StudentId::parse("-5"), Err(ValidationError::NotPositive));
        assert_eq!(
            StudentId::parse("abc"),
            Err(ValidationError::NotANumber {
                input: "abc".to_string()
            })
        );
        assert!(matches!(
            StudentId::parse("12abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            StudentId::parse("1.5"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            StudentId::parse("-"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(
            StudentId::parse("99999999999999999999999"),
            Err(ValidationError::TooLarge)
        );
    }

    #[test]
    fn test_display() {
        let id = StudentId::new(123).unwrap();
        assert_eq!(id.to_string(), "123");
        assert!(StudentId::new(0).is_none());
    }
}
