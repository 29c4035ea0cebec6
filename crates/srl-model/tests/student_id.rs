//! Property tests for student ID parsing.

use proptest::prelude::*;
use srl_model::{StudentId, ValidationError};

proptest! {
    #[test]
    fn positive_numbers_round_trip(value in 1u64..=u64::MAX) {
        let parsed = StudentId::parse(&value.to_string()).unwrap();
        prop_assert_eq!(parsed.get(), value);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(value in 1u64..1_000_000, pad in "[ \t]{0,3}") {
        let input = format!("{pad}{value}{pad}");
        prop_assert_eq!(StudentId::parse(&input).map(StudentId::get), Ok(value));
    }

    #[test]
    fn trailing_letters_are_rejected(value in 1u64..1_000_000, suffix in "[a-zA-Z]{1,4}") {
        let input = format!("{value}{suffix}");
        let is_not_a_number = matches!(
            StudentId::parse(&input),
            Err(ValidationError::NotANumber { .. })
        );
        prop_assert!(is_not_a_number);
    }

    #[test]
    fn negative_numbers_are_not_positive(value in 0u64..1_000_000) {
        prop_assert_eq!(
            StudentId::parse(&format!("-{value}")),
            Err(ValidationError::NotPositive)
        );
    }
}

#[test]
fn letters_only_is_not_a_number() {
    let err = StudentId::parse("abc").unwrap_err();
    assert_eq!(
        err,
        ValidationError::NotANumber {
            input: "abc".to_string()
        }
    );
}
