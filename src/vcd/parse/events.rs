// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! part of the vcd parser that decodes the timestamps and value changes
//! found after `$enddefinitions`
use std::num::ParseIntError;

use num::{BigUint, Zero};

use super::types::LineKind;

/// `#1234` -> 1234. The `#` has already been seen by the caller.
pub(super) fn parse_timestamp(digits: &str) -> Result<u64, ParseIntError> {
    digits.parse::<u64>()
}

/// Bit strings that are not pure binary (`x`, `z`, empty, ...) decode to
/// zero instead of failing the parse.
fn binary_str_to_biguint(binary_str: &str) -> BigUint {
    BigUint::parse_bytes(binary_str.as_bytes(), 2).unwrap_or_else(BigUint::zero)
}

/// `b1010 #` : a radix-prefixed digit string, one separator, the signal id.
pub(super) fn parse_vector_change(line: &str) -> LineKind<'_> {
    let mut words = line.split_ascii_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(binary_word), Some(id), None) => LineKind::VectorChange {
            value: binary_str_to_biguint(&binary_word[1..]),
            id,
        },
        _ => LineKind::Unmatched,
    }
}

/// `1!` : one value digit immediately followed by the signal id.
pub(super) fn parse_scalar_change(line: &str) -> LineKind<'_> {
    if line.contains(char::is_whitespace) {
        return LineKind::Unmatched;
    }

    let mut chars = line.chars();
    let Some(value) = chars.next().and_then(|chr| chr.to_digit(10)) else {
        return LineKind::Unmatched;
    };

    let id = chars.as_str();
    if id.is_empty() {
        return LineKind::Unmatched;
    }

    LineKind::ScalarChange {
        value: BigUint::from(value),
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(kind: LineKind) -> Option<(BigUint, &str)> {
        match kind {
            LineKind::VectorChange { value, id } | LineKind::ScalarChange { value, id } => {
                Some((value, id))
            }
            _ => None,
        }
    }

    #[test]
    fn vectors() {
        assert_eq!(
            value_of(parse_vector_change("b1010 #")),
            Some((BigUint::from(10u8), "#"))
        );
        assert_eq!(
            value_of(parse_vector_change("b0 !")),
            Some((BigUint::zero(), "!"))
        );
    }

    #[test]
    fn wide_vector_is_exact() {
        let ones = "1".repeat(100);
        let expected = (BigUint::from(1u8) << 100usize) - BigUint::from(1u8);
        assert_eq!(
            value_of(parse_vector_change(&format!("b{ones} w"))),
            Some((expected, "w"))
        );
    }

    #[test]
    fn non_binary_vectors_fall_back_to_zero() {
        assert_eq!(
            value_of(parse_vector_change("bxz1 #")),
            Some((BigUint::zero(), "#"))
        );
        assert_eq!(
            value_of(parse_vector_change("b102 #")),
            Some((BigUint::zero(), "#"))
        );
        assert_eq!(
            value_of(parse_vector_change("b #")),
            Some((BigUint::zero(), "#"))
        );
    }

    #[test]
    fn vectors_need_exactly_two_tokens() {
        assert_eq!(parse_vector_change("b1010"), LineKind::Unmatched);
        assert_eq!(parse_vector_change("b1010 # extra"), LineKind::Unmatched);
    }

    #[test]
    fn scalars() {
        assert_eq!(
            value_of(parse_scalar_change("1!")),
            Some((BigUint::from(1u8), "!"))
        );
        assert_eq!(
            value_of(parse_scalar_change("0%ab")),
            Some((BigUint::zero(), "%ab"))
        );
        // any digit is taken at face value
        assert_eq!(
            value_of(parse_scalar_change("7!")),
            Some((BigUint::from(7u8), "!"))
        );
    }

    #[test]
    fn unusable_scalars() {
        assert_eq!(parse_scalar_change("1"), LineKind::Unmatched);
        assert_eq!(parse_scalar_change("x!"), LineKind::Unmatched);
        assert_eq!(parse_scalar_change("z#"), LineKind::Unmatched);
        assert_eq!(parse_scalar_change("1 !"), LineKind::Unmatched);
        assert_eq!(parse_scalar_change("r1.5 !"), LineKind::Unmatched);
    }

    #[test]
    fn timestamps() {
        assert_eq!(parse_timestamp("0"), Ok(0));
        assert_eq!(parse_timestamp("18446744073709551615"), Ok(u64::MAX));
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("12a").is_err());
        assert!(parse_timestamp("-5").is_err());
    }
}
