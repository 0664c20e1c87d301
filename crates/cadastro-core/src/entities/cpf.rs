//! CPF value object
//!
//! A CPF (Cadastro de Pessoas Físicas) is the Brazilian individual taxpayer
//! registry number: 11 digits where the last two are check digits computed
//! from the preceding nine with the standard modulo-11 algorithm.
//!
//! Parsing strips punctuation, so `"529.982.247-25"` and `"52998224725"`
//! produce the same canonical value. The canonical form (digits only) is
//! what gets persisted; the formatted form (`DDD.DDD.DDD-DD`) is what gets
//! shown to callers.

use crate::error::{Error, Result};
use std::fmt;

/// Number of digits in a canonical CPF
pub const CPF_LEN: usize = 11;

/// A validated CPF, held in canonical form (11 digits, no punctuation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf {
    value: String,
}

impl Cpf {
    /// Parse and validate a CPF from raw user input.
    ///
    /// Strips every non-digit character, then rejects:
    /// - cleaned strings that are not exactly 11 digits,
    /// - the eleven digit-repeated sequences (`00000000000` ... `99999999999`),
    /// - values whose check digits do not match the modulo-11 checksum.
    pub fn parse(raw: &str) -> Result<Cpf> {
        let cleaned: String = raw.chars().filter(char::is_ascii_digit).collect();

        if cleaned.len() != CPF_LEN {
            return Err(Error::InvalidCpf(format!(
                "expected {} digits, got {}",
                CPF_LEN,
                cleaned.len()
            )));
        }

        let digits: Vec<u8> = cleaned.bytes().map(|b| b - b'0').collect();

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(Error::InvalidCpf("repeated digit sequence".to_string()));
        }

        if check_digit(&digits[..9], 10) != digits[9]
            || check_digit(&digits[..10], 11) != digits[10]
        {
            return Err(Error::InvalidCpf("checksum mismatch".to_string()));
        }

        Ok(Cpf { value: cleaned })
    }

    /// Canonical value: 11 digits, no punctuation.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display form: `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.value[0..3],
            &self.value[3..6],
            &self.value[6..9],
            &self.value[9..11]
        )
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Modulo-11 check digit over `digits`, with weights descending from
/// `start_weight` down to 2. Remainders of 10 map to 0.
fn check_digit(digits: &[u8], start_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (start_weight - i as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder as u8
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Append the two modulo-11 check digits to a 9-digit base.
    fn with_check_digits(base: &[u8]) -> String {
        let mut digits = base.to_vec();
        digits.push(check_digit(&digits[..9], 10));
        digits.push(check_digit(&digits[..10], 11));
        digits.iter().map(|d| (d + b'0') as char).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Any 9-digit base with correctly computed check digits parses,
        /// and value() round-trips the same digits.
        #[test]
        fn proptest_generated_valid_cpfs_accepted(base in proptest::collection::vec(0u8..=9, 9)) {
            let cpf_str = with_check_digits(&base);
            // Repeated sequences are invalid by definition even with
            // matching check digits
            prop_assume!(!base.iter().all(|&d| d == base[0]));

            let cpf = Cpf::parse(&cpf_str);
            prop_assert!(cpf.is_ok(), "should accept {}", cpf_str);
            let parsed = cpf.unwrap();
            prop_assert_eq!(parsed.value(), cpf_str.as_str());
        }

        /// Mutating the first check digit always fails the checksum.
        #[test]
        fn proptest_mutated_check_digit_rejected(
            base in proptest::collection::vec(0u8..=9, 9),
            bump in 1u8..=9,
        ) {
            prop_assume!(!base.iter().all(|&d| d == base[0]));
            let valid = with_check_digits(&base);
            let mut bytes = valid.into_bytes();
            bytes[9] = b'0' + (bytes[9] - b'0' + bump) % 10;
            let mutated = String::from_utf8(bytes).unwrap();

            prop_assert!(Cpf::parse(&mutated).is_err(), "should reject {}", mutated);
        }

        /// Formatting a parsed CPF always yields DDD.DDD.DDD-DD.
        #[test]
        fn proptest_formatted_shape(base in proptest::collection::vec(0u8..=9, 9)) {
            prop_assume!(!base.iter().all(|&d| d == base[0]));
            let cpf = Cpf::parse(&with_check_digits(&base)).unwrap();
            let formatted = cpf.formatted();

            prop_assert_eq!(formatted.len(), 14);
            prop_assert_eq!(&formatted[3..4], ".");
            prop_assert_eq!(&formatted[7..8], ".");
            prop_assert_eq!(&formatted[11..12], "-");
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn proptest_parse_never_panics(s in "\\PC{0,64}") {
            let _ = Cpf::parse(&s);
        }
    }
}
